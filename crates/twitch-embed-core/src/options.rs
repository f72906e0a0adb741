//! Initialization options for `Twitch.Player` and `Twitch.Embed`
//!
//! Options are passed through to the widget unvalidated. When several of
//! `channel`, `video` and `collection` are set, the widget decides which wins
//! (channel first, then collection starting at video, then video).

use serde::{Deserialize, Serialize};

use crate::types::{Dimension, EmbedLayout, EmbedTheme};
use crate::Result;

/// Recommended minimum width, in pixels
pub const MIN_WIDTH: u32 = 400;
/// Recommended minimum height, in pixels
pub const MIN_HEIGHT: u32 = 300;

/// Options accepted by the `Twitch.Player` constructor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerOptions {
    /// Width of the embedded window, in pixels or as a percentage
    pub width: Dimension,
    /// Height of the embedded window, in pixels or as a percentage
    pub height: Dimension,
    /// Channel name, for a live stream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Video ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    /// Collection ID. With `video` set, the collection starts from that video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// Domains embedding the widget, when different from the instantiating one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<String>>,
    /// Start playing without a click. Widget default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    /// Start muted. Widget default: false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    /// VOD start position in `XhYmZs` form. Widget default: `0h0m0s`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl PlayerOptions {
    /// Options with only a size set
    pub fn new(width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            channel: None,
            video: None,
            collection: None,
            parent: None,
            autoplay: None,
            muted: None,
            time: None,
        }
    }

    /// Live stream of a channel at the recommended minimum size
    pub fn for_channel(channel: impl Into<String>) -> Self {
        Self {
            channel: Some(channel.into()),
            ..Default::default()
        }
    }

    /// A single VOD at the recommended minimum size
    pub fn for_video(video: impl Into<String>) -> Self {
        Self {
            video: Some(video.into()),
            ..Default::default()
        }
    }

    /// A collection, optionally starting from one of its videos
    pub fn for_collection(collection: impl Into<String>, video: Option<String>) -> Self {
        Self {
            collection: Some(collection.into()),
            video,
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    /// Add a parent domain to the allow-list
    pub fn with_parent(mut self, domain: impl Into<String>) -> Self {
        self.parent.get_or_insert_with(Vec::new).push(domain.into());
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = Some(autoplay);
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = Some(muted);
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Parse options from a JSON object using the widget's field names
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Export as JSON for JS interop
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self::new(MIN_WIDTH, MIN_HEIGHT)
    }
}

/// Options accepted by the `Twitch.Embed` constructor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedOptions {
    #[serde(flatten)]
    pub player: PlayerOptions,
    /// Video only, or video with chat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<EmbedLayout>,
    /// Color theme. Widget default: dark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<EmbedTheme>,
    /// Allow fullscreen. Widget default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_fullscreen: Option<bool>,
}

impl EmbedOptions {
    pub fn new(width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        Self::from(PlayerOptions::new(width, height))
    }

    /// Live stream of a channel at the recommended minimum size
    pub fn for_channel(channel: impl Into<String>) -> Self {
        Self::from(PlayerOptions::for_channel(channel))
    }

    /// A single VOD at the recommended minimum size
    pub fn for_video(video: impl Into<String>) -> Self {
        Self::from(PlayerOptions::for_video(video))
    }

    /// A collection, optionally starting from one of its videos
    pub fn for_collection(collection: impl Into<String>, video: Option<String>) -> Self {
        Self::from(PlayerOptions::for_collection(collection, video))
    }

    pub fn with_size(mut self, width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        self.player = self.player.with_size(width, height);
        self
    }

    pub fn with_parent(mut self, domain: impl Into<String>) -> Self {
        self.player = self.player.with_parent(domain);
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.player.autoplay = Some(autoplay);
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.player.muted = Some(muted);
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.player.time = Some(time.into());
        self
    }

    pub fn with_layout(mut self, layout: EmbedLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_theme(mut self, theme: EmbedTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_allow_fullscreen(mut self, allow: bool) -> Self {
        self.allow_fullscreen = Some(allow);
        self
    }

    /// Player options of this embed, without the embed-only fields
    pub fn player_options(&self) -> PlayerOptions {
        self.player.clone()
    }

    /// Layout the widget picks when none is given
    pub fn effective_layout(&self) -> EmbedLayout {
        self.layout.unwrap_or(if self.player.channel.is_some() {
            EmbedLayout::VideoWithChat
        } else {
            EmbedLayout::Video
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<PlayerOptions> for EmbedOptions {
    fn from(player: PlayerOptions) -> Self {
        Self {
            player,
            layout: None,
            theme: None,
            allow_fullscreen: None,
        }
    }
}
