//! Value types shared by the player and embed facades

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Size of the embedded window: pixels, or a relative string such as `"100%"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Pixels(u32),
    Relative(String),
}

impl Dimension {
    /// Percentage of the parent container
    pub fn percent(value: u8) -> Self {
        Dimension::Relative(format!("{}%", value))
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Dimension::Pixels(px)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Relative(value.to_string())
    }
}

impl From<String> for Dimension {
    fn from(value: String) -> Self {
        Dimension::Relative(value)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Pixels(px) => write!(f, "{}", px),
            Dimension::Relative(value) => write!(f, "{}", value),
        }
    }
}

/// Screen layout of a `Twitch.Embed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmbedLayout {
    /// Video and chat side by side; chat renders under the video at narrow sizes.
    /// Default when a channel is provided, live content only.
    #[serde(rename = "video-with-chat")]
    VideoWithChat,
    /// Video player only. Default when no channel is provided.
    #[serde(rename = "video")]
    Video,
}

impl EmbedLayout {
    /// String literal expected by the widget
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedLayout::VideoWithChat => "video-with-chat",
            EmbedLayout::Video => "video",
        }
    }
}

impl fmt::Display for EmbedLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmbedLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video-with-chat" => Ok(EmbedLayout::VideoWithChat),
            "video" => Ok(EmbedLayout::Video),
            other => Err(Error::InvalidOptions(format!("unknown layout: {}", other))),
        }
    }
}

/// Color theme of a `Twitch.Embed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedTheme {
    Light,
    #[default]
    Dark,
}

impl EmbedTheme {
    /// String literal expected by the widget
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedTheme::Light => "light",
            EmbedTheme::Dark => "dark",
        }
    }
}

impl fmt::Display for EmbedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmbedTheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(EmbedTheme::Light),
            "dark" => Ok(EmbedTheme::Dark),
            other => Err(Error::InvalidOptions(format!("unknown theme: {}", other))),
        }
    }
}

/// One selectable video rendition as reported by the widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quality {
    /// Bitrate in bits per second
    pub bitrate: u64,
    /// Codec string, e.g. `avc1.64002A,mp4a.40.2`
    pub codecs: String,
    /// Rendition group; pass this to `set_quality`
    pub group: String,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framerate: Option<f64>,
    pub is_default: bool,
    /// Display name, e.g. `1080p60 (source)`
    pub name: String,
    pub width: u32,
}

/// Snapshot returned by `getPlaybackStats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStatistics {
    #[serde(default)]
    pub video_statistics: VideoStatistics,
}

/// Video portion of a playback statistics snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoStatistics {
    pub backend_version: String,
    /// Buffered media, in seconds
    pub buffer_size: f64,
    pub codecs: String,
    pub display_resolution: String,
    pub fps: f64,
    /// Broadcaster-to-viewer latency, in seconds
    pub hls_latency_broadcaster: f64,
    pub latency_mode: String,
    pub playback_rate: f64,
    /// Dropped frame count
    pub skipped_frames: u64,
    pub video_resolution: String,
}
