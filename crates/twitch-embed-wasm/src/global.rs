//! Handles over the page-global widget

use twitch_embed_core::{
    Callback, EmbedHandle, EmbedOptions, Error, PlaybackStatistics, PlayerHandle, PlayerOptions,
    Quality,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use crate::bindings::{self, constructor_available, js_error_message, to_js_options};

/// A constructed `Twitch.Player`
#[derive(Debug, Clone)]
pub struct GlobalPlayer {
    player: bindings::Player,
}

impl GlobalPlayer {
    pub const CONSTRUCTOR: &'static str = "Twitch.Player";

    /// Instantiate `Twitch.Player` if the page provides it
    pub fn construct(mount_id: &str, options: &PlayerOptions) -> twitch_embed_core::Result<Self> {
        if !constructor_available("Player") {
            return Err(Error::WidgetUnavailable {
                constructor: Self::CONSTRUCTOR,
            });
        }
        let js_options =
            to_js_options(options).map_err(|err| Error::construction(Self::CONSTRUCTOR, err.to_string()))?;
        let player = bindings::Player::new(mount_id, &js_options)
            .map_err(|err| Error::construction(Self::CONSTRUCTOR, js_error_message(&err)))?;
        Ok(Self { player })
    }

    pub fn from_js(player: bindings::Player) -> Self {
        Self { player }
    }

    pub fn as_js(&self) -> &bindings::Player {
        &self.player
    }
}

impl PlayerHandle for GlobalPlayer {
    type Error = JsValue;

    fn pause(&self) -> Result<(), JsValue> {
        self.player.pause()
    }

    fn play(&self) -> Result<(), JsValue> {
        self.player.play()
    }

    fn seek(&self, timestamp: f64) -> Result<(), JsValue> {
        self.player.seek(timestamp)
    }

    fn set_channel(&self, channel: &str) -> Result<(), JsValue> {
        self.player.set_channel(channel)
    }

    fn set_collection(&self, collection_id: &str, video_id: Option<&str>) -> Result<(), JsValue> {
        self.player.set_collection(collection_id, video_id)
    }

    fn set_quality(&self, quality: &str) -> Result<(), JsValue> {
        self.player.set_quality(quality)
    }

    fn set_video(&self, video_id: &str, timestamp: f64) -> Result<(), JsValue> {
        self.player.set_video(video_id, timestamp)
    }

    fn get_muted(&self) -> Result<bool, JsValue> {
        self.player.get_muted()
    }

    fn set_muted(&self, muted: bool) -> Result<(), JsValue> {
        self.player.set_muted(muted)
    }

    fn get_volume(&self) -> Result<f64, JsValue> {
        self.player.get_volume()
    }

    fn set_volume(&self, volume: f64) -> Result<(), JsValue> {
        self.player.set_volume(volume)
    }

    fn get_channel(&self) -> Result<Option<String>, JsValue> {
        self.player.get_channel()
    }

    fn get_current_time(&self) -> Result<f64, JsValue> {
        self.player.get_current_time()
    }

    fn get_duration(&self) -> Result<f64, JsValue> {
        self.player.get_duration()
    }

    fn get_ended(&self) -> Result<bool, JsValue> {
        self.player.get_ended()
    }

    fn get_qualities(&self) -> Result<Vec<Quality>, JsValue> {
        let qualities = self.player.get_qualities()?;
        Ok(serde_wasm_bindgen::from_value(qualities)?)
    }

    fn get_quality(&self) -> Result<String, JsValue> {
        self.player.get_quality()
    }

    fn get_video(&self) -> Result<Option<String>, JsValue> {
        self.player.get_video()
    }

    fn is_paused(&self) -> Result<bool, JsValue> {
        self.player.is_paused()
    }

    fn add_event_listener(&self, event: &str, callback: Callback) -> Result<(), JsValue> {
        // Ownership moves to JS: subscriptions live as long as the widget.
        let callback = Closure::wrap(callback).into_js_value();
        self.player.add_event_listener(event, &callback)
    }
}

/// A constructed `Twitch.Embed`
#[derive(Debug, Clone)]
pub struct GlobalEmbed {
    embed: bindings::Embed,
    /// The same JS object, addressed through the player methods
    view: GlobalPlayer,
}

impl GlobalEmbed {
    pub const CONSTRUCTOR: &'static str = "Twitch.Embed";

    /// Instantiate `Twitch.Embed` if the page provides it
    pub fn construct(mount_id: &str, options: &EmbedOptions) -> twitch_embed_core::Result<Self> {
        if !constructor_available("Embed") {
            return Err(Error::WidgetUnavailable {
                constructor: Self::CONSTRUCTOR,
            });
        }
        let js_options =
            to_js_options(options).map_err(|err| Error::construction(Self::CONSTRUCTOR, err.to_string()))?;
        let embed = bindings::Embed::new(mount_id, &js_options)
            .map_err(|err| Error::construction(Self::CONSTRUCTOR, js_error_message(&err)))?;
        Ok(Self::from_js(embed))
    }

    pub fn from_js(embed: bindings::Embed) -> Self {
        let view = GlobalPlayer::from_js(bindings::Player::from(embed.clone()));
        Self { embed, view }
    }

    pub fn as_js(&self) -> &bindings::Embed {
        &self.embed
    }
}

impl PlayerHandle for GlobalEmbed {
    type Error = JsValue;

    fn pause(&self) -> Result<(), JsValue> {
        self.view.pause()
    }

    fn play(&self) -> Result<(), JsValue> {
        self.view.play()
    }

    fn seek(&self, timestamp: f64) -> Result<(), JsValue> {
        self.view.seek(timestamp)
    }

    fn set_channel(&self, channel: &str) -> Result<(), JsValue> {
        self.view.set_channel(channel)
    }

    fn set_collection(&self, collection_id: &str, video_id: Option<&str>) -> Result<(), JsValue> {
        self.view.set_collection(collection_id, video_id)
    }

    fn set_quality(&self, quality: &str) -> Result<(), JsValue> {
        self.view.set_quality(quality)
    }

    fn set_video(&self, video_id: &str, timestamp: f64) -> Result<(), JsValue> {
        self.view.set_video(video_id, timestamp)
    }

    fn get_muted(&self) -> Result<bool, JsValue> {
        self.view.get_muted()
    }

    fn set_muted(&self, muted: bool) -> Result<(), JsValue> {
        self.view.set_muted(muted)
    }

    fn get_volume(&self) -> Result<f64, JsValue> {
        self.view.get_volume()
    }

    fn set_volume(&self, volume: f64) -> Result<(), JsValue> {
        self.view.set_volume(volume)
    }

    fn get_channel(&self) -> Result<Option<String>, JsValue> {
        self.view.get_channel()
    }

    fn get_current_time(&self) -> Result<f64, JsValue> {
        self.view.get_current_time()
    }

    fn get_duration(&self) -> Result<f64, JsValue> {
        self.view.get_duration()
    }

    fn get_ended(&self) -> Result<bool, JsValue> {
        self.view.get_ended()
    }

    fn get_qualities(&self) -> Result<Vec<Quality>, JsValue> {
        self.view.get_qualities()
    }

    fn get_quality(&self) -> Result<String, JsValue> {
        self.view.get_quality()
    }

    fn get_video(&self) -> Result<Option<String>, JsValue> {
        self.view.get_video()
    }

    fn is_paused(&self) -> Result<bool, JsValue> {
        self.view.is_paused()
    }

    fn add_event_listener(&self, event: &str, callback: Callback) -> Result<(), JsValue> {
        self.view.add_event_listener(event, callback)
    }
}

impl EmbedHandle for GlobalEmbed {
    type Player = GlobalPlayer;

    fn get_player(&self) -> Result<GlobalPlayer, JsValue> {
        self.embed.get_player().map(GlobalPlayer::from_js)
    }

    fn enable_captions(&self) -> Result<(), JsValue> {
        self.embed.enable_captions()
    }

    fn disable_captions(&self) -> Result<(), JsValue> {
        self.embed.disable_captions()
    }

    fn get_playback_stats(&self) -> Result<PlaybackStatistics, JsValue> {
        let stats = self.embed.get_playback_stats()?;
        Ok(serde_wasm_bindgen::from_value(stats)?)
    }

    fn get_channel_id(&self) -> Result<Option<String>, JsValue> {
        self.embed.get_channel_id()
    }

    fn set_channel_id(&self, channel_id: &str) -> Result<(), JsValue> {
        self.embed.set_channel_id(channel_id)
    }

    fn get_collection(&self) -> Result<Option<String>, JsValue> {
        self.embed.get_collection()
    }
}
