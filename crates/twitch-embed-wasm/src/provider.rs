//! Browser providers: `Twitch.*` from the page, else the iframe fallback

use twitch_embed_core::{
    Callback, EmbedHandle, EmbedOptions, EmbedProvider, PlaybackStatistics, PlayerHandle,
    PlayerOptions, PlayerProvider, Quality, Result,
};
use wasm_bindgen::JsValue;

use crate::global::{GlobalEmbed, GlobalPlayer};
use crate::iframe::{IframeEmbed, IframePlayer};

/// Forward a handle call to whichever backend is bound
macro_rules! dispatch {
    ($self:ident, $binding:ident, $method:ident($($arg:expr),*)) => {
        match $self {
            $binding::Global(handle) => handle.$method($($arg),*),
            $binding::Fallback(handle) => handle.$method($($arg),*),
        }
    };
}

/// A `Twitch.Player` bound to one of the two browser backends
#[derive(Debug, Clone)]
pub enum PlayerBinding {
    Global(GlobalPlayer),
    Fallback(IframePlayer),
}

impl PlayerBinding {
    pub fn is_fallback(&self) -> bool {
        matches!(self, PlayerBinding::Fallback(_))
    }
}

impl PlayerHandle for PlayerBinding {
    type Error = JsValue;

    fn pause(&self) -> std::result::Result<(), JsValue> {
        dispatch!(self, PlayerBinding, pause())
    }

    fn play(&self) -> std::result::Result<(), JsValue> {
        dispatch!(self, PlayerBinding, play())
    }

    fn seek(&self, timestamp: f64) -> std::result::Result<(), JsValue> {
        dispatch!(self, PlayerBinding, seek(timestamp))
    }

    fn set_channel(&self, channel: &str) -> std::result::Result<(), JsValue> {
        dispatch!(self, PlayerBinding, set_channel(channel))
    }

    fn set_collection(
        &self,
        collection_id: &str,
        video_id: Option<&str>,
    ) -> std::result::Result<(), JsValue> {
        dispatch!(self, PlayerBinding, set_collection(collection_id, video_id))
    }

    fn set_quality(&self, quality: &str) -> std::result::Result<(), JsValue> {
        dispatch!(self, PlayerBinding, set_quality(quality))
    }

    fn set_video(&self, video_id: &str, timestamp: f64) -> std::result::Result<(), JsValue> {
        dispatch!(self, PlayerBinding, set_video(video_id, timestamp))
    }

    fn get_muted(&self) -> std::result::Result<bool, JsValue> {
        dispatch!(self, PlayerBinding, get_muted())
    }

    fn set_muted(&self, muted: bool) -> std::result::Result<(), JsValue> {
        dispatch!(self, PlayerBinding, set_muted(muted))
    }

    fn get_volume(&self) -> std::result::Result<f64, JsValue> {
        dispatch!(self, PlayerBinding, get_volume())
    }

    fn set_volume(&self, volume: f64) -> std::result::Result<(), JsValue> {
        dispatch!(self, PlayerBinding, set_volume(volume))
    }

    fn get_channel(&self) -> std::result::Result<Option<String>, JsValue> {
        dispatch!(self, PlayerBinding, get_channel())
    }

    fn get_current_time(&self) -> std::result::Result<f64, JsValue> {
        dispatch!(self, PlayerBinding, get_current_time())
    }

    fn get_duration(&self) -> std::result::Result<f64, JsValue> {
        dispatch!(self, PlayerBinding, get_duration())
    }

    fn get_ended(&self) -> std::result::Result<bool, JsValue> {
        dispatch!(self, PlayerBinding, get_ended())
    }

    fn get_qualities(&self) -> std::result::Result<Vec<Quality>, JsValue> {
        dispatch!(self, PlayerBinding, get_qualities())
    }

    fn get_quality(&self) -> std::result::Result<String, JsValue> {
        dispatch!(self, PlayerBinding, get_quality())
    }

    fn get_video(&self) -> std::result::Result<Option<String>, JsValue> {
        dispatch!(self, PlayerBinding, get_video())
    }

    fn is_paused(&self) -> std::result::Result<bool, JsValue> {
        dispatch!(self, PlayerBinding, is_paused())
    }

    fn add_event_listener(&self, event: &str, callback: Callback) -> std::result::Result<(), JsValue> {
        dispatch!(self, PlayerBinding, add_event_listener(event, callback))
    }
}

/// A `Twitch.Embed` bound to one of the two browser backends
#[derive(Debug, Clone)]
pub enum EmbedBinding {
    Global(GlobalEmbed),
    Fallback(IframeEmbed),
}

impl EmbedBinding {
    pub fn is_fallback(&self) -> bool {
        matches!(self, EmbedBinding::Fallback(_))
    }
}

impl PlayerHandle for EmbedBinding {
    type Error = JsValue;

    fn pause(&self) -> std::result::Result<(), JsValue> {
        dispatch!(self, EmbedBinding, pause())
    }

    fn play(&self) -> std::result::Result<(), JsValue> {
        dispatch!(self, EmbedBinding, play())
    }

    fn seek(&self, timestamp: f64) -> std::result::Result<(), JsValue> {
        dispatch!(self, EmbedBinding, seek(timestamp))
    }

    fn set_channel(&self, channel: &str) -> std::result::Result<(), JsValue> {
        dispatch!(self, EmbedBinding, set_channel(channel))
    }

    fn set_collection(
        &self,
        collection_id: &str,
        video_id: Option<&str>,
    ) -> std::result::Result<(), JsValue> {
        dispatch!(self, EmbedBinding, set_collection(collection_id, video_id))
    }

    fn set_quality(&self, quality: &str) -> std::result::Result<(), JsValue> {
        dispatch!(self, EmbedBinding, set_quality(quality))
    }

    fn set_video(&self, video_id: &str, timestamp: f64) -> std::result::Result<(), JsValue> {
        dispatch!(self, EmbedBinding, set_video(video_id, timestamp))
    }

    fn get_muted(&self) -> std::result::Result<bool, JsValue> {
        dispatch!(self, EmbedBinding, get_muted())
    }

    fn set_muted(&self, muted: bool) -> std::result::Result<(), JsValue> {
        dispatch!(self, EmbedBinding, set_muted(muted))
    }

    fn get_volume(&self) -> std::result::Result<f64, JsValue> {
        dispatch!(self, EmbedBinding, get_volume())
    }

    fn set_volume(&self, volume: f64) -> std::result::Result<(), JsValue> {
        dispatch!(self, EmbedBinding, set_volume(volume))
    }

    fn get_channel(&self) -> std::result::Result<Option<String>, JsValue> {
        dispatch!(self, EmbedBinding, get_channel())
    }

    fn get_current_time(&self) -> std::result::Result<f64, JsValue> {
        dispatch!(self, EmbedBinding, get_current_time())
    }

    fn get_duration(&self) -> std::result::Result<f64, JsValue> {
        dispatch!(self, EmbedBinding, get_duration())
    }

    fn get_ended(&self) -> std::result::Result<bool, JsValue> {
        dispatch!(self, EmbedBinding, get_ended())
    }

    fn get_qualities(&self) -> std::result::Result<Vec<Quality>, JsValue> {
        dispatch!(self, EmbedBinding, get_qualities())
    }

    fn get_quality(&self) -> std::result::Result<String, JsValue> {
        dispatch!(self, EmbedBinding, get_quality())
    }

    fn get_video(&self) -> std::result::Result<Option<String>, JsValue> {
        dispatch!(self, EmbedBinding, get_video())
    }

    fn is_paused(&self) -> std::result::Result<bool, JsValue> {
        dispatch!(self, EmbedBinding, is_paused())
    }

    fn add_event_listener(&self, event: &str, callback: Callback) -> std::result::Result<(), JsValue> {
        dispatch!(self, EmbedBinding, add_event_listener(event, callback))
    }
}

impl EmbedHandle for EmbedBinding {
    type Player = PlayerBinding;

    fn get_player(&self) -> std::result::Result<PlayerBinding, JsValue> {
        match self {
            EmbedBinding::Global(handle) => handle.get_player().map(PlayerBinding::Global),
            EmbedBinding::Fallback(handle) => handle.get_player().map(PlayerBinding::Fallback),
        }
    }

    fn enable_captions(&self) -> std::result::Result<(), JsValue> {
        dispatch!(self, EmbedBinding, enable_captions())
    }

    fn disable_captions(&self) -> std::result::Result<(), JsValue> {
        dispatch!(self, EmbedBinding, disable_captions())
    }

    fn get_playback_stats(&self) -> std::result::Result<PlaybackStatistics, JsValue> {
        dispatch!(self, EmbedBinding, get_playback_stats())
    }

    fn get_channel_id(&self) -> std::result::Result<Option<String>, JsValue> {
        dispatch!(self, EmbedBinding, get_channel_id())
    }

    fn set_channel_id(&self, channel_id: &str) -> std::result::Result<(), JsValue> {
        dispatch!(self, EmbedBinding, set_channel_id(channel_id))
    }

    fn get_collection(&self) -> std::result::Result<Option<String>, JsValue> {
        dispatch!(self, EmbedBinding, get_collection())
    }
}

/// Builds players from the page's `Twitch.Player`, falling back to an iframe
#[derive(Debug, Default, Clone, Copy)]
pub struct WebPlayerProvider;

impl PlayerProvider for WebPlayerProvider {
    type Handle = PlayerBinding;

    fn global(&self, mount_id: &str, options: &PlayerOptions) -> Result<PlayerBinding> {
        GlobalPlayer::construct(mount_id, options).map(PlayerBinding::Global)
    }

    fn fallback(&self, mount_id: &str, options: &PlayerOptions) -> PlayerBinding {
        PlayerBinding::Fallback(IframePlayer::mount(mount_id, options))
    }
}

/// Builds embeds from the page's `Twitch.Embed`, falling back to an iframe
#[derive(Debug, Default, Clone, Copy)]
pub struct WebEmbedProvider;

impl EmbedProvider for WebEmbedProvider {
    type Handle = EmbedBinding;

    fn global(&self, mount_id: &str, options: &EmbedOptions) -> Result<EmbedBinding> {
        GlobalEmbed::construct(mount_id, options).map(EmbedBinding::Global)
    }

    fn fallback(&self, mount_id: &str, options: &EmbedOptions) -> EmbedBinding {
        EmbedBinding::Fallback(IframeEmbed::mount(mount_id, options))
    }
}
