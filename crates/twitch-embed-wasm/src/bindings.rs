//! Imports of the page-global `Twitch.Player` and `Twitch.Embed` classes
//!
//! Every import is `catch`, so an exception thrown by the widget comes back
//! as `Err(JsValue)` instead of unwinding through wasm.

use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// `Twitch.Player` instance
    #[wasm_bindgen(js_namespace = Twitch)]
    #[derive(Debug, Clone)]
    pub type Player;

    #[wasm_bindgen(catch, constructor, js_namespace = Twitch)]
    pub fn new(mount_id: &str, options: &JsValue) -> Result<Player, JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn pause(this: &Player) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn play(this: &Player) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn seek(this: &Player, timestamp: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method, js_name = setChannel)]
    pub fn set_channel(this: &Player, channel: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method, js_name = setCollection)]
    pub fn set_collection(this: &Player, collection_id: &str, video_id: Option<&str>) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method, js_name = setQuality)]
    pub fn set_quality(this: &Player, quality: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method, js_name = setVideo)]
    pub fn set_video(this: &Player, video_id: &str, timestamp: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method, js_name = getMuted)]
    pub fn get_muted(this: &Player) -> Result<bool, JsValue>;

    #[wasm_bindgen(catch, method, js_name = setMuted)]
    pub fn set_muted(this: &Player, muted: bool) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method, js_name = getVolume)]
    pub fn get_volume(this: &Player) -> Result<f64, JsValue>;

    #[wasm_bindgen(catch, method, js_name = setVolume)]
    pub fn set_volume(this: &Player, volume: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method, js_name = getChannel)]
    pub fn get_channel(this: &Player) -> Result<Option<String>, JsValue>;

    #[wasm_bindgen(catch, method, js_name = getCurrentTime)]
    pub fn get_current_time(this: &Player) -> Result<f64, JsValue>;

    #[wasm_bindgen(catch, method, js_name = getDuration)]
    pub fn get_duration(this: &Player) -> Result<f64, JsValue>;

    #[wasm_bindgen(catch, method, js_name = getEnded)]
    pub fn get_ended(this: &Player) -> Result<bool, JsValue>;

    /// Array of quality objects
    #[wasm_bindgen(catch, method, js_name = getQualities)]
    pub fn get_qualities(this: &Player) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, method, js_name = getQuality)]
    pub fn get_quality(this: &Player) -> Result<String, JsValue>;

    #[wasm_bindgen(catch, method, js_name = getVideo)]
    pub fn get_video(this: &Player) -> Result<Option<String>, JsValue>;

    #[wasm_bindgen(catch, method, js_name = isPaused)]
    pub fn is_paused(this: &Player) -> Result<bool, JsValue>;

    #[wasm_bindgen(catch, method, js_name = addEventListener)]
    pub fn add_event_listener(this: &Player, event: &str, callback: &JsValue) -> Result<(), JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// `Twitch.Embed` instance. Answers the player methods as well.
    #[wasm_bindgen(js_namespace = Twitch, extends = Player)]
    #[derive(Debug, Clone)]
    pub type Embed;

    #[wasm_bindgen(catch, constructor, js_namespace = Twitch)]
    pub fn new(mount_id: &str, options: &JsValue) -> Result<Embed, JsValue>;

    #[wasm_bindgen(catch, method, js_name = getPlayer)]
    pub fn get_player(this: &Embed) -> Result<Player, JsValue>;

    #[wasm_bindgen(catch, method, js_name = enableCaptions)]
    pub fn enable_captions(this: &Embed) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method, js_name = disableCaptions)]
    pub fn disable_captions(this: &Embed) -> Result<(), JsValue>;

    /// Playback statistics object
    #[wasm_bindgen(catch, method, js_name = getPlaybackStats)]
    pub fn get_playback_stats(this: &Embed) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, method, js_name = getChannelId)]
    pub fn get_channel_id(this: &Embed) -> Result<Option<String>, JsValue>;

    #[wasm_bindgen(catch, method, js_name = setChannelId)]
    pub fn set_channel_id(this: &Embed, channel_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method, js_name = getCollection)]
    pub fn get_collection(this: &Embed) -> Result<Option<String>, JsValue>;
}

/// Whether `globalThis.Twitch[name]` is a constructor function
pub fn constructor_available(name: &str) -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str("Twitch"))
        .ok()
        .filter(|namespace| namespace.is_object())
        .and_then(|namespace| Reflect::get(&namespace, &JsValue::from_str(name)).ok())
        .map_or(false, |constructor| constructor.is_function())
}

/// Serialize options as a plain JS object
pub fn to_js_options<T: Serialize>(options: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    options.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Best-effort message of a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
