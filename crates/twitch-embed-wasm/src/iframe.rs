//! Bundled fallback: an iframe driven by the core state mirror
//!
//! Used when the page has no `Twitch` global. The iframe points at the
//! widget's own player/embed origin and is reloaded whenever the content
//! selection changes. Playback commands are mirrored locally only.

use tracing::{debug, warn};
use twitch_embed_core::{
    Callback, Dimension, EmbedEvent, EmbedHandle, EmbedOptions, Error, FallbackEmbed,
    FallbackPlayer, PlaybackStatistics, PlayerHandle, PlayerOptions, Quality,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsError, JsValue};
use web_sys::HtmlIFrameElement;

use crate::bindings::js_error_message;

/// Convert a fallback error into the value a JS widget would have thrown
pub fn to_js(err: Error) -> JsValue {
    JsError::new(&err.to_string()).into()
}

/// Value for the iframe's `width`/`height` attribute
pub fn frame_dimension(dimension: &Dimension) -> String {
    dimension.to_string()
}

fn create_frame(
    mount_id: &str,
    width: &Dimension,
    height: &Dimension,
    allow_fullscreen: bool,
) -> twitch_embed_core::Result<HtmlIFrameElement> {
    let not_found = || Error::MountNotFound {
        mount_id: mount_id.to_string(),
    };
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(not_found)?;
    let mount = document.get_element_by_id(mount_id).ok_or_else(not_found)?;

    let frame = document
        .create_element("iframe")
        .map_err(|err| Error::construction("iframe", js_error_message(&err)))?
        .dyn_into::<HtmlIFrameElement>()
        .map_err(|_| Error::construction("iframe", "element is not an iframe"))?;
    frame.set_width(&frame_dimension(width));
    frame.set_height(&frame_dimension(height));
    frame.set_allow_fullscreen(allow_fullscreen);
    frame
        .set_attribute("frameborder", "0")
        .map_err(|err| Error::construction("iframe", js_error_message(&err)))?;

    mount
        .append_child(&frame)
        .map_err(|err| Error::construction("iframe", js_error_message(&err)))?;
    Ok(frame)
}

/// Fire `events` on the mirror once the iframe has loaded
fn notify_on_load(frame: &HtmlIFrameElement, mirror: FallbackPlayer, events: &'static [EmbedEvent]) {
    let on_load = Closure::<dyn FnMut()>::new(move || {
        for event in events {
            mirror.emit(event.as_str());
        }
    })
    .into_js_value();
    frame.set_onload(Some(on_load.unchecked_ref()));
}

// `ready` names the same event on both widgets
const PLAYER_LOAD_EVENTS: &[EmbedEvent] = &[EmbedEvent::Ready];
const EMBED_LOAD_EVENTS: &[EmbedEvent] = &[EmbedEvent::VideoReady, EmbedEvent::Ready];

/// Fallback `Twitch.Player`
#[derive(Debug, Clone)]
pub struct IframePlayer {
    mirror: FallbackPlayer,
    frame: Option<HtmlIFrameElement>,
}

impl IframePlayer {
    /// Mount a player iframe into `mount_id`.
    ///
    /// A missing mount element is logged; the handle then answers from its
    /// mirror without rendering anything.
    pub fn mount(mount_id: &str, options: &PlayerOptions) -> Self {
        let mut player = Self::detached(mount_id, options);
        player.frame = attach(&player.mirror, &options.width, &options.height, PLAYER_LOAD_EVENTS);
        player
    }

    /// A player that renders nothing and answers from its mirror
    pub fn detached(mount_id: &str, options: &PlayerOptions) -> Self {
        Self {
            mirror: FallbackPlayer::new(mount_id, options),
            frame: None,
        }
    }

    pub fn mirror(&self) -> &FallbackPlayer {
        &self.mirror
    }

    /// Whether an iframe was mounted
    pub fn is_attached(&self) -> bool {
        self.frame.is_some()
    }

    /// Point the iframe at the mirror's current content
    fn sync(&self) -> Result<(), JsValue> {
        let Some(frame) = &self.frame else {
            return Ok(());
        };
        let url = self.mirror.source_url().map_err(to_js)?;
        if frame.src() != url.as_str() {
            debug!(mount_id = self.mirror.mount_id(), src = %url, "Reloading fallback iframe");
            frame.set_src(url.as_str());
        }
        Ok(())
    }
}

fn attach(
    mirror: &FallbackPlayer,
    width: &Dimension,
    height: &Dimension,
    load_events: &'static [EmbedEvent],
) -> Option<HtmlIFrameElement> {
    let mounted = create_frame(mirror.mount_id(), width, height, mirror.allows_fullscreen())
        .and_then(|frame| {
            let url = mirror.source_url()?;
            notify_on_load(&frame, mirror.clone(), load_events);
            frame.set_src(url.as_str());
            Ok(frame)
        });
    match mounted {
        Ok(frame) => Some(frame),
        Err(err) => {
            warn!(
                mount_id = mirror.mount_id(),
                code = err.error_code(),
                reason = %err,
                "Fallback widget could not be mounted"
            );
            None
        }
    }
}

impl PlayerHandle for IframePlayer {
    type Error = JsValue;

    fn pause(&self) -> Result<(), JsValue> {
        self.mirror.pause().map_err(to_js)
    }

    fn play(&self) -> Result<(), JsValue> {
        self.mirror.play().map_err(to_js)
    }

    fn seek(&self, timestamp: f64) -> Result<(), JsValue> {
        self.mirror.seek(timestamp).map_err(to_js)
    }

    fn set_channel(&self, channel: &str) -> Result<(), JsValue> {
        self.mirror.set_channel(channel).map_err(to_js)?;
        self.sync()
    }

    fn set_collection(&self, collection_id: &str, video_id: Option<&str>) -> Result<(), JsValue> {
        self.mirror
            .set_collection(collection_id, video_id)
            .map_err(to_js)?;
        self.sync()
    }

    fn set_quality(&self, quality: &str) -> Result<(), JsValue> {
        self.mirror.set_quality(quality).map_err(to_js)
    }

    fn set_video(&self, video_id: &str, timestamp: f64) -> Result<(), JsValue> {
        self.mirror.set_video(video_id, timestamp).map_err(to_js)?;
        self.sync()
    }

    fn get_muted(&self) -> Result<bool, JsValue> {
        self.mirror.get_muted().map_err(to_js)
    }

    fn set_muted(&self, muted: bool) -> Result<(), JsValue> {
        self.mirror.set_muted(muted).map_err(to_js)
    }

    fn get_volume(&self) -> Result<f64, JsValue> {
        self.mirror.get_volume().map_err(to_js)
    }

    fn set_volume(&self, volume: f64) -> Result<(), JsValue> {
        self.mirror.set_volume(volume).map_err(to_js)
    }

    fn get_channel(&self) -> Result<Option<String>, JsValue> {
        self.mirror.get_channel().map_err(to_js)
    }

    fn get_current_time(&self) -> Result<f64, JsValue> {
        self.mirror.get_current_time().map_err(to_js)
    }

    fn get_duration(&self) -> Result<f64, JsValue> {
        self.mirror.get_duration().map_err(to_js)
    }

    fn get_ended(&self) -> Result<bool, JsValue> {
        self.mirror.get_ended().map_err(to_js)
    }

    fn get_qualities(&self) -> Result<Vec<Quality>, JsValue> {
        self.mirror.get_qualities().map_err(to_js)
    }

    fn get_quality(&self) -> Result<String, JsValue> {
        self.mirror.get_quality().map_err(to_js)
    }

    fn get_video(&self) -> Result<Option<String>, JsValue> {
        self.mirror.get_video().map_err(to_js)
    }

    fn is_paused(&self) -> Result<bool, JsValue> {
        self.mirror.is_paused().map_err(to_js)
    }

    fn add_event_listener(&self, event: &str, callback: Callback) -> Result<(), JsValue> {
        self.mirror.add_event_listener(event, callback).map_err(to_js)
    }
}

/// Fallback `Twitch.Embed`, sharing its iframe and state with its player
#[derive(Debug, Clone)]
pub struct IframeEmbed {
    mirror: FallbackEmbed,
    player: IframePlayer,
}

impl IframeEmbed {
    pub fn mount(mount_id: &str, options: &EmbedOptions) -> Self {
        let mut embed = Self::detached(mount_id, options);
        embed.player.frame = attach(
            embed.mirror.player(),
            &options.player.width,
            &options.player.height,
            EMBED_LOAD_EVENTS,
        );
        embed
    }

    pub fn detached(mount_id: &str, options: &EmbedOptions) -> Self {
        let mirror = FallbackEmbed::new(mount_id, options);
        let player = IframePlayer {
            mirror: mirror.player().clone(),
            frame: None,
        };
        Self { mirror, player }
    }

    pub fn mirror(&self) -> &FallbackEmbed {
        &self.mirror
    }

    pub fn is_attached(&self) -> bool {
        self.player.is_attached()
    }
}

impl PlayerHandle for IframeEmbed {
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
        self.player.get_qualities()
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
        self.player.add_event_listener(event, callback)
    }
}

impl EmbedHandle for IframeEmbed {
    type Player = IframePlayer;

    fn get_player(&self) -> Result<IframePlayer, JsValue> {
        Ok(self.player.clone())
    }

    fn enable_captions(&self) -> Result<(), JsValue> {
        self.mirror.enable_captions().map_err(to_js)
    }

    fn disable_captions(&self) -> Result<(), JsValue> {
        self.mirror.disable_captions().map_err(to_js)
    }

    fn get_playback_stats(&self) -> Result<PlaybackStatistics, JsValue> {
        self.mirror.get_playback_stats().map_err(to_js)
    }

    fn get_channel_id(&self) -> Result<Option<String>, JsValue> {
        self.mirror.get_channel_id().map_err(to_js)
    }

    fn set_channel_id(&self, channel_id: &str) -> Result<(), JsValue> {
        self.mirror.set_channel_id(channel_id).map_err(to_js)
    }

    fn get_collection(&self) -> Result<Option<String>, JsValue> {
        self.mirror.get_collection().map_err(to_js)
    }
}
