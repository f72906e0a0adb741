//! Bundled fallback handles
//!
//! Stand-ins used when the page did not load the Twitch embed script. They
//! mirror the widget's state locally: setters are applied in memory, getters
//! answer from that memory, and listeners fire for the state changes the
//! fallback itself causes. The browser crate mounts an iframe pointing at
//! [`FallbackPlayer::source_url`] and keeps it in sync.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;
use url::Url;

use crate::events::PlayerEvent;
use crate::handle::{Callback, EmbedHandle, PlayerHandle};
use crate::options::{EmbedOptions, PlayerOptions};
use crate::types::{EmbedLayout, EmbedTheme, PlaybackStatistics, Quality, VideoStatistics};
use crate::{Error, Result};

/// Origin serving the bare player iframe
pub const PLAYER_ORIGIN: &str = "https://player.twitch.tv/";
/// Origin serving the video-with-chat iframe
pub const EMBED_ORIGIN: &str = "https://embed.twitch.tv/";

/// Volume reported before any `set_volume` call
pub const DEFAULT_VOLUME: f64 = 0.5;
/// Quality reported before any `set_quality` call
pub const AUTO_QUALITY: &str = "auto";

/// Format seconds the way the widget's `time` option expects, e.g. `1h2m5s`
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}h{}m{}s", total / 3600, (total % 3600) / 60, total % 60)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Player,
    Embed {
        layout: EmbedLayout,
        theme: Option<EmbedTheme>,
        allow_fullscreen: Option<bool>,
    },
}

#[derive(Debug)]
struct MirrorState {
    surface: Surface,
    parent: Vec<String>,
    autoplay: Option<bool>,
    channel: Option<String>,
    channel_id: Option<String>,
    video: Option<String>,
    collection: Option<String>,
    time: Option<String>,
    muted: bool,
    volume: f64,
    paused: bool,
    ended: bool,
    current_time: f64,
    quality: String,
    captions: bool,
}

impl MirrorState {
    fn new(options: &PlayerOptions, surface: Surface) -> Self {
        Self {
            surface,
            parent: options.parent.clone().unwrap_or_default(),
            autoplay: options.autoplay,
            channel: options.channel.clone(),
            channel_id: None,
            video: options.video.clone(),
            collection: options.collection.clone(),
            time: options.time.clone(),
            muted: options.muted.unwrap_or(false),
            volume: DEFAULT_VOLUME,
            paused: !options.autoplay.unwrap_or(true),
            ended: false,
            current_time: 0.0,
            quality: AUTO_QUALITY.to_string(),
            captions: false,
        }
    }

    fn clear_content(&mut self) {
        self.channel = None;
        self.channel_id = None;
        self.video = None;
        self.collection = None;
        self.time = None;
        self.current_time = 0.0;
        self.ended = false;
    }
}

type Listeners = HashMap<String, Vec<Callback>>;

/// In-memory `Twitch.Player` stand-in.
///
/// Clones share state, which is how an embed and its inner player stay in
/// step.
#[derive(Clone)]
pub struct FallbackPlayer {
    mount_id: Rc<str>,
    state: Rc<RefCell<MirrorState>>,
    listeners: Rc<RefCell<Listeners>>,
}

impl FallbackPlayer {
    pub fn new(mount_id: &str, options: &PlayerOptions) -> Self {
        Self::with_surface(mount_id, options, Surface::Player)
    }

    fn with_surface(mount_id: &str, options: &PlayerOptions, surface: Surface) -> Self {
        debug!(mount_id, "Creating fallback player");
        Self {
            mount_id: Rc::from(mount_id),
            state: Rc::new(RefCell::new(MirrorState::new(options, surface))),
            listeners: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Iframe source reflecting the current content selection
    pub fn source_url(&self) -> Result<Url> {
        let state = self.state.borrow();
        let origin = match state.surface {
            Surface::Player => PLAYER_ORIGIN,
            Surface::Embed { .. } => EMBED_ORIGIN,
        };
        let mut url = Url::parse(origin)?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(channel) = &state.channel {
                query.append_pair("channel", channel);
            }
            if let Some(video) = &state.video {
                query.append_pair("video", video);
            }
            if let Some(collection) = &state.collection {
                query.append_pair("collection", collection);
            }
            for parent in &state.parent {
                query.append_pair("parent", parent);
            }
            if let Some(autoplay) = state.autoplay {
                query.append_pair("autoplay", if autoplay { "true" } else { "false" });
            }
            query.append_pair("muted", if state.muted { "true" } else { "false" });
            if let Some(time) = &state.time {
                query.append_pair("time", time);
            }
            if let Surface::Embed {
                layout,
                theme,
                allow_fullscreen,
            } = state.surface
            {
                query.append_pair("layout", layout.as_str());
                if let Some(theme) = theme {
                    query.append_pair("theme", theme.as_str());
                }
                if let Some(allow) = allow_fullscreen {
                    query.append_pair("allowfullscreen", if allow { "true" } else { "false" });
                }
            }
        }
        Ok(url)
    }

    /// Whether the iframe may go fullscreen
    pub fn allows_fullscreen(&self) -> bool {
        match self.state.borrow().surface {
            Surface::Player => true,
            Surface::Embed {
                allow_fullscreen, ..
            } => allow_fullscreen.unwrap_or(true),
        }
    }

    /// Fire every listener registered for `event`.
    ///
    /// Listeners may call back into this handle, including registering new
    /// listeners.
    pub fn emit(&self, event: &str) {
        let taken = self.listeners.borrow_mut().remove(event);
        let Some(mut callbacks) = taken else {
            return;
        };
        debug!(mount_id = %self.mount_id, event, count = callbacks.len(), "Dispatching fallback event");
        for callback in callbacks.iter_mut() {
            callback();
        }
        let mut listeners = self.listeners.borrow_mut();
        let added = listeners.remove(event).unwrap_or_default();
        callbacks.extend(added);
        listeners.insert(event.to_string(), callbacks);
    }

    /// Number of listeners registered for `event`
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.borrow().get(event).map_or(0, Vec::len)
    }

    /// Mark the content as finished and notify `ended` listeners
    pub fn finish(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.ended = true;
            state.paused = true;
        }
        self.emit(PlayerEvent::Ended.as_str());
    }

    fn captions_enabled(&self) -> bool {
        self.state.borrow().captions
    }
}

impl std::fmt::Debug for FallbackPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackPlayer")
            .field("mount_id", &self.mount_id)
            .field("state", &self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl PlayerHandle for FallbackPlayer {
    type Error = Error;

    fn pause(&self) -> Result<()> {
        let changed = {
            let mut state = self.state.borrow_mut();
            !std::mem::replace(&mut state.paused, true)
        };
        if changed {
            self.emit(PlayerEvent::Pause.as_str());
        }
        Ok(())
    }

    fn play(&self) -> Result<()> {
        let changed = {
            let mut state = self.state.borrow_mut();
            state.ended = false;
            std::mem::replace(&mut state.paused, false)
        };
        if changed {
            self.emit(PlayerEvent::Play.as_str());
        }
        Ok(())
    }

    fn seek(&self, timestamp: f64) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.current_time = timestamp;
        state.ended = false;
        if state.video.is_some() {
            state.time = Some(format_timestamp(timestamp));
        }
        Ok(())
    }

    fn set_channel(&self, channel: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.clear_content();
        state.channel = Some(channel.to_string());
        Ok(())
    }

    fn set_collection(&self, collection_id: &str, video_id: Option<&str>) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.clear_content();
        state.collection = Some(collection_id.to_string());
        state.video = video_id.map(str::to_string);
        Ok(())
    }

    fn set_quality(&self, quality: &str) -> Result<()> {
        self.state.borrow_mut().quality = quality.to_string();
        Ok(())
    }

    fn set_video(&self, video_id: &str, timestamp: f64) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.clear_content();
        state.video = Some(video_id.to_string());
        state.current_time = timestamp;
        state.time = Some(format_timestamp(timestamp));
        Ok(())
    }

    fn get_muted(&self) -> Result<bool> {
        Ok(self.state.borrow().muted)
    }

    fn set_muted(&self, muted: bool) -> Result<()> {
        self.state.borrow_mut().muted = muted;
        Ok(())
    }

    fn get_volume(&self) -> Result<f64> {
        Ok(self.state.borrow().volume)
    }

    fn set_volume(&self, volume: f64) -> Result<()> {
        self.state.borrow_mut().volume = volume;
        Ok(())
    }

    fn get_channel(&self) -> Result<Option<String>> {
        Ok(self.state.borrow().channel.clone())
    }

    fn get_current_time(&self) -> Result<f64> {
        Ok(self.state.borrow().current_time)
    }

    fn get_duration(&self) -> Result<f64> {
        Ok(0.0)
    }

    fn get_ended(&self) -> Result<bool> {
        Ok(self.state.borrow().ended)
    }

    fn get_qualities(&self) -> Result<Vec<Quality>> {
        Ok(Vec::new())
    }

    fn get_quality(&self) -> Result<String> {
        Ok(self.state.borrow().quality.clone())
    }

    fn get_video(&self) -> Result<Option<String>> {
        Ok(self.state.borrow().video.clone())
    }

    fn is_paused(&self) -> Result<bool> {
        Ok(self.state.borrow().paused)
    }

    fn add_event_listener(&self, event: &str, callback: Callback) -> Result<()> {
        self.listeners
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push(callback);
        Ok(())
    }
}

/// In-memory `Twitch.Embed` stand-in
#[derive(Debug, Clone)]
pub struct FallbackEmbed {
    player: FallbackPlayer,
}

impl FallbackEmbed {
    pub fn new(mount_id: &str, options: &EmbedOptions) -> Self {
        let surface = Surface::Embed {
            layout: options.effective_layout(),
            theme: options.theme,
            allow_fullscreen: options.allow_fullscreen,
        };
        Self {
            player: FallbackPlayer::with_surface(mount_id, &options.player, surface),
        }
    }

    /// The shared state mirror, also reachable through `get_player`
    pub fn player(&self) -> &FallbackPlayer {
        &self.player
    }

    pub fn source_url(&self) -> Result<Url> {
        self.player.source_url()
    }

    pub fn emit(&self, event: &str) {
        self.player.emit(event);
    }

    pub fn captions_enabled(&self) -> bool {
        self.player.captions_enabled()
    }
}

impl PlayerHandle for FallbackEmbed {
    type Error = Error;

    fn pause(&self) -> Result<()> {
        self.player.pause()
    }

    fn play(&self) -> Result<()> {
        self.player.play()
    }

    fn seek(&self, timestamp: f64) -> Result<()> {
        self.player.seek(timestamp)
    }

    fn set_channel(&self, channel: &str) -> Result<()> {
        self.player.set_channel(channel)
    }

    fn set_collection(&self, collection_id: &str, video_id: Option<&str>) -> Result<()> {
        self.player.set_collection(collection_id, video_id)
    }

    fn set_quality(&self, quality: &str) -> Result<()> {
        self.player.set_quality(quality)
    }

    fn set_video(&self, video_id: &str, timestamp: f64) -> Result<()> {
        self.player.set_video(video_id, timestamp)
    }

    fn get_muted(&self) -> Result<bool> {
        self.player.get_muted()
    }

    fn set_muted(&self, muted: bool) -> Result<()> {
        self.player.set_muted(muted)
    }

    fn get_volume(&self) -> Result<f64> {
        self.player.get_volume()
    }

    fn set_volume(&self, volume: f64) -> Result<()> {
        self.player.set_volume(volume)
    }

    fn get_channel(&self) -> Result<Option<String>> {
        self.player.get_channel()
    }

    fn get_current_time(&self) -> Result<f64> {
        self.player.get_current_time()
    }

    fn get_duration(&self) -> Result<f64> {
        self.player.get_duration()
    }

    fn get_ended(&self) -> Result<bool> {
        self.player.get_ended()
    }

    fn get_qualities(&self) -> Result<Vec<Quality>> {
        self.player.get_qualities()
    }

    fn get_quality(&self) -> Result<String> {
        self.player.get_quality()
    }

    fn get_video(&self) -> Result<Option<String>> {
        self.player.get_video()
    }

    fn is_paused(&self) -> Result<bool> {
        self.player.is_paused()
    }

    fn add_event_listener(&self, event: &str, callback: Callback) -> Result<()> {
        self.player.add_event_listener(event, callback)
    }
}

impl EmbedHandle for FallbackEmbed {
    type Player = FallbackPlayer;

    fn get_player(&self) -> Result<FallbackPlayer> {
        Ok(self.player.clone())
    }

    fn enable_captions(&self) -> Result<()> {
        self.player.state.borrow_mut().captions = true;
        Ok(())
    }

    fn disable_captions(&self) -> Result<()> {
        self.player.state.borrow_mut().captions = false;
        Ok(())
    }

    fn get_playback_stats(&self) -> Result<PlaybackStatistics> {
        let state = self.player.state.borrow();
        Ok(PlaybackStatistics {
            video_statistics: VideoStatistics {
                backend_version: "fallback".to_string(),
                playback_rate: if state.paused { 0.0 } else { 1.0 },
                ..Default::default()
            },
        })
    }

    fn get_channel_id(&self) -> Result<Option<String>> {
        Ok(self.player.state.borrow().channel_id.clone())
    }

    /// Record the numeric channel id. The iframe is addressed by channel
    /// login, so the current selection and source stay as they are.
    fn set_channel_id(&self, channel_id: &str) -> Result<()> {
        self.player.state.borrow_mut().channel_id = Some(channel_id.to_string());
        Ok(())
    }

    fn get_collection(&self) -> Result<Option<String>> {
        Ok(self.player.state.borrow().collection.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn query(url: &Url, key: &str) -> Vec<String> {
        url.query_pairs()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .collect()
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "0h0m0s");
        assert_eq!(format_timestamp(3725.9), "1h2m5s");
        assert_eq!(format_timestamp(-4.0), "0h0m0s");
        assert_eq!(format_timestamp(f64::NAN), "0h0m0s");
    }

    #[test]
    fn test_state_starts_from_options() {
        let options = PlayerOptions::for_channel("shroud")
            .with_muted(true)
            .with_autoplay(false);
        let player = FallbackPlayer::new("player", &options);
        assert_eq!(player.get_channel().unwrap().as_deref(), Some("shroud"));
        assert!(player.get_muted().unwrap());
        assert!(player.is_paused().unwrap());
        assert_eq!(player.get_volume().unwrap(), DEFAULT_VOLUME);
        assert_eq!(player.get_quality().unwrap(), AUTO_QUALITY);
    }

    #[test]
    fn test_player_source_url() {
        let options = PlayerOptions::for_channel("shroud")
            .with_parent("a.example.com")
            .with_parent("b.example.com");
        let url = FallbackPlayer::new("player", &options).source_url().unwrap();
        assert_eq!(url.host_str(), Some("player.twitch.tv"));
        assert_eq!(query(&url, "channel"), ["shroud"]);
        assert_eq!(query(&url, "parent"), ["a.example.com", "b.example.com"]);
        assert_eq!(query(&url, "muted"), ["false"]);
        assert!(query(&url, "layout").is_empty());
    }

    #[test]
    fn test_set_video_changes_source() {
        let player = FallbackPlayer::new("player", &PlayerOptions::for_channel("shroud"));
        let before = player.source_url().unwrap();
        player.set_video("v123", 90.0).unwrap();
        let after = player.source_url().unwrap();
        assert_ne!(before, after);
        assert!(query(&after, "channel").is_empty());
        assert_eq!(query(&after, "video"), ["v123"]);
        assert_eq!(query(&after, "time"), ["0h1m30s"]);
        assert_eq!(player.get_current_time().unwrap(), 90.0);
    }

    #[test]
    fn test_set_collection_keeps_start_video() {
        let player = FallbackPlayer::new("player", &PlayerOptions::for_channel("shroud"));
        player.set_collection("c1", Some("v9")).unwrap();
        assert_eq!(player.get_video().unwrap().as_deref(), Some("v9"));
        assert_eq!(player.get_channel().unwrap(), None);
    }

    #[test]
    fn test_volume_is_not_clamped() {
        let player = FallbackPlayer::new("player", &PlayerOptions::default());
        player.set_volume(1.5).unwrap();
        assert_eq!(player.get_volume().unwrap(), 1.5);
    }

    #[test]
    fn test_play_pause_fire_listeners_on_change_only() {
        let player = FallbackPlayer::new("player", &PlayerOptions::default().with_autoplay(false));
        let plays = Rc::new(Cell::new(0));
        let pauses = Rc::new(Cell::new(0));
        let p = plays.clone();
        player
            .add_event_listener("play", Box::new(move || p.set(p.get() + 1)))
            .unwrap();
        let p = pauses.clone();
        player
            .add_event_listener("pause", Box::new(move || p.set(p.get() + 1)))
            .unwrap();

        player.play().unwrap();
        player.play().unwrap();
        player.pause().unwrap();
        player.pause().unwrap();

        assert_eq!(plays.get(), 1);
        assert_eq!(pauses.get(), 1);
    }

    #[test]
    fn test_listener_may_reenter_handle() {
        let player = FallbackPlayer::new("player", &PlayerOptions::default());
        let seen = Rc::new(Cell::new(false));
        let inner = player.clone();
        let flag = seen.clone();
        player
            .add_event_listener(
                "ready",
                Box::new(move || {
                    flag.set(inner.get_volume().is_ok());
                    inner
                        .add_event_listener("ready", Box::new(|| {}))
                        .unwrap();
                }),
            )
            .unwrap();

        player.emit("ready");
        assert!(seen.get());
        assert_eq!(player.listener_count("ready"), 2);
    }

    #[test]
    fn test_finish_fires_ended() {
        let player = FallbackPlayer::new("player", &PlayerOptions::for_video("v1"));
        let ended = Rc::new(Cell::new(false));
        let flag = ended.clone();
        player
            .add_event_listener("ended", Box::new(move || flag.set(true)))
            .unwrap();
        player.finish();
        assert!(ended.get());
        assert!(player.get_ended().unwrap());
        player.play().unwrap();
        assert!(!player.get_ended().unwrap());
    }

    #[test]
    fn test_embed_source_url_and_shared_player() {
        let options = EmbedOptions::for_channel("shroud").with_theme(EmbedTheme::Light);
        let embed = FallbackEmbed::new("embed", &options);
        let url = embed.source_url().unwrap();
        assert_eq!(url.host_str(), Some("embed.twitch.tv"));
        assert_eq!(query(&url, "layout"), ["video-with-chat"]);
        assert_eq!(query(&url, "theme"), ["light"]);

        let player = embed.get_player().unwrap();
        player.set_volume(0.2).unwrap();
        assert_eq!(embed.get_volume().unwrap(), 0.2);
        assert_eq!(player.source_url().unwrap(), url);
    }

    #[test]
    fn test_embed_only_operations() {
        let embed = FallbackEmbed::new("embed", &EmbedOptions::for_collection("c1", None));
        embed.enable_captions().unwrap();
        assert!(embed.captions_enabled());
        embed.disable_captions().unwrap();
        assert!(!embed.captions_enabled());

        assert_eq!(embed.get_collection().unwrap().as_deref(), Some("c1"));
        embed.set_channel_id("71092938").unwrap();
        assert_eq!(embed.get_channel_id().unwrap().as_deref(), Some("71092938"));
        assert_eq!(embed.get_collection().unwrap().as_deref(), Some("c1"));

        let stats = embed.get_playback_stats().unwrap();
        assert_eq!(stats.video_statistics.backend_version, "fallback");
    }

    #[test]
    fn test_channel_id_keeps_source() {
        let embed = FallbackEmbed::new("embed", &EmbedOptions::for_channel("shroud"));
        let before = embed.source_url().unwrap();

        embed.set_channel_id("71092938").unwrap();

        let after = embed.source_url().unwrap();
        assert_eq!(after, before);
        assert!(after.query_pairs().any(|(k, v)| k == "channel" && v == "shroud"));
        assert_eq!(embed.get_channel().unwrap().as_deref(), Some("shroud"));
        assert_eq!(embed.get_channel_id().unwrap().as_deref(), Some("71092938"));

        embed.set_channel("xqc").unwrap();
        assert_eq!(embed.get_channel_id().unwrap(), None);
    }

    #[test]
    fn test_embed_fullscreen_flag() {
        let embed = FallbackEmbed::new(
            "embed",
            &EmbedOptions::for_channel("shroud").with_allow_fullscreen(false),
        );
        assert!(!embed.player().allows_fullscreen());
        assert!(FallbackPlayer::new("p", &PlayerOptions::default()).allows_fullscreen());
    }
}
