//! Shared test doubles: a recording handle, scripted providers and a
//! warning counter

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use twitch_embed_core::{
    Callback, EmbedHandle, EmbedOptions, EmbedProvider, Error, FallbackEmbed, FallbackPlayer,
    PlaybackStatistics, PlayerHandle, PlayerOptions, PlayerProvider, Quality, VideoStatistics,
};

// =============================================================================
// Recording handle
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Pause,
    Play,
    Seek(f64),
    SetChannel(String),
    SetCollection(String, Option<String>),
    SetQuality(String),
    SetVideo(String, f64),
    GetMuted,
    SetMuted(bool),
    GetVolume,
    SetVolume(f64),
    GetChannel,
    GetCurrentTime,
    GetDuration,
    GetEnded,
    GetQualities,
    GetQuality,
    GetVideo,
    IsPaused,
    AddEventListener(String),
    GetPlayer,
    EnableCaptions,
    DisableCaptions,
    GetPlaybackStats,
    GetChannelId,
    SetChannelId(String),
    GetCollection,
}

/// Error raised by the recording widget
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetError(pub String);

pub const CANNED_VOLUME: f64 = 0.42;
pub const CANNED_TIME: f64 = 12.5;
pub const CANNED_DURATION: f64 = 3600.0;

pub fn canned_quality() -> Quality {
    Quality {
        bitrate: 3_000_000,
        codecs: "avc1.4D401F,mp4a.40.2".into(),
        group: "720p60".into(),
        height: 720,
        framerate: Some(60.0),
        is_default: false,
        name: "720p60".into(),
        width: 1280,
    }
}

pub fn canned_stats() -> PlaybackStatistics {
    PlaybackStatistics {
        video_statistics: VideoStatistics {
            fps: 60.0,
            skipped_frames: 7,
            video_resolution: "1280x720".into(),
            ..Default::default()
        },
    }
}

/// Handle that logs every call and answers with canned values
#[derive(Clone)]
pub struct RecordingPlayer {
    pub label: &'static str,
    log: Rc<RefCell<Vec<Call>>>,
    failure: Rc<RefCell<Option<String>>>,
    listeners: Rc<RefCell<Vec<(String, Callback)>>>,
}

impl RecordingPlayer {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            log: Rc::new(RefCell::new(Vec::new())),
            failure: Rc::new(RefCell::new(None)),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    /// Make every following call fail with `message`
    pub fn fail_with(&self, message: &str) {
        *self.failure.borrow_mut() = Some(message.to_string());
    }

    /// Invoke the callbacks registered for `event`
    pub fn fire(&self, event: &str) {
        for (name, callback) in self.listeners.borrow_mut().iter_mut() {
            if name == event {
                callback();
            }
        }
    }

    fn record<T>(&self, call: Call, value: T) -> Result<T, WidgetError> {
        self.log.borrow_mut().push(call);
        match self.failure.borrow().as_ref() {
            Some(message) => Err(WidgetError(message.clone())),
            None => Ok(value),
        }
    }
}

impl std::fmt::Debug for RecordingPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingPlayer")
            .field("label", &self.label)
            .field("calls", &self.log.borrow())
            .finish_non_exhaustive()
    }
}

impl PlayerHandle for RecordingPlayer {
    type Error = WidgetError;

    fn pause(&self) -> Result<(), WidgetError> {
        self.record(Call::Pause, ())
    }

    fn play(&self) -> Result<(), WidgetError> {
        self.record(Call::Play, ())
    }

    fn seek(&self, timestamp: f64) -> Result<(), WidgetError> {
        self.record(Call::Seek(timestamp), ())
    }

    fn set_channel(&self, channel: &str) -> Result<(), WidgetError> {
        self.record(Call::SetChannel(channel.into()), ())
    }

    fn set_collection(&self, collection_id: &str, video_id: Option<&str>) -> Result<(), WidgetError> {
        self.record(
            Call::SetCollection(collection_id.into(), video_id.map(str::to_string)),
            (),
        )
    }

    fn set_quality(&self, quality: &str) -> Result<(), WidgetError> {
        self.record(Call::SetQuality(quality.into()), ())
    }

    fn set_video(&self, video_id: &str, timestamp: f64) -> Result<(), WidgetError> {
        self.record(Call::SetVideo(video_id.into(), timestamp), ())
    }

    fn get_muted(&self) -> Result<bool, WidgetError> {
        self.record(Call::GetMuted, true)
    }

    fn set_muted(&self, muted: bool) -> Result<(), WidgetError> {
        self.record(Call::SetMuted(muted), ())
    }

    fn get_volume(&self) -> Result<f64, WidgetError> {
        self.record(Call::GetVolume, CANNED_VOLUME)
    }

    fn set_volume(&self, volume: f64) -> Result<(), WidgetError> {
        self.record(Call::SetVolume(volume), ())
    }

    fn get_channel(&self) -> Result<Option<String>, WidgetError> {
        self.record(Call::GetChannel, Some("canned-channel".into()))
    }

    fn get_current_time(&self) -> Result<f64, WidgetError> {
        self.record(Call::GetCurrentTime, CANNED_TIME)
    }

    fn get_duration(&self) -> Result<f64, WidgetError> {
        self.record(Call::GetDuration, CANNED_DURATION)
    }

    fn get_ended(&self) -> Result<bool, WidgetError> {
        self.record(Call::GetEnded, true)
    }

    fn get_qualities(&self) -> Result<Vec<Quality>, WidgetError> {
        self.record(Call::GetQualities, vec![canned_quality()])
    }

    fn get_quality(&self) -> Result<String, WidgetError> {
        self.record(Call::GetQuality, "720p60".into())
    }

    fn get_video(&self) -> Result<Option<String>, WidgetError> {
        self.record(Call::GetVideo, Some("v42".into()))
    }

    fn is_paused(&self) -> Result<bool, WidgetError> {
        self.record(Call::IsPaused, true)
    }

    fn add_event_listener(&self, event: &str, callback: Callback) -> Result<(), WidgetError> {
        self.record(Call::AddEventListener(event.into()), ())?;
        self.listeners.borrow_mut().push((event.to_string(), callback));
        Ok(())
    }
}

/// Embed handle that records its own calls and owns a separate inner player
#[derive(Debug, Clone)]
pub struct RecordingEmbed {
    pub recorder: RecordingPlayer,
    pub inner: RecordingPlayer,
}

impl RecordingEmbed {
    pub fn new(label: &'static str) -> Self {
        Self {
            recorder: RecordingPlayer::new(label),
            inner: RecordingPlayer::new("inner"),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.recorder.calls()
    }
}

impl PlayerHandle for RecordingEmbed {
    type Error = WidgetError;

    fn pause(&self) -> Result<(), WidgetError> {
        self.recorder.pause()
    }

    fn play(&self) -> Result<(), WidgetError> {
        self.recorder.play()
    }

    fn seek(&self, timestamp: f64) -> Result<(), WidgetError> {
        self.recorder.seek(timestamp)
    }

    fn set_channel(&self, channel: &str) -> Result<(), WidgetError> {
        self.recorder.set_channel(channel)
    }

    fn set_collection(&self, collection_id: &str, video_id: Option<&str>) -> Result<(), WidgetError> {
        self.recorder.set_collection(collection_id, video_id)
    }

    fn set_quality(&self, quality: &str) -> Result<(), WidgetError> {
        self.recorder.set_quality(quality)
    }

    fn set_video(&self, video_id: &str, timestamp: f64) -> Result<(), WidgetError> {
        self.recorder.set_video(video_id, timestamp)
    }

    fn get_muted(&self) -> Result<bool, WidgetError> {
        self.recorder.get_muted()
    }

    fn set_muted(&self, muted: bool) -> Result<(), WidgetError> {
        self.recorder.set_muted(muted)
    }

    fn get_volume(&self) -> Result<f64, WidgetError> {
        self.recorder.get_volume()
    }

    fn set_volume(&self, volume: f64) -> Result<(), WidgetError> {
        self.recorder.set_volume(volume)
    }

    fn get_channel(&self) -> Result<Option<String>, WidgetError> {
        self.recorder.get_channel()
    }

    fn get_current_time(&self) -> Result<f64, WidgetError> {
        self.recorder.get_current_time()
    }

    fn get_duration(&self) -> Result<f64, WidgetError> {
        self.recorder.get_duration()
    }

    fn get_ended(&self) -> Result<bool, WidgetError> {
        self.recorder.get_ended()
    }

    fn get_qualities(&self) -> Result<Vec<Quality>, WidgetError> {
        self.recorder.get_qualities()
    }

    fn get_quality(&self) -> Result<String, WidgetError> {
        self.recorder.get_quality()
    }

    fn get_video(&self) -> Result<Option<String>, WidgetError> {
        self.recorder.get_video()
    }

    fn is_paused(&self) -> Result<bool, WidgetError> {
        self.recorder.is_paused()
    }

    fn add_event_listener(&self, event: &str, callback: Callback) -> Result<(), WidgetError> {
        self.recorder.add_event_listener(event, callback)
    }
}

impl EmbedHandle for RecordingEmbed {
    type Player = RecordingPlayer;

    fn get_player(&self) -> Result<RecordingPlayer, WidgetError> {
        self.recorder.record(Call::GetPlayer, self.inner.clone())
    }

    fn enable_captions(&self) -> Result<(), WidgetError> {
        self.recorder.record(Call::EnableCaptions, ())
    }

    fn disable_captions(&self) -> Result<(), WidgetError> {
        self.recorder.record(Call::DisableCaptions, ())
    }

    fn get_playback_stats(&self) -> Result<PlaybackStatistics, WidgetError> {
        self.recorder.record(Call::GetPlaybackStats, canned_stats())
    }

    fn get_channel_id(&self) -> Result<Option<String>, WidgetError> {
        self.recorder.record(Call::GetChannelId, Some("71092938".into()))
    }

    fn set_channel_id(&self, channel_id: &str) -> Result<(), WidgetError> {
        self.recorder.record(Call::SetChannelId(channel_id.into()), ())
    }

    fn get_collection(&self) -> Result<Option<String>, WidgetError> {
        self.recorder.record(Call::GetCollection, Some("c-canned".into()))
    }
}

// =============================================================================
// Providers
// =============================================================================

/// How the simulated page exposes the global constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Global {
    Present,
    Missing,
    Throws,
}

/// Provider over recording handles, labelled "global" or "fallback"
pub struct ScriptedProvider {
    pub global: Global,
    pub global_attempts: Cell<u32>,
    pub fallback_builds: Cell<u32>,
}

impl ScriptedProvider {
    pub fn new(global: Global) -> Self {
        Self {
            global,
            global_attempts: Cell::new(0),
            fallback_builds: Cell::new(0),
        }
    }

    fn attempt<H>(&self, constructor: &'static str, build: impl FnOnce() -> H) -> twitch_embed_core::Result<H> {
        self.global_attempts.set(self.global_attempts.get() + 1);
        match self.global {
            Global::Present => Ok(build()),
            Global::Missing => Err(Error::WidgetUnavailable { constructor }),
            Global::Throws => Err(Error::construction(
                constructor,
                format!("TypeError: {} is not a constructor", constructor),
            )),
        }
    }
}

impl PlayerProvider for ScriptedProvider {
    type Handle = RecordingPlayer;

    fn global(&self, _mount_id: &str, _options: &PlayerOptions) -> twitch_embed_core::Result<RecordingPlayer> {
        self.attempt(<Self as PlayerProvider>::CONSTRUCTOR, || RecordingPlayer::new("global"))
    }

    fn fallback(&self, _mount_id: &str, _options: &PlayerOptions) -> RecordingPlayer {
        self.fallback_builds.set(self.fallback_builds.get() + 1);
        RecordingPlayer::new("fallback")
    }
}

impl EmbedProvider for ScriptedProvider {
    type Handle = RecordingEmbed;

    fn global(&self, _mount_id: &str, _options: &EmbedOptions) -> twitch_embed_core::Result<RecordingEmbed> {
        self.attempt(<Self as EmbedProvider>::CONSTRUCTOR, || RecordingEmbed::new("global"))
    }

    fn fallback(&self, _mount_id: &str, _options: &EmbedOptions) -> RecordingEmbed {
        self.fallback_builds.set(self.fallback_builds.get() + 1);
        RecordingEmbed::new("fallback")
    }
}

/// Provider for a page without the Twitch script, backed by the real fallback
pub struct NoScriptPage;

impl PlayerProvider for NoScriptPage {
    type Handle = FallbackPlayer;

    fn global(&self, _mount_id: &str, _options: &PlayerOptions) -> twitch_embed_core::Result<FallbackPlayer> {
        Err(Error::WidgetUnavailable {
            constructor: <Self as PlayerProvider>::CONSTRUCTOR,
        })
    }

    fn fallback(&self, mount_id: &str, options: &PlayerOptions) -> FallbackPlayer {
        FallbackPlayer::new(mount_id, options)
    }
}

impl EmbedProvider for NoScriptPage {
    type Handle = FallbackEmbed;

    fn global(&self, _mount_id: &str, _options: &EmbedOptions) -> twitch_embed_core::Result<FallbackEmbed> {
        Err(Error::WidgetUnavailable {
            constructor: <Self as EmbedProvider>::CONSTRUCTOR,
        })
    }

    fn fallback(&self, mount_id: &str, options: &EmbedOptions) -> FallbackEmbed {
        FallbackEmbed::new(mount_id, options)
    }
}

// =============================================================================
// Log capture
// =============================================================================

/// Layer counting warn-level events
#[derive(Clone, Default)]
pub struct WarnCounter(Arc<AtomicUsize>);

impl WarnCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` under a subscriber that counts warnings
pub fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, counter.count())
}
