//! Handle and provider traits
//!
//! A handle is the concrete widget instance a facade forwards calls to: the
//! page-global `Twitch.Player`/`Twitch.Embed`, or a bundled fallback. A
//! provider knows how to build both kinds, which keeps the global lookup
//! swappable in tests.

use crate::options::{EmbedOptions, PlayerOptions};
use crate::types::{PlaybackStatistics, Quality};
use crate::Result;

/// Callback registered for a widget event
pub type Callback = Box<dyn FnMut() + 'static>;

/// Operations of a `Twitch.Player` instance
pub trait PlayerHandle {
    /// Error raised by the widget itself
    type Error;

    fn pause(&self) -> std::result::Result<(), Self::Error>;
    fn play(&self) -> std::result::Result<(), Self::Error>;
    fn seek(&self, timestamp: f64) -> std::result::Result<(), Self::Error>;
    fn set_channel(&self, channel: &str) -> std::result::Result<(), Self::Error>;
    fn set_collection(
        &self,
        collection_id: &str,
        video_id: Option<&str>,
    ) -> std::result::Result<(), Self::Error>;
    fn set_quality(&self, quality: &str) -> std::result::Result<(), Self::Error>;
    fn set_video(&self, video_id: &str, timestamp: f64) -> std::result::Result<(), Self::Error>;
    fn get_muted(&self) -> std::result::Result<bool, Self::Error>;
    fn set_muted(&self, muted: bool) -> std::result::Result<(), Self::Error>;
    fn get_volume(&self) -> std::result::Result<f64, Self::Error>;
    fn set_volume(&self, volume: f64) -> std::result::Result<(), Self::Error>;
    fn get_channel(&self) -> std::result::Result<Option<String>, Self::Error>;
    fn get_current_time(&self) -> std::result::Result<f64, Self::Error>;
    fn get_duration(&self) -> std::result::Result<f64, Self::Error>;
    fn get_ended(&self) -> std::result::Result<bool, Self::Error>;
    fn get_qualities(&self) -> std::result::Result<Vec<Quality>, Self::Error>;
    fn get_quality(&self) -> std::result::Result<String, Self::Error>;
    fn get_video(&self) -> std::result::Result<Option<String>, Self::Error>;
    fn is_paused(&self) -> std::result::Result<bool, Self::Error>;
    fn add_event_listener(
        &self,
        event: &str,
        callback: Callback,
    ) -> std::result::Result<(), Self::Error>;
}

/// Operations of a `Twitch.Embed` instance.
///
/// The embed answers every player operation directly, and also hands out
/// its inner player.
pub trait EmbedHandle: PlayerHandle {
    type Player: PlayerHandle<Error = Self::Error>;

    fn get_player(&self) -> std::result::Result<Self::Player, Self::Error>;
    fn enable_captions(&self) -> std::result::Result<(), Self::Error>;
    fn disable_captions(&self) -> std::result::Result<(), Self::Error>;
    fn get_playback_stats(&self) -> std::result::Result<PlaybackStatistics, Self::Error>;
    fn get_channel_id(&self) -> std::result::Result<Option<String>, Self::Error>;
    fn set_channel_id(&self, channel_id: &str) -> std::result::Result<(), Self::Error>;
    fn get_collection(&self) -> std::result::Result<Option<String>, Self::Error>;
}

/// Builds `Twitch.Player` handles
pub trait PlayerProvider {
    type Handle: PlayerHandle;

    /// Constructor name used in log fields
    const CONSTRUCTOR: &'static str = "Twitch.Player";

    /// Instantiate the page-global widget.
    ///
    /// Returns `Error::WidgetUnavailable` when the global is missing and
    /// `Error::Construction` when its constructor throws.
    fn global(&self, mount_id: &str, options: &PlayerOptions) -> Result<Self::Handle>;

    /// Instantiate the bundled fallback
    fn fallback(&self, mount_id: &str, options: &PlayerOptions) -> Self::Handle;
}

/// Builds `Twitch.Embed` handles
pub trait EmbedProvider {
    type Handle: EmbedHandle;

    const CONSTRUCTOR: &'static str = "Twitch.Embed";

    fn global(&self, mount_id: &str, options: &EmbedOptions) -> Result<Self::Handle>;

    fn fallback(&self, mount_id: &str, options: &EmbedOptions) -> Self::Handle;
}
