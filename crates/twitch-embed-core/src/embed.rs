//! `TwitchEmbed` - typed facade over a `Twitch.Embed` handle (video, and
//! optionally chat)

use crate::events::EmbedEvent;
use crate::handle::{EmbedHandle, EmbedProvider};
use crate::options::EmbedOptions;
use crate::player::TwitchPlayer;
use crate::resolve::{resolve, HandleSource};
use crate::types::{PlaybackStatistics, Quality};

/// Typed wrapper for the Twitch embed.
///
/// Answers every player operation directly, plus the embed-only ones.
/// [`TwitchEmbed::get_player`] hands out the embed's own player for
/// finer-grained control.
#[derive(Debug)]
pub struct TwitchEmbed<H: EmbedHandle> {
    handle: H,
    mount_id: String,
    options: EmbedOptions,
    source: HandleSource,
}

impl<H: EmbedHandle> TwitchEmbed<H> {
    /// Create an embed inside the element `mount_id`, falling back to the
    /// bundled widget when `Twitch.Embed` is missing or throws
    pub fn from_options<P>(provider: &P, mount_id: &str, options: EmbedOptions) -> Self
    where
        P: EmbedProvider<Handle = H>,
    {
        let resolved = resolve(
            P::CONSTRUCTOR,
            mount_id,
            || provider.global(mount_id, &options),
            || provider.fallback(mount_id, &options),
        );
        Self {
            handle: resolved.handle,
            mount_id: mount_id.to_string(),
            options,
            source: resolved.source,
        }
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    pub fn options(&self) -> &EmbedOptions {
        &self.options
    }

    pub fn source(&self) -> HandleSource {
        self.source
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// The embed's own `Twitch.Player`, wrapped
    pub fn get_player(&self) -> Result<TwitchPlayer<H::Player>, H::Error> {
        let player = self.handle.get_player()?;
        Ok(TwitchPlayer::from_handle(
            player,
            &self.mount_id,
            self.options.player_options(),
        ))
    }

    /// Registers `callback` for `event` under the event's widget name
    pub fn add_event_listener<F>(&self, event: EmbedEvent, callback: F) -> Result<(), H::Error>
    where
        F: FnMut() + 'static,
    {
        self.handle.add_event_listener(event.as_str(), Box::new(callback))
    }

    pub fn enable_captions(&self) -> Result<(), H::Error> {
        self.handle.enable_captions()
    }

    pub fn disable_captions(&self) -> Result<(), H::Error> {
        self.handle.disable_captions()
    }

    pub fn get_playback_stats(&self) -> Result<PlaybackStatistics, H::Error> {
        self.handle.get_playback_stats()
    }

    pub fn get_channel_id(&self) -> Result<Option<String>, H::Error> {
        self.handle.get_channel_id()
    }

    pub fn set_channel_id(&self, channel_id: &str) -> Result<(), H::Error> {
        self.handle.set_channel_id(channel_id)
    }

    pub fn get_collection(&self) -> Result<Option<String>, H::Error> {
        self.handle.get_collection()
    }

    pub fn pause(&self) -> Result<(), H::Error> {
        self.handle.pause()
    }

    pub fn play(&self) -> Result<(), H::Error> {
        self.handle.play()
    }

    pub fn seek(&self, timestamp: f64) -> Result<(), H::Error> {
        self.handle.seek(timestamp)
    }

    pub fn set_channel(&self, channel: &str) -> Result<(), H::Error> {
        self.handle.set_channel(channel)
    }

    pub fn set_collection(&self, collection_id: &str, video_id: Option<&str>) -> Result<(), H::Error> {
        self.handle.set_collection(collection_id, video_id)
    }

    pub fn set_quality(&self, quality: &str) -> Result<(), H::Error> {
        self.handle.set_quality(quality)
    }

    pub fn set_video(&self, video_id: &str, timestamp: f64) -> Result<(), H::Error> {
        self.handle.set_video(video_id, timestamp)
    }

    pub fn get_muted(&self) -> Result<bool, H::Error> {
        self.handle.get_muted()
    }

    pub fn set_muted(&self, muted: bool) -> Result<(), H::Error> {
        self.handle.set_muted(muted)
    }

    pub fn get_volume(&self) -> Result<f64, H::Error> {
        self.handle.get_volume()
    }

    pub fn set_volume(&self, volume: f64) -> Result<(), H::Error> {
        self.handle.set_volume(volume)
    }

    pub fn get_channel(&self) -> Result<Option<String>, H::Error> {
        self.handle.get_channel()
    }

    pub fn get_current_time(&self) -> Result<f64, H::Error> {
        self.handle.get_current_time()
    }

    pub fn get_duration(&self) -> Result<f64, H::Error> {
        self.handle.get_duration()
    }

    pub fn get_ended(&self) -> Result<bool, H::Error> {
        self.handle.get_ended()
    }

    pub fn get_qualities(&self) -> Result<Vec<Quality>, H::Error> {
        self.handle.get_qualities()
    }

    pub fn get_quality(&self) -> Result<String, H::Error> {
        self.handle.get_quality()
    }

    pub fn get_video(&self) -> Result<Option<String>, H::Error> {
        self.handle.get_video()
    }

    pub fn is_paused(&self) -> Result<bool, H::Error> {
        self.handle.is_paused()
    }
}
