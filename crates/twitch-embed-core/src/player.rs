//! `TwitchPlayer` - typed facade over a `Twitch.Player` handle

use crate::events::PlayerEvent;
use crate::handle::{PlayerHandle, PlayerProvider};
use crate::options::PlayerOptions;
use crate::resolve::{resolve, HandleSource};

/// Typed wrapper for the Twitch interactive media player.
///
/// Every operation forwards to the bound handle once and returns the
/// handle's result untouched, errors included.
#[derive(Debug)]
pub struct TwitchPlayer<H: PlayerHandle> {
    handle: H,
    mount_id: String,
    options: PlayerOptions,
    source: HandleSource,
}

impl<H: PlayerHandle> TwitchPlayer<H> {
    /// Create a player inside the element `mount_id`.
    ///
    /// Uses the page-global `Twitch.Player` when it can be constructed and
    /// the provider's bundled fallback otherwise.
    pub fn from_options<P>(provider: &P, mount_id: &str, options: PlayerOptions) -> Self
    where
        P: PlayerProvider<Handle = H>,
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

    /// Wrap a handle that already exists, such as an embed's inner player
    pub fn from_handle(handle: H, mount_id: &str, options: PlayerOptions) -> Self {
        Self {
            handle,
            mount_id: mount_id.to_string(),
            options,
            source: HandleSource::Wrapped,
        }
    }

    /// Element the player renders into
    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Options the player was created with
    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    /// Whether the global widget or the fallback is bound
    pub fn source(&self) -> HandleSource {
        self.source
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn into_handle(self) -> H {
        self.handle
    }

    /// Pauses the player
    pub fn pause(&self) -> Result<(), H::Error> {
        self.handle.pause()
    }

    /// Begins playing the current content
    pub fn play(&self) -> Result<(), H::Error> {
        self.handle.play()
    }

    /// Seeks to `timestamp` seconds and resumes if paused. VODs only.
    pub fn seek(&self, timestamp: f64) -> Result<(), H::Error> {
        self.handle.seek(timestamp)
    }

    pub fn set_channel(&self, channel: &str) -> Result<(), H::Error> {
        self.handle.set_channel(channel)
    }

    /// Plays a collection, starting at `video_id` when it belongs to it and
    /// at the first video otherwise
    pub fn set_collection(&self, collection_id: &str, video_id: Option<&str>) -> Result<(), H::Error> {
        self.handle.set_collection(collection_id, video_id)
    }

    /// Selects a quality; use a `group` value from [`Self::get_qualities`]
    pub fn set_quality(&self, quality: &str) -> Result<(), H::Error> {
        self.handle.set_quality(quality)
    }

    /// Plays `video_id` starting at `timestamp` seconds
    pub fn set_video(&self, video_id: &str, timestamp: f64) -> Result<(), H::Error> {
        self.handle.set_video(video_id, timestamp)
    }

    pub fn get_muted(&self) -> Result<bool, H::Error> {
        self.handle.get_muted()
    }

    /// Mutes or unmutes, independently of the volume
    pub fn set_muted(&self, muted: bool) -> Result<(), H::Error> {
        self.handle.set_muted(muted)
    }

    pub fn get_volume(&self) -> Result<f64, H::Error> {
        self.handle.get_volume()
    }

    /// Sets the volume, nominally between 0.0 and 1.0. The value is passed
    /// through as given; range handling is up to the widget.
    pub fn set_volume(&self, volume: f64) -> Result<(), H::Error> {
        self.handle.set_volume(volume)
    }

    /// Channel name. Live streams only.
    pub fn get_channel(&self) -> Result<Option<String>, H::Error> {
        self.handle.get_channel()
    }

    /// Current position in seconds. VODs only.
    pub fn get_current_time(&self) -> Result<f64, H::Error> {
        self.handle.get_current_time()
    }

    /// Duration in seconds. VODs only.
    pub fn get_duration(&self) -> Result<f64, H::Error> {
        self.handle.get_duration()
    }

    pub fn get_ended(&self) -> Result<bool, H::Error> {
        self.handle.get_ended()
    }

    pub fn get_qualities(&self) -> Result<Vec<crate::Quality>, H::Error> {
        self.handle.get_qualities()
    }

    pub fn get_quality(&self) -> Result<String, H::Error> {
        self.handle.get_quality()
    }

    /// Video ID. VODs only.
    pub fn get_video(&self) -> Result<Option<String>, H::Error> {
        self.handle.get_video()
    }

    /// Buffering and seeking count as playing
    pub fn is_paused(&self) -> Result<bool, H::Error> {
        self.handle.is_paused()
    }

    /// Registers `callback` for `event` under the event's widget name
    pub fn add_event_listener<F>(&self, event: PlayerEvent, callback: F) -> Result<(), H::Error>
    where
        F: FnMut() + 'static,
    {
        self.handle.add_event_listener(event.as_str(), Box::new(callback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::FallbackPlayer;
    use crate::Error;

    struct MissingGlobal;

    impl PlayerProvider for MissingGlobal {
        type Handle = FallbackPlayer;

        fn global(&self, _mount_id: &str, _options: &PlayerOptions) -> crate::Result<FallbackPlayer> {
            Err(Error::WidgetUnavailable {
                constructor: Self::CONSTRUCTOR,
            })
        }

        fn fallback(&self, mount_id: &str, options: &PlayerOptions) -> FallbackPlayer {
            FallbackPlayer::new(mount_id, options)
        }
    }

    #[test]
    fn test_accessors_keep_construction_inputs() {
        let options = PlayerOptions::for_video("v123").with_time("0h5m0s");
        let player = TwitchPlayer::from_options(&MissingGlobal, "twitch-player", options.clone());
        assert_eq!(player.mount_id(), "twitch-player");
        assert_eq!(player.options(), &options);
        assert_eq!(player.source(), HandleSource::Fallback);
    }

    #[test]
    fn test_from_handle_is_wrapped() {
        let handle = FallbackPlayer::new("p", &PlayerOptions::default());
        let player = TwitchPlayer::from_handle(handle, "p", PlayerOptions::default());
        assert_eq!(player.source(), HandleSource::Wrapped);
        assert_eq!(player.handle().mount_id(), "p");
    }
}
