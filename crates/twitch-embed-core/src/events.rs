//! Subscribable widget events
//!
//! Each variant carries the exact string the widget dispatches, so the tag a
//! caller subscribes with can never drift from the name the widget fires.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Events fired by `Twitch.Player`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The video player is ready for API commands
    #[serde(rename = "video.ready")]
    VideoReady,
    /// The video started playing
    #[serde(rename = "video.play")]
    VideoPlay,
    /// Video or stream ends
    #[serde(rename = "ended")]
    Ended,
    /// Player is paused. Buffering and seeking are not considered paused.
    #[serde(rename = "pause")]
    Pause,
    /// Player just unpaused; playback or buffering follows
    #[serde(rename = "play")]
    Play,
    /// Playback was blocked, usually after an unmuted autoplay
    #[serde(rename = "playbackBlocked")]
    PlaybackBlocked,
    /// Player started video playback
    #[serde(rename = "playing")]
    Playing,
    /// Loaded channel goes offline
    #[serde(rename = "offline")]
    Offline,
    /// Loaded channel goes online
    #[serde(rename = "online")]
    Online,
    /// Player is ready to accept function calls
    #[serde(rename = "ready")]
    Ready,
}

impl PlayerEvent {
    pub const ALL: [PlayerEvent; 10] = [
        PlayerEvent::VideoReady,
        PlayerEvent::VideoPlay,
        PlayerEvent::Ended,
        PlayerEvent::Pause,
        PlayerEvent::Play,
        PlayerEvent::PlaybackBlocked,
        PlayerEvent::Playing,
        PlayerEvent::Offline,
        PlayerEvent::Online,
        PlayerEvent::Ready,
    ];

    /// Event name as dispatched by the widget
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerEvent::VideoReady => "video.ready",
            PlayerEvent::VideoPlay => "video.play",
            PlayerEvent::Ended => "ended",
            PlayerEvent::Pause => "pause",
            PlayerEvent::Play => "play",
            PlayerEvent::PlaybackBlocked => "playbackBlocked",
            PlayerEvent::Playing => "playing",
            PlayerEvent::Offline => "offline",
            PlayerEvent::Online => "online",
            PlayerEvent::Ready => "ready",
        }
    }
}

impl fmt::Display for PlayerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerEvent::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| Error::InvalidOptions(format!("unknown player event: {}", s)))
    }
}

/// Events fired by `Twitch.Embed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmbedEvent {
    /// The user logged in to Twitch through the embed
    #[serde(rename = "authenticate")]
    Authenticate,
    #[serde(rename = "video.ready")]
    VideoReady,
    #[serde(rename = "video.play")]
    VideoPlay,
    #[serde(rename = "ended")]
    Ended,
    #[serde(rename = "pause")]
    Pause,
    #[serde(rename = "play")]
    Play,
    #[serde(rename = "playbackBlocked")]
    PlaybackBlocked,
    #[serde(rename = "playing")]
    Playing,
    #[serde(rename = "offline")]
    Offline,
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "ready")]
    Ready,
}

impl EmbedEvent {
    pub const ALL: [EmbedEvent; 11] = [
        EmbedEvent::Authenticate,
        EmbedEvent::VideoReady,
        EmbedEvent::VideoPlay,
        EmbedEvent::Ended,
        EmbedEvent::Pause,
        EmbedEvent::Play,
        EmbedEvent::PlaybackBlocked,
        EmbedEvent::Playing,
        EmbedEvent::Offline,
        EmbedEvent::Online,
        EmbedEvent::Ready,
    ];

    /// Event name as dispatched by the widget
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedEvent::Authenticate => "authenticate",
            EmbedEvent::VideoReady => "video.ready",
            EmbedEvent::VideoPlay => "video.play",
            EmbedEvent::Ended => "ended",
            EmbedEvent::Pause => "pause",
            EmbedEvent::Play => "play",
            EmbedEvent::PlaybackBlocked => "playbackBlocked",
            EmbedEvent::Playing => "playing",
            EmbedEvent::Offline => "offline",
            EmbedEvent::Online => "online",
            EmbedEvent::Ready => "ready",
        }
    }
}

impl fmt::Display for EmbedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmbedEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmbedEvent::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| Error::InvalidOptions(format!("unknown embed event: {}", s)))
    }
}

impl From<PlayerEvent> for EmbedEvent {
    fn from(event: PlayerEvent) -> Self {
        match event {
            PlayerEvent::VideoReady => EmbedEvent::VideoReady,
            PlayerEvent::VideoPlay => EmbedEvent::VideoPlay,
            PlayerEvent::Ended => EmbedEvent::Ended,
            PlayerEvent::Pause => EmbedEvent::Pause,
            PlayerEvent::Play => EmbedEvent::Play,
            PlayerEvent::PlaybackBlocked => EmbedEvent::PlaybackBlocked,
            PlayerEvent::Playing => EmbedEvent::Playing,
            PlayerEvent::Offline => EmbedEvent::Offline,
            PlayerEvent::Online => EmbedEvent::Online,
            PlayerEvent::Ready => EmbedEvent::Ready,
        }
    }
}
