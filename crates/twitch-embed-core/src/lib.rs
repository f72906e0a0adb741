//! Twitch Embed Core - typed facades for the Twitch player and embed widgets
//!
//! This crate provides:
//! - `TwitchPlayer` and `TwitchEmbed` facades mirroring the widget API
//! - Typed options, layouts, themes and event tags
//! - Resolution of the page-global widget with a bundled fallback
//! - In-memory fallback handles that mirror widget state
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                   Twitch Embed Core                       │
//! ├───────────────────────────────────────────────────────────┤
//! │                                                           │
//! │  ┌──────────────┐          ┌──────────────┐               │
//! │  │ TwitchPlayer │◄─────────│ TwitchEmbed  │  get_player   │
//! │  └──────┬───────┘          └──────┬───────┘               │
//! │         │                         │                       │
//! │         └────────────┬────────────┘                       │
//! │                      │                                    │
//! │               ┌──────┴──────┐                             │
//! │               │   resolve   │  global, else fallback      │
//! │               └──────┬──────┘                             │
//! │                      │                                    │
//! │  ┌──────────────┐    │     ┌──────────────┐               │
//! │  │   Provider   │────┴────►│    Handle    │               │
//! │  └──────────────┘          └──────────────┘               │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use twitch_embed_core::{EmbedOptions, FallbackEmbed, TwitchEmbed};
//! use twitch_embed_core::handle::EmbedProvider;
//!
//! struct Bundled;
//!
//! impl EmbedProvider for Bundled {
//!     type Handle = FallbackEmbed;
//!
//!     fn global(&self, _: &str, _: &EmbedOptions) -> twitch_embed_core::Result<FallbackEmbed> {
//!         Err(twitch_embed_core::Error::WidgetUnavailable { constructor: Self::CONSTRUCTOR })
//!     }
//!
//!     fn fallback(&self, mount_id: &str, options: &EmbedOptions) -> FallbackEmbed {
//!         FallbackEmbed::new(mount_id, options)
//!     }
//! }
//!
//! let embed = TwitchEmbed::from_options(&Bundled, "twitch-embed", EmbedOptions::for_channel("shroud"));
//! assert_eq!(embed.get_channel().unwrap().as_deref(), Some("shroud"));
//! ```

pub mod error;
pub mod types;
pub mod events;
pub mod options;
pub mod handle;
pub mod resolve;
pub mod fallback;
pub mod player;
pub mod embed;

pub use error::{Error, Result};
pub use types::*;
pub use events::{EmbedEvent, PlayerEvent};
pub use options::{EmbedOptions, PlayerOptions};
pub use handle::{Callback, EmbedHandle, EmbedProvider, PlayerHandle, PlayerProvider};
pub use resolve::{resolve, HandleSource, Resolved};
pub use fallback::{FallbackEmbed, FallbackPlayer};
pub use player::TwitchPlayer;
pub use embed::TwitchEmbed;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log library initialization
pub fn init() {
    tracing::info!(version = VERSION, "Twitch Embed Core initialized");
}
