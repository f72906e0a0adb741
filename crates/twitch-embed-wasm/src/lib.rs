//! Twitch Embed WASM - browser bindings for the Twitch widgets
//!
//! Binds `TwitchPlayer` / `TwitchEmbed` to the page:
//! - `Twitch.Player` / `Twitch.Embed` from the page when the script is loaded
//! - an `<iframe>` pointed at the widget origin otherwise
//!
//! ## Usage
//!
//! ```html
//! <script src="https://embed.twitch.tv/embed/v1.js"></script>
//! <div id="twitch-embed"></div>
//! ```
//!
//! ```rust,ignore
//! use twitch_embed_wasm::{embed, EmbedEvent, EmbedOptions};
//!
//! let embed = embed("twitch-embed", EmbedOptions::for_channel("shroud").with_parent("example.com"));
//! embed.add_event_listener(EmbedEvent::VideoReady, || tracing::info!("ready"))?;
//! let player = embed.get_player()?;
//! player.set_volume(0.5)?;
//! ```

use wasm_bindgen::prelude::*;

pub mod bindings;
mod global;
mod iframe;
mod provider;

pub use global::{GlobalEmbed, GlobalPlayer};
pub use iframe::{IframeEmbed, IframePlayer};
pub use provider::{EmbedBinding, PlayerBinding, WebEmbedProvider, WebPlayerProvider};
pub use twitch_embed_core::{
    EmbedEvent, EmbedLayout, EmbedOptions, EmbedTheme, HandleSource, PlayerEvent, PlayerOptions,
};

/// Player facade bound in the browser
pub type WebTwitchPlayer = twitch_embed_core::TwitchPlayer<PlayerBinding>;

/// Embed facade bound in the browser
pub type WebTwitchEmbed = twitch_embed_core::TwitchEmbed<EmbedBinding>;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    twitch_embed_core::init();
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    twitch_embed_core::VERSION.to_string()
}

/// Create a player inside the element `mount_id`
pub fn player(mount_id: &str, options: PlayerOptions) -> WebTwitchPlayer {
    WebTwitchPlayer::from_options(&WebPlayerProvider, mount_id, options)
}

/// Create an embed (player plus chat) inside the element `mount_id`
pub fn embed(mount_id: &str, options: EmbedOptions) -> WebTwitchEmbed {
    WebTwitchEmbed::from_options(&WebEmbedProvider, mount_id, options)
}
