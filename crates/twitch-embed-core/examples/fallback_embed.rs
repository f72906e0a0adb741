//! Fallback embed example
//!
//! Builds an embed on a page that never loaded the Twitch script, then drives
//! the bundled fallback through the typed facade.
//!
//! Run with: cargo run -p twitch-embed-core --example fallback_embed

use twitch_embed_core::{
    EmbedEvent, EmbedLayout, EmbedOptions, EmbedProvider, EmbedTheme, Error, FallbackEmbed,
    TwitchEmbed,
};

/// A page without `Twitch.Embed`
struct NoScriptPage;

impl EmbedProvider for NoScriptPage {
    type Handle = FallbackEmbed;

    fn global(&self, _mount_id: &str, _options: &EmbedOptions) -> twitch_embed_core::Result<FallbackEmbed> {
        Err(Error::WidgetUnavailable {
            constructor: Self::CONSTRUCTOR,
        })
    }

    fn fallback(&self, mount_id: &str, options: &EmbedOptions) -> FallbackEmbed {
        FallbackEmbed::new(mount_id, options)
    }
}

fn main() -> twitch_embed_core::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("debug")
        .init();

    twitch_embed_core::init();

    let options = EmbedOptions::for_channel("shroud")
        .with_size("100%", 480)
        .with_parent("localhost")
        .with_layout(EmbedLayout::VideoWithChat)
        .with_theme(EmbedTheme::Dark);

    println!("Options: {}", options.to_json());

    let embed = TwitchEmbed::from_options(&NoScriptPage, "twitch-embed", options);
    println!("Bound handle: {}", embed.source());
    println!("Iframe source: {}", embed.handle().source_url()?);

    embed.add_event_listener(EmbedEvent::Pause, || println!("  -> pause event"))?;
    embed.play()?;
    embed.pause()?;

    let player = embed.get_player()?;
    player.set_video("v2038392131", 754.0)?;
    println!("Channel after set_video: {:?}", embed.get_channel()?);
    println!("Video after set_video:   {:?}", embed.get_video()?);
    println!("Iframe source: {}", embed.handle().source_url()?);

    Ok(())
}
