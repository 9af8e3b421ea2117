//! Oxide Discord bot entry point.
//!
//! Resolves the startup configuration snapshot, wires up logging, and
//! hands the snapshot to the rest of the application.

mod config;

use anyhow::{bail, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::load();

    // Initialize logging; RUST_LOG overrides the debug-mode default
    let default_filter = if config.debug_mode { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Oxide bot...");
    info!("Extensions directory: {}", config.exts_directory);
    if !config.exts_exclude.is_empty() {
        info!("Excluded extensions: {}", config.exts_exclude);
    }
    if config.debug_mode {
        match &config.debug_guild_id {
            Some(guild) => info!("Debug mode enabled, commands target guild {}", guild),
            None => warn!("Debug mode enabled but OXIDE_DEBUG_GUILD_ID is not set"),
        }
    }

    // The loader leaves a missing token as None; it becomes fatal here
    if config.bot_token.is_none() {
        bail!("OXIDE_BOT_TOKEN is not set (environment or .env file)");
    }
    info!("Bot token present, configuration resolved");

    Ok(())
}
