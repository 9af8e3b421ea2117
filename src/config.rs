//! Configuration management for the Oxide bot.
//!
//! All environment variables used by the bot are prefixed with `OXIDE_`.
//! Values are resolved exactly once at startup into an immutable [`Config`]
//! snapshot; there is no re-read or live-update path.
//!
//! Boolean variables follow a true-by-default rule inherited from the
//! original configuration scheme: any value except `false` and `0`
//! (case-insensitive) is treated as true, including the empty string.
//! See [`coerce_bool`].

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

/// Env var holding the bot authorization token. Required for the bot to
/// connect, but its absence is not an error at load time.
const BOT_TOKEN: &str = "OXIDE_BOT_TOKEN";
/// Env var for the extensions directory, defaulting to `cogs/`.
const EXTS_DIRECTORY: &str = "OXIDE_EXTS_DIRECTORY";
/// Env var holding a comma-separated list of extension names to exclude.
const EXTS_EXCLUDE: &str = "OXIDE_EXTS_EXCLUDE";
/// Env var toggling debug mode, parsed with [`coerce_bool`].
const DEBUG_MODE: &str = "OXIDE_DEBUG_MODE";
/// Env var naming the guild that receives application commands in debug mode.
const DEBUG_GUILD_ID: &str = "OXIDE_DEBUG_GUILD_ID";

/// Immutable configuration snapshot resolved at process start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot authorization token. `None` when unset; the caller decides
    /// whether that is fatal.
    pub bot_token: Option<String>,

    /// Directory to load extensions from.
    pub exts_directory: String,

    /// Comma-separated extension names to skip, relative to
    /// `exts_directory`. Splitting on commas is the caller's job.
    pub exts_exclude: String,

    /// Whether the bot runs in debug mode. Forced on by a `--debug-mode`
    /// or `--debug` argument regardless of the environment value.
    pub debug_mode: bool,

    /// Guild that application commands are registered to in debug mode.
    pub debug_guild_id: Option<String>,
}

impl Config {
    /// Load configuration from the real process environment, an optional
    /// `.env` file in the working directory, and the process arguments.
    ///
    /// The `.env` file never overrides variables already set in the
    /// environment. This never fails; a missing bot token is simply `None`.
    pub fn load() -> Self {
        let mut env: HashMap<String, String> = std::env::vars().collect();
        overlay_dotenv(Path::new(".env"), &mut env);
        let args: Vec<String> = std::env::args().collect();
        Self::resolve(&env, &args)
    }

    /// Resolve a snapshot from an explicit environment map and argument
    /// list. Pure; no process state is read or written.
    pub fn resolve(env: &HashMap<String, String>, args: &[String]) -> Self {
        let debug_flag = args.iter().any(|a| a == "--debug-mode" || a == "--debug");
        let debug_env = env.get(DEBUG_MODE).map(String::as_str).unwrap_or("0");

        Self {
            bot_token: env.get(BOT_TOKEN).cloned(),
            exts_directory: env
                .get(EXTS_DIRECTORY)
                .cloned()
                .unwrap_or_else(|| "cogs/".to_string()),
            exts_exclude: env.get(EXTS_EXCLUDE).cloned().unwrap_or_default(),
            debug_mode: coerce_bool(debug_env) || debug_flag,
            debug_guild_id: env.get(DEBUG_GUILD_ID).cloned(),
        }
    }
}

/// Merge `KEY=VALUE` pairs from a dotenv-style file into `env`, keeping
/// any key already present. A missing file is a no-op, and lines that do
/// not parse are skipped.
pub fn overlay_dotenv(path: &Path, env: &mut HashMap<String, String>) {
    let Ok(iter) = dotenvy::from_path_iter(path) else {
        return;
    };

    let mut merged = 0usize;
    for (key, value) in iter.flatten() {
        env.entry(key).or_insert_with(|| {
            merged += 1;
            value
        });
    }
    debug!("Merged {} entries from {}", merged, path.display());
}

/// Coerce a raw environment string to a boolean.
///
/// Only `false` and `0` (case-insensitive) are false; everything else,
/// including the empty string, is true. Unrecognized values therefore
/// resolve to true rather than false, a quirk preserved from the
/// original scheme rather than one to "fix" here.
pub fn coerce_bool(val: &str) -> bool {
    !matches!(val.to_lowercase().as_str(), "false" | "0")
}
