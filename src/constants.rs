//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the weekly window so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "birthweek";

/// Crate version, as reported by `birthweek version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.birthweek.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".birthweek.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "birthweek";

/// Number of days in the lookahead window, today included.
pub const WINDOW_DAYS: i64 = 7;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_USERS: &str = "BIRTHWEEK_USERS";
pub const ENV_FORMAT: &str = "BIRTHWEEK_FORMAT";
pub const ENV_LEAP_DAY: &str = "BIRTHWEEK_LEAP_DAY";
pub const ENV_TODAY: &str = "BIRTHWEEK_TODAY";
pub const ENV_LOG: &str = "BIRTHWEEK_LOG";
