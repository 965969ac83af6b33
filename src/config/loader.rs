//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.birthweek.toml` in the working directory
//! 4. `~/.config/birthweek/config.toml` (global defaults)
//! 5. Built-in defaults

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::constants::{ENV_FORMAT, ENV_LEAP_DAY, ENV_TODAY, ENV_USERS};
use crate::env::Env;
use crate::models::{LeapDayPolicy, OutputFormat};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub roster: RosterConfig,
    pub schedule: ScheduleConfig,
    pub output: OutputConfig,
}

/// Where users are loaded from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Users file (`.json` or `.toml`). Relative paths in a config file are
    /// resolved against that file's directory.
    pub file: Option<PathBuf>,
}

/// Birthday window settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Unset means [`LeapDayPolicy::default`]; see [`Config::leap_day`].
    pub leap_day: Option<LeapDayPolicy>,
    /// Fixed reference date instead of the system date.
    pub today: Option<NaiveDate>,
}

/// Rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Unset means [`OutputFormat::default`]; see [`Config::format`].
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Effective leap day policy after layering.
    pub fn leap_day(&self) -> LeapDayPolicy {
        self.schedule.leap_day.unwrap_or_default()
    }

    /// Effective output format after layering.
    pub fn format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    /// Load configuration with proper layering.
    ///
    /// Reads from the global config, the config in `work_dir`, then applies
    /// environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = work_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        if let (Some(file), Some(dir)) = (config.roster.file.as_mut(), path.parent()) {
            if file.is_relative() {
                *file = dir.join(&*file);
            }
        }

        Ok(config)
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one; every setting `other` sets wins.
    fn merge(&mut self, other: Config) {
        if other.roster.file.is_some() {
            self.roster.file = other.roster.file;
        }
        if other.schedule.leap_day.is_some() {
            self.schedule.leap_day = other.schedule.leap_day;
        }
        if other.schedule.today.is_some() {
            self.schedule.today = other.schedule.today;
        }
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.non_empty(ENV_USERS) {
            self.roster.file = Some(PathBuf::from(val));
        }

        if let Some(parsed) = env.parse::<LeapDayPolicy>(ENV_LEAP_DAY) {
            match parsed {
                Ok(policy) => self.schedule.leap_day = Some(policy),
                Err(e) => warn!("ignoring invalid {ENV_LEAP_DAY}: {e}"),
            }
        }

        if let Some(parsed) = env.parse::<NaiveDate>(ENV_TODAY) {
            match parsed {
                Ok(date) => self.schedule.today = Some(date),
                Err(e) => warn!("ignoring invalid {ENV_TODAY}: {e}"),
            }
        }

        if let Some(parsed) = env.parse::<OutputFormat>(ENV_FORMAT) {
            match parsed {
                Ok(format) => self.output.format = Some(format),
                Err(e) => warn!("ignoring invalid {ENV_FORMAT}: {e}"),
            }
        }
    }
}
