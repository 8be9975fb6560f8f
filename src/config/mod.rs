//! TOML configuration plus environment overrides.
//!
//! Everything here is read once at startup and handed to the formatter by
//! value; nothing is consulted again while records are being formatted.

mod structs;

pub use structs::{DiagnosticsConfig, TransformConfig};

use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Set to `true` to disable line-break escaping.
pub const ENV_DO_NOT_FORMAT_FOR_CLI: &str = "SUPPORTLOG_DO_NOT_FORMAT_FOR_CLI";
/// Replaces the `"> "` marker after break labels.
pub const ENV_NEWLINE_INDICATOR: &str = "SUPPORTLOG_NEWLINE_INDICATOR";

/// `#[serde(default)]` everywhere, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub transform: TransformConfig,
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Startup entry point: the default config file if there is one, then the
    /// environment overrides on top.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file is not valid TOML.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env_overrides();
        internal::init_with_config(&config);
        internal::info("CONFIG", &format!("Config resolved from {}", path.display()));
        Ok(config)
    }

    /// Loads an explicit file without looking at the environment. A missing
    /// file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::fine("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Applies `SUPPORTLOG_*` variables from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup; unset keys leave values alone.
    /// The disable flag only turns on for `true`, in any casing.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(flag) = lookup(ENV_DO_NOT_FORMAT_FOR_CLI) {
            self.transform.disabled = flag.trim().eq_ignore_ascii_case("true");
        }
        if let Some(indicator) = lookup(ENV_NEWLINE_INDICATOR) {
            self.transform.newline_indicator = indicator;
        }
    }

    /// `<config dir>/supportlog/supportlog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("supportlog").join("supportlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Diagnostics level as the typed enum; unknown strings mean `Warning`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.diagnostics.level.parse().unwrap_or(Level::Warning)
    }
}
