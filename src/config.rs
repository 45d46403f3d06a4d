//! Configuration loading and defaults. Every key is optional in config.toml.

use crate::logging;
use crate::paths::AppPaths;
use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_tick_rate_ms() -> u64 {
    100
}
fn default_toast_duration_ms() -> u64 {
    1500
}
fn default_transition_delay_ms() -> u64 {
    1500
}
fn default_transcription_delay_ms() -> u64 {
    1200
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Start each launch with the sample entries.
    #[serde(default = "default_true")]
    pub seed_entries: bool,
    /// Mirror the signed-in user to disk so the next launch skips the login.
    #[serde(default = "default_true")]
    pub persist_session: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_transition_delay_ms")]
    pub transition_delay_ms: u64,
    #[serde(default = "default_transcription_delay_ms")]
    pub transcription_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed_entries: true,
            persist_session: true,
            log_level: default_log_level(),
            tick_rate_ms: default_tick_rate_ms(),
            toast_duration_ms: default_toast_duration_ms(),
            transition_delay_ms: default_transition_delay_ms(),
            transcription_delay_ms: default_transcription_delay_ms(),
        }
    }
}

impl Config {
    /// Loads the user's config file; a missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::config_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(raw) => Self::parse(&raw)
                .wrap_err_with(|| format!("invalid configuration in {}", path.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e).wrap_err_with(|| format!("failed to read {}", path.display())),
        }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw)?;
        logging::parse_level(&config.log_level)?;
        Ok(config)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    pub fn transcription_delay(&self) -> Duration {
        Duration::from_millis(self.transcription_delay_ms)
    }
}
