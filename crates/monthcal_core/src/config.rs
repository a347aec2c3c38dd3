//! Core runtime configuration.
//!
//! # Responsibility
//! - Collect host-tunable settings with defaults that work out of the box.
//! - Read overrides from `MONTHCAL_*` environment variables.
//!
//! # Invariants
//! - Every field has a default; an empty config document is valid.
//! - Malformed environment values are ignored with a warning, never fatal.

use crate::logging::default_log_level;
use log::warn;
use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "MONTHCAL_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "MONTHCAL_LOG_DIR";
pub const ENV_DB_PATH: &str = "MONTHCAL_DB_PATH";
pub const ENV_VISIBLE_EVENTS: &str = "MONTHCAL_VISIBLE_EVENTS";

/// Events listed per day cell before collapsing into a "+N more" count.
pub const DEFAULT_VISIBLE_EVENTS_PER_DAY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    /// SQLite file for the durable store; the in-memory store is used when unset.
    pub db_path: Option<PathBuf>,
    pub visible_events_per_day: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            db_path: None,
            visible_events_per_day: DEFAULT_VISIBLE_EVENTS_PER_DAY,
        }
    }
}

impl CoreConfig {
    /// Defaults overlaid with `MONTHCAL_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`; blank values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(level) = read(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(path) = read(ENV_DB_PATH) {
            self.db_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = read(ENV_VISIBLE_EVENTS) {
            match raw.parse::<usize>() {
                Ok(value) if value > 0 => self.visible_events_per_day = value,
                _ => warn!(
                    "event=config_override module=config status=ignored key={} value={}",
                    ENV_VISIBLE_EVENTS, raw
                ),
            }
        }
        self
    }
}
