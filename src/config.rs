//! Settings: `config.json` in the user config dir, then env overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::repeat::RepeatTiming;
use crate::search::DEFAULT_MAX_DISTANCE;

pub const APP_DIR: &str = "rapp";
pub const CONFIG_FILE: &str = "config.json";
pub const HISTORY_FILE: &str = "history";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directories scanned for `*.desktop` files, in priority order.
    pub application_dirs: Vec<PathBuf>,
    /// Append-only launch log.
    pub history_path: PathBuf,
    /// Largest edit distance for fuzzy matches.
    pub max_distance: usize,
    pub initial_delay_ms: u64,
    pub repeat_interval_ms: u64,
    /// Rows scrolled per wheel notch.
    pub scroll_speed: f32,
    pub tick_rate_ms: u64,
    pub debug_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        let data = data_dir();
        Self {
            application_dirs: vec![
                PathBuf::from("/usr/share/applications"),
                PathBuf::from("/usr/local/share/applications"),
                data.join("applications"),
            ],
            history_path: data.join(APP_DIR).join(HISTORY_FILE),
            max_distance: DEFAULT_MAX_DISTANCE,
            initial_delay_ms: 500,
            repeat_interval_ms: 125,
            scroll_speed: 3.0,
            tick_rate_ms: 16,
            debug_logging: false,
        }
    }
}

impl Config {
    /// Defaults, overlaid by the config file if present, then by env vars.
    pub fn load() -> Result<Self> {
        let mut config = Self::from_file(&config_path())?.unwrap_or_default();
        config.finish();
        Ok(config)
    }

    /// Defaults plus env overrides, for when the file is unusable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.finish();
        config
    }

    fn finish(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
        self.expand_home();
    }

    /// `Ok(None)` when the file does not exist.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(Some(config))
    }

    /// `RAPP_HISTORY` replaces the history path, `RAPP_APP_DIRS` the
    /// colon-separated directory list.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("RAPP_HISTORY").filter(|v| !v.is_empty()) {
            self.history_path = PathBuf::from(path);
        }
        if let Some(dirs) = var("RAPP_APP_DIRS").filter(|v| !v.is_empty()) {
            self.application_dirs = dirs
                .split(':')
                .filter(|d| !d.is_empty())
                .map(PathBuf::from)
                .collect();
        }
    }

    fn expand_home(&mut self) {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        for dir in &mut self.application_dirs {
            *dir = expand_tilde(dir, &home);
        }
        self.history_path = expand_tilde(&self.history_path, &home);
    }

    pub fn repeat_timing(&self) -> RepeatTiming {
        RepeatTiming {
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            interval: Duration::from_millis(self.repeat_interval_ms),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

pub fn data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn expand_tilde(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
