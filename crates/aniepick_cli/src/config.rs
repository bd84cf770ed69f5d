//! Optional RON config file. Every field falls back to a default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use aniepick_engine::{ClientSettings, DEFAULT_BASE_URL};
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "aniepick.ron";
pub const LOG_FILENAME: &str = "aniepick.log";
const DEFAULT_DATA_DIR: &str = ".aniepick";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub page_limit: u32,
    pub data_dir: Option<PathBuf>,
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_delay_ms: client.request_delay.as_millis() as u64,
            request_timeout_secs: client.request_timeout.as_secs(),
            page_limit: client.page_limit,
            data_dir: None,
            log_to_file: false,
        }
    }
}

impl AppConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.api_base_url.clone(),
            request_delay: Duration::from_millis(self.request_delay_ms),
            request_timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
            page_limit: self.page_limit.max(1),
            ..ClientSettings::default()
        }
    }
}

pub fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Reads the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading config {}", path.display()));
        }
    };
    ron::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}
