use std::{
    env,
    fmt::Display,
    str::FromStr,
    time::Duration,
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    info,
    warn,
};

use crate::{
    core::TasteMapError,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_API_URL: &str = "https://makterbackend.fly.dev/api/v1";

pub const API_URL_VAR: &str = "TASTEMAP_API_URL";
pub const TIMEOUT_VAR: &str = "TASTEMAP_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub http_timeout_secs: u64,
    pub dark_mode: bool,
    pub review_author: String, // Prefilled author name for new reviews
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            http_timeout_secs: 15,
            dark_mode: false,
            review_author: String::new(),
        }
    }
}

impl Settings {
    /// Saved settings, then environment overrides on top.
    pub fn load() -> Self {
        let mut settings = load_json_or_default::<Settings>(SETTINGS_FILE);
        settings.apply_overrides(|key| env::var(key).ok());
        settings
    }

    pub fn save(&self) -> Result<(), TasteMapError> {
        save_json(self, SETTINGS_FILE)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs.max(1))
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_VAR) {
            let url = url.trim().trim_end_matches('/').to_string();
            if url.is_empty() {
                warn!("{API_URL_VAR} is empty, keeping {}", self.api_base_url);
            } else {
                info!("{API_URL_VAR} set, using {url}");
                self.api_base_url = url;
            }
        }

        if let Some(timeout) = parse_override::<u64>(&lookup, TIMEOUT_VAR) {
            self.http_timeout_secs = timeout;
        }
    }
}

fn parse_override<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T::Err: Display,
{
    let raw = lookup(key)?;
    raw.trim()
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value {raw:?}: {e}");
        })
        .ok()
}
