use super::keymap::KeyConfig;
use crate::domain::screen::SuggestionsBarPolicy;
use crate::domain::suggest::FALLBACK_QUERY;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub filters_bar: FiltersBarConfig,
    /// Query shown on the results screen when nothing was typed.
    pub fallback_query: String,
    pub keys: KeyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            filters_bar: FiltersBarConfig::default(),
            fallback_query: FALLBACK_QUERY.to_string(),
            keys: KeyConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Gap between hiding the old screen and showing the new one.
    pub transition_delay_ms: u64,
    /// Typing pause before the enter badge and divider appear.
    pub typing_delay_ms: u64,
    pub suggestion_stagger_ms: u64,
    pub result_stagger_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            transition_delay_ms: 150,
            typing_delay_ms: 100,
            suggestion_stagger_ms: 50,
            result_stagger_ms: 100,
        }
    }
}

impl TimingConfig {
    #[must_use]
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    #[must_use]
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    #[must_use]
    pub fn suggestion_stagger(&self) -> Duration {
        Duration::from_millis(self.suggestion_stagger_ms)
    }

    #[must_use]
    pub fn result_stagger(&self) -> Duration {
        Duration::from_millis(self.result_stagger_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FiltersBarConfig {
    pub suggestions: SuggestionsBarPolicy,
}

impl Config {
    /// Loads the user config, falling back to defaults when it is missing or broken.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            tracing::info!("No home directory, using default config");
            return Self::default();
        };
        if !path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("zoekbalk");
        path
    })
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
