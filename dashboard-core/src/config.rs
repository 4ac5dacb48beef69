use anyhow::{Context, Result, anyhow, ensure};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Key value that signals "not configured". A config carrying this value (or
/// no key at all) routes the dashboard into demo mode instead of issuing live
/// calls that are certain to fail.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Environment variables consulted for the key, in precedence order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["OPENWEATHER_API_KEY", "API_KEY"];

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_api_key() -> String {
    PLACEHOLDER_API_KEY.to_string()
}

/// The provider reports forecast entries every 3 hours on the free tier.
const fn default_forecast_step_hours() -> u8 {
    3
}

/// Unit system passed to the provider as the `units` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    /// The provider's Kelvin-based default.
    Standard,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    pub fn wind_speed_suffix(&self) -> &'static str {
        match self {
            Units::Metric | Units::Standard => "m/s",
            Units::Imperial => "mph",
        }
    }
}

/// Where the effective API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeySource {
    /// No usable key anywhere; the placeholder is in effect.
    #[default]
    Placeholder,
    /// Key read from the config file.
    File,
    /// Key read from the process environment.
    Environment,
}

/// Operating mode, decided synchronously once from the loaded config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Live,
    Demo,
}

/// Dashboard configuration.
///
/// Loaded from a TOML file under the platform config directory, with the API
/// key overridable from the process environment for deployed contexts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_key")]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub units: Units,

    #[serde(default = "default_lang")]
    pub lang: String,

    /// Hours between consecutive forecast entries. The one-entry-per-day
    /// sampling stride is derived from this; it must divide 24 evenly.
    #[serde(default = "default_forecast_step_hours")]
    pub forecast_step_hours: u8,

    #[serde(skip)]
    pub key_source: KeySource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
            units: Units::default(),
            lang: default_lang(),
            forecast_step_hours: default_forecast_step_hours(),
            key_source: KeySource::default(),
        }
    }
}

impl Config {
    /// Load config from disk and the environment, falling back to defaults
    /// (which select demo mode) when nothing is configured.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;

        let mut cfg = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            Self::from_toml_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            // First run: no config file.
            Self::default()
        };

        cfg.apply_env(|name| std::env::var(name).ok());
        cfg.validate()?;

        Ok(cfg)
    }

    /// Parse a TOML document into a config, marking the key source.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut cfg: Config =
            toml::from_str(contents).context("Failed to parse configuration TOML")?;

        if cfg.has_usable_key() {
            cfg.key_source = KeySource::File;
        }

        Ok(cfg)
    }

    /// Apply environment overrides for the API key. The lookup is injected so
    /// tests do not depend on the process environment.
    pub fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) {
        for name in API_KEY_ENV_VARS {
            if let Some(key) = get(name) {
                if !key.is_empty() && key != PLACEHOLDER_API_KEY {
                    self.api_key = key;
                    self.key_source = KeySource::Environment;
                    return;
                }
            }
        }
    }

    /// Reject configs whose forecast step cannot yield one entry per day.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.forecast_step_hours > 0 && 24 % self.forecast_step_hours == 0,
            "forecast_step_hours must divide 24 evenly, got {}",
            self.forecast_step_hours
        );
        Ok(())
    }

    fn has_usable_key(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != PLACEHOLDER_API_KEY
    }

    /// Decide the operating mode. Evaluated once at startup; not a
    /// timing-based check.
    pub fn mode(&self) -> Mode {
        if self.has_usable_key() { Mode::Live } else { Mode::Demo }
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-dashboard", "weather-dashboard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
