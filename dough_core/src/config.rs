//! Configuration file support for the dough calculator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/pizza-dough/config.toml`.

use crate::{DoughInput, Error, Result, Temperature, TemperatureUnit};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Dataset location
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

/// Default dough parameters used when not given on the command line
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_count")]
    pub count: u32,

    #[serde(default = "default_weight")]
    pub weight: f64,

    #[serde(default = "default_hydration")]
    pub hydration: f64,

    #[serde(default = "default_salt_percentage")]
    pub salt_percentage: f64,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default)]
    pub unit: TemperatureUnit,

    #[serde(default = "default_hours")]
    pub hours: i64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            weight: default_weight(),
            hydration: default_hydration(),
            salt_percentage: default_salt_percentage(),
            temperature: default_temperature(),
            unit: TemperatureUnit::default(),
            hours: default_hours(),
        }
    }
}

impl DefaultsConfig {
    /// Dough input built from the configured defaults
    pub fn to_input(&self) -> DoughInput {
        DoughInput {
            count: self.count,
            weight: self.weight,
            hydration: self.hydration,
            salt_percentage: self.salt_percentage,
            temperature: Temperature::new(self.unit, self.temperature),
            hours: self.hours,
        }
    }
}

// Default value functions
fn default_dataset_path() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".local/share"))
            .unwrap_or_else(|| PathBuf::from("."))
    });
    base.join("pizza-dough").join("yeast-model.csv")
}

fn default_count() -> u32 {
    4
}

fn default_weight() -> f64 {
    270.0
}

fn default_hydration() -> f64 {
    65.0
}

fn default_salt_percentage() -> f64 {
    3.2
}

fn default_temperature() -> f64 {
    18.0
}

fn default_hours() -> i64 {
    24
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from("."))
        });
        base.join("pizza-dough").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
