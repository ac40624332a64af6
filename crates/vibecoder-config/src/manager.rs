//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use tracing::{debug, warn};

use crate::{
    error::{ConfigError, Result},
    types::{LogLevel, Profile, VibeConfig, MAX_UPDATE_INTERVAL_MINUTES},
};

/// Environment variable prefix, e.g. `VIBECODER_ENABLE_TIME_TRIGGER`
pub const ENV_PREFIX: &str = "VIBECODER";

/// Configuration manager
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Whether the file must exist
    required: bool,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a manager reading the default config file, if present
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            required: false,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Create a manager reading an explicit config file, which must exist
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            required: true,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Set whether the config file must exist
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Override the environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vibecoder")
            .join("config.toml")
    }

    /// Load configuration from file and environment
    ///
    /// Each option is read on its own; values that are missing or malformed
    /// keep their defaults.
    pub fn load(&self) -> Result<VibeConfig> {
        if self.required && !self.config_path.exists() {
            return Err(ConfigError::NotFound(
                self.config_path.display().to_string(),
            ));
        }

        let built = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(Environment::with_prefix(&self.env_prefix))
            .build();

        let settings = match built {
            Ok(settings) => settings,
            Err(e) if self.required => return Err(ConfigError::Parse(e.to_string())),
            Err(e) => {
                warn!(
                    "Ignoring unreadable config file {}: {}",
                    self.config_path.display(),
                    e
                );
                return Ok(VibeConfig::default());
            }
        };

        Ok(Self::from_settings(&settings))
    }

    /// Extract a configuration from already layered settings
    pub fn from_settings(settings: &Config) -> VibeConfig {
        let defaults = VibeConfig::default();

        let enable_language_trigger = read_or_default(
            settings,
            "enable_language_trigger",
            defaults.enable_language_trigger,
            |s, k| s.get_bool(k).map_err(ReadError::from),
        );
        let enable_time_trigger = read_or_default(
            settings,
            "enable_time_trigger",
            defaults.enable_time_trigger,
            |s, k| s.get_bool(k).map_err(ReadError::from),
        );
        let update_interval_minutes = read_or_default(
            settings,
            "update_interval_minutes",
            defaults.update_interval_minutes,
            |s, k| {
                let minutes = s.get_int(k)?;
                u64::try_from(minutes)
                    .ok()
                    .filter(|m| (1..=MAX_UPDATE_INTERVAL_MINUTES).contains(m))
                    .ok_or_else(|| {
                        ReadError::Invalid(format!(
                            "{} is not between 1 and {} minutes",
                            minutes, MAX_UPDATE_INTERVAL_MINUTES
                        ))
                    })
            },
        );
        let log_level = read_or_default(settings, "log_level", defaults.log_level, |s, k| {
            let raw = s.get_string(k)?;
            raw.parse::<LogLevel>()
                .map_err(|e| ReadError::Invalid(e.to_string()))
        });
        let profile = read_or_default(settings, "profile", defaults.profile, |s, k| {
            let raw = s.get_string(k)?;
            raw.parse::<Profile>()
                .map_err(|e| ReadError::Invalid(e.to_string()))
        });
        let themes_file = match settings.get_string("themes_file") {
            Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => None,
        };

        VibeConfig {
            enable_language_trigger,
            enable_time_trigger,
            update_interval_minutes,
            log_level,
            profile,
            themes_file,
        }
    }

    /// Render a configuration as TOML
    pub fn to_toml(config: &VibeConfig) -> Result<String> {
        Ok(toml::to_string(config)?)
    }

    /// Save configuration to the manager's file
    pub fn save(&self, config: &VibeConfig) -> Result<()> {
        let content = Self::to_toml(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, content)?;
        debug!("Saved configuration to {}", self.config_path.display());
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

enum ReadError {
    Missing,
    Invalid(String),
}

impl From<config::ConfigError> for ReadError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(_) => ReadError::Missing,
            other => ReadError::Invalid(other.to_string()),
        }
    }
}

fn read_or_default<T, F>(settings: &Config, key: &str, default: T, read: F) -> T
where
    T: std::fmt::Debug,
    F: FnOnce(&Config, &str) -> std::result::Result<T, ReadError>,
{
    match read(settings, key) {
        Ok(value) => value,
        Err(ReadError::Missing) => default,
        Err(ReadError::Invalid(e)) => {
            warn!("Invalid value for {}, using default {:?}: {}", key, default, e);
            default
        }
    }
}
