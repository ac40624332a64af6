//! Core configuration types

use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use vibecoder_themes::LanguagePreset;

use crate::error::ConfigError;

pub const DEFAULT_UPDATE_INTERVAL_MINUTES: u64 = 5;

/// Longest accepted recheck interval, one day
pub const MAX_UPDATE_INTERVAL_MINUTES: u64 = 24 * 60;

/// Recheck period of the showcase profile, independent of configuration
pub const SHOWCASE_RECHECK_INTERVAL: Duration = Duration::from_secs(60);

/// VibeCoder configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VibeConfig {
    /// Switch themes by the active editor's language
    pub enable_language_trigger: bool,
    /// Switch themes by time of day
    pub enable_time_trigger: bool,
    /// Minutes between periodic rechecks
    pub update_interval_minutes: u64,
    /// Diagnostic output level
    pub log_level: LogLevel,
    /// Which consumer variant to behave as
    pub profile: Profile,
    /// Optional custom registry definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub themes_file: Option<PathBuf>,
}

impl Default for VibeConfig {
    fn default() -> Self {
        Self {
            enable_language_trigger: true,
            enable_time_trigger: true,
            update_interval_minutes: DEFAULT_UPDATE_INTERVAL_MINUTES,
            log_level: LogLevel::default(),
            profile: Profile::default(),
            themes_file: None,
        }
    }
}

impl VibeConfig {
    /// Period of the recheck timer, or `None` when no timer should run
    pub fn recheck_interval(&self) -> Option<Duration> {
        if !self.enable_time_trigger {
            return None;
        }
        Some(match self.profile {
            Profile::Editor => {
                let minutes = self
                    .update_interval_minutes
                    .clamp(1, MAX_UPDATE_INTERVAL_MINUTES);
                Duration::from_secs(minutes * 60)
            }
            Profile::Showcase => SHOWCASE_RECHECK_INTERVAL,
        })
    }

    pub fn language_preset(&self) -> LanguagePreset {
        self.profile.language_preset()
    }
}

/// Diagnostic output level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(ConfigError::Parse(format!("Unknown log level: {}", other))),
        }
    }
}

/// Consumer variant
///
/// `editor` mirrors the editor extension: grouped language table and a
/// configurable recheck interval. `showcase` mirrors the demo app: one theme
/// per language and a fixed one-minute recheck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Editor,
    Showcase,
}

impl Profile {
    pub fn language_preset(&self) -> LanguagePreset {
        match self {
            Profile::Editor => LanguagePreset::Grouped,
            Profile::Showcase => LanguagePreset::PerLanguage,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Editor => "editor",
            Profile::Showcase => "showcase",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "editor" => Ok(Profile::Editor),
            "showcase" => Ok(Profile::Showcase),
            other => Err(ConfigError::Parse(format!("Unknown profile: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VibeConfig::default();
        assert!(config.enable_language_trigger);
        assert!(config.enable_time_trigger);
        assert_eq!(config.update_interval_minutes, 5);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.profile, Profile::Editor);
    }

    #[test]
    fn test_recheck_interval_editor() {
        let config = VibeConfig {
            update_interval_minutes: 3,
            ..Default::default()
        };
        assert_eq!(config.recheck_interval(), Some(Duration::from_secs(180)));
    }

    #[test]
    fn test_recheck_interval_is_capped() {
        let config = VibeConfig {
            update_interval_minutes: u64::MAX,
            ..Default::default()
        };
        assert_eq!(
            config.recheck_interval(),
            Some(Duration::from_secs(MAX_UPDATE_INTERVAL_MINUTES * 60))
        );
    }

    #[test]
    fn test_recheck_interval_showcase_ignores_minutes() {
        let config = VibeConfig {
            update_interval_minutes: 30,
            profile: Profile::Showcase,
            ..Default::default()
        };
        assert_eq!(config.recheck_interval(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_no_timer_without_time_trigger() {
        let config = VibeConfig {
            enable_time_trigger: false,
            ..Default::default()
        };
        assert_eq!(config.recheck_interval(), None);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("OFF".parse::<LogLevel>().unwrap(), LogLevel::Off);
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_profile_presets() {
        assert_eq!(Profile::Editor.language_preset(), LanguagePreset::Grouped);
        assert_eq!(Profile::Showcase.language_preset(), LanguagePreset::PerLanguage);
    }
}
