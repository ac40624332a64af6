//! Custom registry loading from YAML files
//!
//! A registry file lists its themes with hex colors and names the themes used
//! for each language, time slot and the fallback:
//!
//! ```yaml
//! themes:
//!   - key: morning-calm
//!     name: Morning Calm
//!     background: "#BBDEFB"
//!     foreground: "#0D47A1"
//!     primary: "#1976D2"
//!     secondary: "#0D47A1"
//! languages:
//!   python: morning-calm
//! time_slots:
//!   morning: morning-calm
//!   afternoon: morning-calm
//!   night: morning-calm
//! fallback: morning-calm
//! ```

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::{
    registry::ThemeRegistry,
    types::{color_to_hex, parse_hex_color, Theme, ThemeColors, TimeSlots},
};

/// YAML form of a single theme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeYaml {
    pub key: String,
    pub name: String,
    pub background: String,
    pub foreground: String,
    pub primary: String,
    pub secondary: String,
}

impl ThemeYaml {
    /// Convert YAML theme to Theme struct
    pub fn to_theme(&self) -> Result<Theme> {
        let colors = ThemeColors {
            background: parse_hex_color(&self.background)
                .map_err(|e| anyhow!("{}: background: {}", self.key, e))?,
            foreground: parse_hex_color(&self.foreground)
                .map_err(|e| anyhow!("{}: foreground: {}", self.key, e))?,
            primary: parse_hex_color(&self.primary)
                .map_err(|e| anyhow!("{}: primary: {}", self.key, e))?,
            secondary: parse_hex_color(&self.secondary)
                .map_err(|e| anyhow!("{}: secondary: {}", self.key, e))?,
        };
        Ok(Theme::new(self.key.clone(), self.name.clone(), colors))
    }
}

impl From<&Theme> for ThemeYaml {
    fn from(theme: &Theme) -> Self {
        Self {
            key: theme.key.clone(),
            name: theme.name.clone(),
            background: color_to_hex(&theme.colors.background),
            foreground: color_to_hex(&theme.colors.foreground),
            primary: color_to_hex(&theme.colors.primary),
            secondary: color_to_hex(&theme.colors.secondary),
        }
    }
}

/// YAML form of a whole registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryYaml {
    pub themes: Vec<ThemeYaml>,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    pub time_slots: TimeSlots,
    pub fallback: String,
}

impl From<&ThemeRegistry> for RegistryYaml {
    fn from(registry: &ThemeRegistry) -> Self {
        Self {
            themes: registry
                .list()
                .into_iter()
                .filter_map(|key| registry.get(key))
                .map(ThemeYaml::from)
                .collect(),
            languages: registry
                .languages()
                .into_iter()
                .map(|(language, key)| (language.to_string(), key.to_string()))
                .collect(),
            time_slots: registry.time_slots().clone(),
            fallback: registry.fallback_key().to_string(),
        }
    }
}

/// Registry loader
pub struct RegistryLoader;

impl RegistryLoader {
    /// Load a registry from a YAML string
    pub fn load_from_string(content: &str) -> Result<ThemeRegistry> {
        let definition: RegistryYaml = serde_yaml::from_str(content)?;
        Self::build(definition)
    }

    /// Load a registry from a YAML file
    pub fn load_from_file(path: &Path) -> Result<ThemeRegistry> {
        if !path.exists() {
            return Err(anyhow!("Registry file not found: {}", path.display()));
        }

        if !path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
        {
            return Err(anyhow!("Registry file must be YAML format (.yaml or .yml)"));
        }

        let content = fs::read_to_string(path)?;
        let registry = Self::load_from_string(&content)?;
        tracing::debug!(
            "Loaded {} themes from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Save a registry to a YAML file
    pub fn save_to_file(registry: &ThemeRegistry, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(&RegistryYaml::from(registry))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn build(definition: RegistryYaml) -> Result<ThemeRegistry> {
        if definition.themes.is_empty() {
            return Err(anyhow!("Registry must define at least one theme"));
        }

        let themes = definition
            .themes
            .iter()
            .map(ThemeYaml::to_theme)
            .collect::<Result<Vec<_>>>()?;

        Ok(ThemeRegistry::from_parts(
            themes,
            definition.languages,
            definition.time_slots,
            definition.fallback,
        )?)
    }
}
