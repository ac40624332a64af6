//! Core theme types and data structures

use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// Prefix the editor host uses for VibeCoder color themes
pub const HOST_LABEL_PREFIX: &str = "Vibe: ";

/// A complete theme definition
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Registry key (e.g. `python-zen`)
    pub key: String,
    /// Human readable name (e.g. `Python Zen`)
    pub name: String,
    /// Color palette
    pub colors: ThemeColors,
}

impl Theme {
    pub fn new(key: impl Into<String>, name: impl Into<String>, colors: ThemeColors) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            colors,
        }
    }

    /// Label under which the editor host knows this theme
    pub fn host_label(&self) -> String {
        format!("{}{}", HOST_LABEL_PREFIX, self.name)
    }

    /// Validate the theme data
    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(ThemeError::ValidationError(
                "Theme key cannot be empty".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(ThemeError::ValidationError(format!(
                "Theme '{}' has an empty display name",
                self.key
            )));
        }
        Ok(())
    }
}

/// The four display colors every theme carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub secondary: Color,
}

impl ThemeColors {
    /// Build a palette from packed `0xRRGGBB` values
    pub const fn from_hex(background: u32, foreground: u32, primary: u32, secondary: u32) -> Self {
        Self {
            background: rgb(background),
            foreground: rgb(foreground),
            primary: rgb(primary),
            secondary: rgb(secondary),
        }
    }
}

/// Unpack a `0xRRGGBB` value into a ratatui color
pub const fn rgb(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

/// Parse a `#rrggbb` string into a ratatui color
pub fn parse_hex_color(hex: &str) -> Result<Color> {
    if let Some(digits) = hex.strip_prefix('#') {
        if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            if let Ok(value) = u32::from_str_radix(digits, 16) {
                return Ok(rgb(value));
            }
        }
    }
    Err(ThemeError::InvalidFormat(format!("Invalid hex color: {}", hex)))
}

/// Convert a color to a `#rrggbb` string
pub fn color_to_hex(color: &Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        _ => "#000000".to_string(),
    }
}

/// Theme keys for the three time-of-day buckets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlots {
    /// Active from 06:00 until noon
    pub morning: String,
    /// Active from noon until 18:00
    pub afternoon: String,
    /// Active from 18:00 until 06:00
    pub night: String,
}

impl TimeSlots {
    pub fn keys(&self) -> [&str; 3] {
        [&self.morning, &self.afternoon, &self.night]
    }
}

/// Which built-in language table a consumer uses
///
/// The editor extension groups the web languages under one theme while the
/// showcase app gives every language its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LanguagePreset {
    #[default]
    Grouped,
    PerLanguage,
}

impl LanguagePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguagePreset::Grouped => "grouped",
            LanguagePreset::PerLanguage => "per-language",
        }
    }
}

impl fmt::Display for LanguagePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LanguagePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "grouped" => Ok(LanguagePreset::Grouped),
            "per-language" | "per_language" => Ok(LanguagePreset::PerLanguage),
            other => Err(ThemeError::InvalidFormat(format!(
                "Unknown language preset: {}",
                other
            ))),
        }
    }
}
