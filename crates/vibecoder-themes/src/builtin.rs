//! Built-in themes and language tables

use crate::types::{LanguagePreset, Theme, ThemeColors, TimeSlots};

pub const MORNING_CALM: &str = "morning-calm";
pub const AFTERNOON_FOCUS: &str = "afternoon-focus";
pub const NIGHT_OWL: &str = "night-owl";
pub const DEFAULT_DARK: &str = "default-dark";
pub const PYTHON_ZEN: &str = "python-zen";
pub const WEBDEV_FLOW: &str = "webdev-flow";

/// (key, display name, background, foreground, primary, secondary)
const THEMES: &[(&str, &str, u32, u32, u32, u32)] = &[
    (MORNING_CALM, "Morning Calm", 0xBBDEFB, 0x0D47A1, 0x1976D2, 0x0D47A1),
    (AFTERNOON_FOCUS, "Afternoon Focus", 0xFFE0B2, 0xEF6C00, 0xFF9800, 0xEF6C00),
    (NIGHT_OWL, "Night Owl", 0x0D47A1, 0xE3F2FD, 0x1976D2, 0xE3F2FD),
    (DEFAULT_DARK, "Default Dark", 0x1E1E1E, 0xD4D4D4, 0x569CD6, 0x9CDCFE),
    (PYTHON_ZEN, "Python Zen", 0x2E3440, 0x88C0D0, 0x81A1C1, 0x8FBCBB),
    (WEBDEV_FLOW, "WebDev Flow", 0x1E1E2E, 0xF7DF1E, 0x61DAFB, 0xE34C26),
    ("javascript-jive", "JavaScript Jive", 0x282C34, 0xF7DF1E, 0xE5C100, 0xF7DF1E),
    ("typescript-tide", "TypeScript Tide", 0x007ACC, 0xFFFFFF, 0x005A9E, 0xFFFFFF),
    ("html-hue", "HTML Hue", 0xE34C26, 0xFFFFFF, 0xBF360C, 0xFFFFFF),
    ("css-cascade", "CSS Cascade", 0x264DE4, 0xFFFFFF, 0x1A237E, 0xFFFFFF),
    ("rust-rush", "Rust Rush", 0xF5F5F5, 0xBF360C, 0xFF7043, 0xBF360C),
    ("go-groove", "Go Groove", 0xE3F2FD, 0x0D47A1, 0x1976D2, 0x0D47A1),
    ("java-jive", "Java Jive", 0xFFF3E0, 0xE65100, 0xFFB74D, 0xE65100),
];

const GROUPED_LANGUAGES: &[(&str, &str)] = &[
    ("python", PYTHON_ZEN),
    ("javascript", WEBDEV_FLOW),
    ("typescript", WEBDEV_FLOW),
    ("html", WEBDEV_FLOW),
    ("css", WEBDEV_FLOW),
];

const PER_LANGUAGE_LANGUAGES: &[(&str, &str)] = &[
    ("python", PYTHON_ZEN),
    ("javascript", "javascript-jive"),
    ("typescript", "typescript-tide"),
    ("html", "html-hue"),
    ("css", "css-cascade"),
    ("rust", "rust-rush"),
    ("go", "go-groove"),
    ("java", "java-jive"),
];

/// Every built-in theme, in declaration order
pub fn themes() -> Vec<Theme> {
    THEMES
        .iter()
        .map(|&(key, name, bg, fg, primary, secondary)| {
            Theme::new(key, name, ThemeColors::from_hex(bg, fg, primary, secondary))
        })
        .collect()
}

/// Language id to theme key table for a preset
pub fn language_table(preset: LanguagePreset) -> &'static [(&'static str, &'static str)] {
    match preset {
        LanguagePreset::Grouped => GROUPED_LANGUAGES,
        LanguagePreset::PerLanguage => PER_LANGUAGE_LANGUAGES,
    }
}

pub fn time_slots() -> TimeSlots {
    TimeSlots {
        morning: MORNING_CALM.to_string(),
        afternoon: AFTERNOON_FOCUS.to_string(),
        night: NIGHT_OWL.to_string(),
    }
}
