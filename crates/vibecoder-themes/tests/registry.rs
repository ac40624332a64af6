use vibecoder_themes::*;

#[test]
fn test_default_registry_is_grouped() {
    let registry = ThemeRegistry::default();
    assert_eq!(registry.language_theme("javascript"), Some("webdev-flow"));
    assert_eq!(registry.language_theme("css"), Some("webdev-flow"));
}

#[test]
fn test_python_zen_colors() {
    let registry = ThemeRegistry::default();
    let theme = registry.require("python-zen").unwrap();
    assert_eq!(theme.name, "Python Zen");
    assert_eq!(
        theme.colors.background,
        ratatui::style::Color::Rgb(0x2E, 0x34, 0x40)
    );
}

#[test]
fn test_time_slot_names() {
    let registry = ThemeRegistry::default();
    let slots = registry.time_slots();
    assert_eq!(registry.get(&slots.morning).unwrap().name, "Morning Calm");
    assert_eq!(registry.get(&slots.afternoon).unwrap().name, "Afternoon Focus");
    assert_eq!(registry.get(&slots.night).unwrap().name, "Night Owl");
}

#[test]
fn test_presets_share_themes() {
    let grouped = ThemeRegistry::builtin(LanguagePreset::Grouped);
    let per_language = ThemeRegistry::builtin(LanguagePreset::PerLanguage);
    assert_eq!(grouped.list(), per_language.list());
    assert_ne!(grouped.languages(), per_language.languages());
}
