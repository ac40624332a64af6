//! Theme registry for looking up themes and their triggers
//!
//! A registry is built once and then only read. Every key it hands out
//! (language mappings, time slots, fallback) is guaranteed to be registered,
//! so callers never have to deal with a dangling theme reference.

use std::{collections::HashMap, sync::Arc};

use crate::{
    builtin,
    error::{Result, ThemeError},
    types::{LanguagePreset, Theme, TimeSlots},
};

/// Immutable theme registry
#[derive(Clone)]
pub struct ThemeRegistry {
    /// Themes by key
    themes: Arc<HashMap<String, Theme>>,
    /// Lowercased language id to theme key
    languages: Arc<HashMap<String, String>>,
    /// Time-of-day theme keys
    time_slots: TimeSlots,
    /// Theme used when no trigger applies
    fallback: String,
}

impl ThemeRegistry {
    /// Build the built-in registry with the given language table
    pub fn builtin(preset: LanguagePreset) -> Self {
        let themes = builtin::themes()
            .into_iter()
            .map(|theme| (theme.key.clone(), theme))
            .collect();
        let languages = builtin::language_table(preset)
            .iter()
            .map(|(language, key)| (language.to_string(), key.to_string()))
            .collect();

        Self {
            themes: Arc::new(themes),
            languages: Arc::new(languages),
            time_slots: builtin::time_slots(),
            fallback: builtin::DEFAULT_DARK.to_string(),
        }
    }

    /// Build a registry from parts, checking that every referenced key exists
    pub fn from_parts(
        themes: Vec<Theme>,
        languages: impl IntoIterator<Item = (String, String)>,
        time_slots: TimeSlots,
        fallback: String,
    ) -> Result<Self> {
        let mut by_key = HashMap::with_capacity(themes.len());
        for theme in themes {
            theme.validate()?;
            if by_key.contains_key(&theme.key) {
                return Err(ThemeError::DuplicateKey(theme.key));
            }
            by_key.insert(theme.key.clone(), theme);
        }

        let mut table = HashMap::new();
        for (language, key) in languages {
            let language = language.trim().to_lowercase();
            if language.is_empty() {
                return Err(ThemeError::ValidationError(
                    "Language id cannot be empty".to_string(),
                ));
            }
            if !by_key.contains_key(&key) {
                return Err(ThemeError::ValidationError(format!(
                    "Language '{}' maps to unregistered theme '{}'",
                    language, key
                )));
            }
            table.insert(language, key);
        }

        for key in time_slots.keys() {
            if !by_key.contains_key(key) {
                return Err(ThemeError::ValidationError(format!(
                    "Time slot refers to unregistered theme '{}'",
                    key
                )));
            }
        }

        if !by_key.contains_key(&fallback) {
            return Err(ThemeError::ValidationError(format!(
                "Fallback theme '{}' is not registered",
                fallback
            )));
        }

        Ok(Self {
            themes: Arc::new(by_key),
            languages: Arc::new(table),
            time_slots,
            fallback,
        })
    }

    /// Get a theme by key
    pub fn get(&self, key: &str) -> Option<&Theme> {
        self.themes.get(key)
    }

    /// Get a theme by key, failing if it is not registered
    pub fn require(&self, key: &str) -> Result<&Theme> {
        self.get(key)
            .ok_or_else(|| ThemeError::NotFound(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.themes.contains_key(key)
    }

    /// Theme key for a language id (case-insensitive exact match)
    pub fn language_theme(&self, language_id: &str) -> Option<&str> {
        self.languages
            .get(&language_id.to_lowercase())
            .map(String::as_str)
    }

    pub fn time_slots(&self) -> &TimeSlots {
        &self.time_slots
    }

    pub fn fallback_key(&self) -> &str {
        &self.fallback
    }

    pub fn fallback(&self) -> &Theme {
        // from_parts and builtin both guarantee the fallback is registered
        &self.themes[&self.fallback]
    }

    /// All theme keys, sorted
    pub fn list(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.themes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Language table entries, sorted by language id
    pub fn languages(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .languages
            .iter()
            .map(|(language, key)| (language.as_str(), key.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin(LanguagePreset::default())
    }
}

impl std::fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("theme_count", &self.len())
            .field("language_count", &self.languages.len())
            .field("fallback", &self.fallback)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ThemeColors;

    fn theme(key: &str) -> Theme {
        Theme::new(key, key.to_uppercase(), ThemeColors::from_hex(0, 0xffffff, 0, 0))
    }

    fn slots(key: &str) -> TimeSlots {
        TimeSlots {
            morning: key.to_string(),
            afternoon: key.to_string(),
            night: key.to_string(),
        }
    }

    #[test]
    fn test_builtin_grouped() {
        let registry = ThemeRegistry::builtin(LanguagePreset::Grouped);
        assert_eq!(registry.language_theme("python"), Some("python-zen"));
        assert_eq!(registry.language_theme("typescript"), Some("webdev-flow"));
        assert_eq!(registry.language_theme("rust"), None);
        assert_eq!(registry.fallback_key(), "default-dark");
    }

    #[test]
    fn test_builtin_per_language() {
        let registry = ThemeRegistry::builtin(LanguagePreset::PerLanguage);
        assert_eq!(registry.language_theme("typescript"), Some("typescript-tide"));
        assert_eq!(registry.language_theme("rust"), Some("rust-rush"));
        assert_eq!(registry.language_theme("ocaml"), None);
    }

    #[test]
    fn test_language_lookup_is_case_insensitive() {
        let registry = ThemeRegistry::builtin(LanguagePreset::Grouped);
        assert_eq!(registry.language_theme("PyThOn"), Some("python-zen"));
        assert_eq!(registry.language_theme("HTML"), Some("webdev-flow"));
        assert_eq!(registry.language_theme(" python"), None);
    }

    #[test]
    fn test_builtin_references_resolve() {
        for preset in [LanguagePreset::Grouped, LanguagePreset::PerLanguage] {
            let registry = ThemeRegistry::builtin(preset);
            for (_, key) in registry.languages() {
                assert!(registry.contains(key));
            }
            for key in registry.time_slots().keys() {
                assert!(registry.contains(key));
            }
            assert_eq!(registry.fallback().name, "Default Dark");
        }
    }

    #[test]
    fn test_from_parts_rejects_unknown_language_target() {
        let result = ThemeRegistry::from_parts(
            vec![theme("a")],
            vec![("python".to_string(), "missing".to_string())],
            slots("a"),
            "a".to_string(),
        );
        assert!(matches!(result, Err(ThemeError::ValidationError(_))));
    }

    #[test]
    fn test_from_parts_rejects_unknown_fallback() {
        let result =
            ThemeRegistry::from_parts(vec![theme("a")], Vec::new(), slots("a"), "b".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_from_parts_rejects_duplicate_keys() {
        let result = ThemeRegistry::from_parts(
            vec![theme("a"), theme("a")],
            Vec::new(),
            slots("a"),
            "a".to_string(),
        );
        assert!(matches!(result, Err(ThemeError::DuplicateKey(key)) if key == "a"));
    }

    #[test]
    fn test_from_parts_lowercases_languages() {
        let registry = ThemeRegistry::from_parts(
            vec![theme("a"), theme("b")],
            vec![("OCaml".to_string(), "b".to_string())],
            slots("a"),
            "a".to_string(),
        )
        .unwrap();
        assert_eq!(registry.language_theme("ocaml"), Some("b"));
        assert_eq!(registry.languages(), vec![("ocaml", "b")]);
    }

    #[test]
    fn test_require_missing() {
        let registry = ThemeRegistry::default();
        assert!(matches!(
            registry.require("nonexistent-theme-xyz"),
            Err(ThemeError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_is_sorted() {
        let registry = ThemeRegistry::default();
        let keys = registry.list();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys.len(), registry.len());
    }
}
