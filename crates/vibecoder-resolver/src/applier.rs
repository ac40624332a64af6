//! Host-side theme application
//!
//! An [`Applier`] performs the visible side effect of switching themes. The
//! editor host stores the theme's label in its settings; the showcase app
//! keeps the active theme in memory.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use vibecoder_themes::Theme;

use crate::error::ApplyError;

/// Setting under which the editor host keeps its color theme
pub const COLOR_THEME_SETTING: &str = "workbench.colorTheme";

/// Makes a theme visible in the host
///
/// Implementations must be idempotent: applying the active theme again is
/// harmless.
#[async_trait]
pub trait Applier: Send + Sync {
    async fn apply(&self, theme: &Theme) -> Result<(), ApplyError>;
}

/// Host-provided persistent settings
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ApplyError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), ApplyError>;
}

/// Applies themes by writing their host label into a settings store
#[derive(Debug)]
pub struct SettingsApplier<S> {
    store: S,
}

impl<S: SettingsStore> SettingsApplier<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait]
impl<S: SettingsStore> Applier for SettingsApplier<S> {
    async fn apply(&self, theme: &Theme) -> Result<(), ApplyError> {
        let label = theme.host_label();
        if self.store.get(COLOR_THEME_SETTING).await?.as_deref() == Some(label.as_str()) {
            debug!("Host already has {} set", label);
            return Ok(());
        }
        self.store.set(COLOR_THEME_SETTING, &label).await
    }
}

/// In-process settings store
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ApplyError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ApplyError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Keeps the applied theme in memory, as a UI context would
#[derive(Debug, Default)]
pub struct MemoryApplier {
    current: RwLock<Option<Theme>>,
}

impl MemoryApplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> Option<Theme> {
        self.current.read().await.clone()
    }
}

#[async_trait]
impl Applier for MemoryApplier {
    async fn apply(&self, theme: &Theme) -> Result<(), ApplyError> {
        *self.current.write().await = Some(theme.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use vibecoder_themes::ThemeRegistry;

    use super::*;

    #[derive(Default)]
    struct CountingStore {
        inner: MemorySettingsStore,
        writes: AtomicUsize,
    }

    #[async_trait]
    impl SettingsStore for CountingStore {
        async fn get(&self, key: &str) -> Result<Option<String>, ApplyError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), ApplyError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value).await
        }
    }

    #[tokio::test]
    async fn test_settings_applier_writes_host_label() {
        let registry = ThemeRegistry::default();
        let applier = SettingsApplier::new(MemorySettingsStore::new());

        applier.apply(registry.require("night-owl").unwrap()).await.unwrap();

        assert_eq!(
            applier.store().get(COLOR_THEME_SETTING).await.unwrap(),
            Some("Vibe: Night Owl".to_string())
        );
    }

    #[tokio::test]
    async fn test_settings_applier_skips_redundant_write() {
        let registry = ThemeRegistry::default();
        let applier = SettingsApplier::new(CountingStore::default());
        let theme = registry.require("python-zen").unwrap();

        applier.apply(theme).await.unwrap();
        applier.apply(theme).await.unwrap();

        assert_eq!(applier.store().writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_memory_applier() {
        let registry = ThemeRegistry::default();
        let applier = MemoryApplier::new();
        assert!(applier.current().await.is_none());

        applier.apply(registry.fallback()).await.unwrap();
        assert_eq!(applier.current().await.unwrap().key, "default-dark");
    }
}
