//! Active theme ownership and change suppression

use std::sync::Arc;

use tracing::{debug, info, warn};
use vibecoder_config::VibeConfig;
use vibecoder_themes::{Theme, ThemeRegistry};

use crate::{
    applier::Applier,
    clock::Clock,
    context::{Resolution, ResolveContext, TriggerType},
    display::{DisplaySink, StatusLine},
    resolver::ThemeResolver,
    service::ThemeEvent,
};

/// The active theme and why it is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverState {
    pub theme_key: String,
    pub trigger: TriggerType,
}

/// What an apply attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The host was asked to switch and the state now points at the new theme
    Applied,
    /// The theme was already active; only the status line was refreshed
    Refreshed,
    /// The host rejected the switch; nothing changed
    Failed,
    /// The key is not registered; nothing changed
    Ignored,
}

/// Owns the resolver state and pushes changes to the host
///
/// The applier is only invoked when the resolved theme differs from the
/// active one, so periodic rechecks do not rewrite host settings.
pub struct ThemeController {
    resolver: ThemeResolver,
    config: VibeConfig,
    clock: Arc<dyn Clock>,
    applier: Arc<dyn Applier>,
    display: Arc<dyn DisplaySink>,
    state: ResolverState,
    /// Whether the host has accepted the active theme at least once
    host_synced: bool,
    language_id: Option<String>,
    resolutions: u64,
}

impl ThemeController {
    pub fn new(
        registry: ThemeRegistry,
        config: VibeConfig,
        clock: Arc<dyn Clock>,
        applier: Arc<dyn Applier>,
        display: Arc<dyn DisplaySink>,
    ) -> Self {
        let state = ResolverState {
            theme_key: registry.fallback_key().to_string(),
            trigger: TriggerType::Fallback,
        };
        Self {
            resolver: ThemeResolver::new(registry),
            config,
            clock,
            applier,
            display,
            state,
            host_synced: false,
            language_id: None,
            resolutions: 0,
        }
    }

    pub fn state(&self) -> &ResolverState {
        &self.state
    }

    pub fn active_theme(&self) -> &Theme {
        self.resolver
            .registry()
            .get(&self.state.theme_key)
            .unwrap_or_else(|| self.resolver.registry().fallback())
    }

    pub fn registry(&self) -> &ThemeRegistry {
        self.resolver.registry()
    }

    pub fn config(&self) -> &VibeConfig {
        &self.config
    }

    pub fn language_id(&self) -> Option<&str> {
        self.language_id.as_deref()
    }

    /// Number of resolutions run so far
    pub fn resolutions(&self) -> u64 {
        self.resolutions
    }

    pub fn context(&self) -> ResolveContext<'_> {
        ResolveContext {
            language_id: self.language_id.as_deref(),
            hour: self.clock.hour(),
            enable_language_trigger: self.config.enable_language_trigger,
            enable_time_trigger: self.config.enable_time_trigger,
        }
    }

    pub fn resolve(&self) -> Resolution {
        self.resolver.resolve(&self.context())
    }

    /// Resolve against the current context and apply the result
    pub async fn refresh(&mut self) -> ApplyOutcome {
        let resolution = self.resolve();
        self.resolutions += 1;
        debug!(
            "Resolved {} ({}) for language {:?}",
            resolution.theme_key, resolution.trigger, self.language_id
        );
        self.apply_if_changed(resolution).await
    }

    /// Switch to `resolution` if it differs from the active theme
    ///
    /// An unchanged theme only refreshes the status line. A failed apply
    /// leaves both the state and the status line as they were.
    pub async fn apply_if_changed(&mut self, resolution: Resolution) -> ApplyOutcome {
        let Some(theme) = self.resolver.registry().get(&resolution.theme_key).cloned() else {
            warn!("Ignoring unregistered theme {}", resolution.theme_key);
            return ApplyOutcome::Ignored;
        };

        if self.host_synced && theme.key == self.state.theme_key {
            debug!("Theme {} already active", theme.host_label());
            self.state.trigger = resolution.trigger;
            self.show(&theme);
            return ApplyOutcome::Refreshed;
        }

        info!(
            "Applying theme: {} (Trigger: {})",
            theme.host_label(),
            resolution.trigger
        );
        match self.applier.apply(&theme).await {
            Ok(()) => {
                self.state = ResolverState {
                    theme_key: theme.key.clone(),
                    trigger: resolution.trigger,
                };
                self.host_synced = true;
                self.show(&theme);
                ApplyOutcome::Applied
            }
            Err(e) => {
                debug!("Error applying theme {}: {}", theme.host_label(), e);
                ApplyOutcome::Failed
            }
        }
    }

    /// Activate a registered theme by hand
    ///
    /// The choice lasts until the next event or recheck resolves again.
    pub async fn apply_manual(&mut self, theme_key: &str) -> ApplyOutcome {
        if !self.resolver.registry().contains(theme_key) {
            debug!("Manual selection of unknown theme {} ignored", theme_key);
            return ApplyOutcome::Ignored;
        }
        self.apply_if_changed(Resolution::new(theme_key, TriggerType::Manual))
            .await
    }

    /// React to a host event
    pub async fn handle(&mut self, event: ThemeEvent) -> ApplyOutcome {
        match event {
            ThemeEvent::ActiveEditorChanged { language_id } => {
                self.language_id = language_id;
                self.refresh().await
            }
            ThemeEvent::LanguageChanged { language_id } => {
                self.language_id = Some(language_id);
                self.refresh().await
            }
            ThemeEvent::ConfigurationChanged(config) => {
                self.config = config;
                self.refresh().await
            }
            ThemeEvent::ManualSelection { theme_key } => self.apply_manual(&theme_key).await,
        }
    }

    fn show(&self, theme: &Theme) {
        self.display
            .show(theme, &StatusLine::new(theme, self.state.trigger));
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("state", &self.state)
            .field("language_id", &self.language_id)
            .field("resolutions", &self.resolutions)
            .finish()
    }
}
