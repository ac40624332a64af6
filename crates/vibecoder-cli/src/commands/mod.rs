// Command handlers for vibecoder CLI

pub mod config;
pub mod resolve;
pub mod themes;
pub mod watch;

use std::sync::Arc;

pub use config::ConfigCommand;
pub use resolve::ResolveCommand;
pub use themes::ThemesCommand;
use tracing::warn;
use vibecoder_config::VibeConfig;
use vibecoder_resolver::{Clock, FixedClock, SystemClock};
use vibecoder_themes::{RegistryLoader, ThemeRegistry};
pub use watch::WatchCommand;

use crate::error::{CliError, CliResult};

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}

/// Build the theme registry for a configuration
///
/// A custom registry file that cannot be loaded is reported and replaced by
/// the built-in preset for the configured profile.
pub fn load_registry(config: &VibeConfig) -> ThemeRegistry {
    let preset = config.language_preset();
    let Some(path) = &config.themes_file else {
        return ThemeRegistry::builtin(preset);
    };

    match RegistryLoader::load_from_file(path) {
        Ok(registry) => registry,
        Err(e) => {
            warn!(
                "Failed to load themes from {}: {}; using built-in {} themes",
                path.display(),
                e,
                preset
            );
            ThemeRegistry::builtin(preset)
        }
    }
}

/// Clock pinned to `hour` when given, local time otherwise
pub fn build_clock(hour: Option<u32>) -> CliResult<Arc<dyn Clock>> {
    match hour {
        Some(hour) if hour > 23 => Err(CliError::InvalidArgument {
            message: format!("hour must be between 0 and 23, got {}", hour),
        }),
        Some(hour) => Ok(Arc::new(FixedClock::new(hour))),
        None => Ok(Arc::new(SystemClock)),
    }
}
