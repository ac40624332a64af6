// One-shot theme resolution

use vibecoder_config::VibeConfig;
use vibecoder_resolver::{Clock, Resolution, ResolveContext, ThemeResolver};

use super::{build_clock, load_registry, Command};
use crate::{error::CliResult, output::OutputStyle};

/// Show which theme would be active for a context
pub struct ResolveCommand {
    pub config: VibeConfig,
    pub language: Option<String>,
    pub hour: Option<u32>,
}

impl ResolveCommand {
    pub fn new(config: VibeConfig, language: Option<String>, hour: Option<u32>) -> Self {
        Self {
            config,
            language,
            hour,
        }
    }

    /// Resolve without touching any host
    pub fn resolve(&self, resolver: &ThemeResolver) -> CliResult<Resolution> {
        let hour = build_clock(self.hour)?.hour();
        let context = ResolveContext {
            language_id: self.language.as_deref(),
            hour,
            enable_language_trigger: self.config.enable_language_trigger,
            enable_time_trigger: self.config.enable_time_trigger,
        };
        Ok(resolver.resolve(&context))
    }
}

#[async_trait::async_trait]
impl Command for ResolveCommand {
    async fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::default();
        let resolver = ThemeResolver::new(load_registry(&self.config));
        let resolution = self.resolve(&resolver)?;
        let theme = resolver
            .registry()
            .get(&resolution.theme_key)
            .unwrap_or_else(|| resolver.registry().fallback());

        println!("{}", style.header("Resolved theme"));
        println!("  key:     {}", style.code(&theme.key));
        println!("  name:    {}", style.themed(&format!(" {} ", theme.name), theme));
        println!("  label:   {}", theme.host_label());
        println!("  trigger: {}", resolution.trigger);
        println!("  colors:  {}", style.swatch(theme));

        Ok(())
    }
}
