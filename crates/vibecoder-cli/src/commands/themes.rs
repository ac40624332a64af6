// List registered themes

use vibecoder_config::VibeConfig;
use vibecoder_themes::{Theme, ThemeRegistry};

use super::{load_registry, Command};
use crate::{error::CliResult, output::OutputStyle};

/// List themes and the rules that select them
pub struct ThemesCommand {
    pub config: VibeConfig,
}

impl ThemesCommand {
    pub fn new(config: VibeConfig) -> Self {
        Self { config }
    }
}

/// Everything that can select `theme`, e.g. `["morning", "lang:python"]`
pub fn roles(registry: &ThemeRegistry, theme: &Theme) -> Vec<String> {
    let slots = registry.time_slots();
    let mut roles: Vec<String> = [
        ("morning", &slots.morning),
        ("afternoon", &slots.afternoon),
        ("night", &slots.night),
    ]
    .into_iter()
    .filter(|(_, key)| **key == theme.key)
    .map(|(slot, _)| slot.to_string())
    .collect();

    roles.extend(
        registry
            .languages()
            .into_iter()
            .filter(|(_, key)| *key == theme.key)
            .map(|(language, _)| format!("lang:{}", language)),
    );

    if registry.fallback_key() == theme.key {
        roles.push("fallback".to_string());
    }
    roles
}

#[async_trait::async_trait]
impl Command for ThemesCommand {
    async fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::default();
        let registry = load_registry(&self.config);

        println!(
            "{}",
            style.header(&format!("Themes ({} registered)", registry.len()))
        );
        println!();

        for key in registry.list() {
            let Some(theme) = registry.get(key) else {
                continue;
            };
            let roles = roles(&registry, theme);
            println!(
                "  {} {:<20} {:<20} {}",
                style.swatch(theme),
                style.code(&theme.key),
                theme.name,
                roles.join(", ")
            );
        }

        println!();
        println!(
            "{}",
            style.info(&format!(
                "Profile: {} ({} language table)",
                self.config.profile,
                self.config.language_preset()
            ))
        );
        Ok(())
    }
}
