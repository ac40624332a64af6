//! Trigger priority policy

use vibecoder_themes::ThemeRegistry;

use crate::context::{Resolution, ResolveContext, TimeOfDay, TriggerType};

/// Picks the theme for a context: language first, then time, then fallback
///
/// Resolution is total. An unknown language simply falls through to the time
/// trigger, and every key returned is registered.
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    registry: ThemeRegistry,
}

impl ThemeResolver {
    pub fn new(registry: ThemeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn resolve(&self, context: &ResolveContext<'_>) -> Resolution {
        if context.enable_language_trigger {
            if let Some(key) = context
                .language_id
                .and_then(|language| self.registry.language_theme(language))
            {
                return Resolution::new(key, TriggerType::Language);
            }
        }

        if context.enable_time_trigger {
            return Resolution::new(self.time_theme(context.hour), TriggerType::Time);
        }

        Resolution::new(self.registry.fallback_key(), TriggerType::Fallback)
    }

    /// Theme key for the bucket containing `hour`
    pub fn time_theme(&self, hour: u32) -> &str {
        let slots = self.registry.time_slots();
        match TimeOfDay::from_hour(hour) {
            TimeOfDay::Morning => &slots.morning,
            TimeOfDay::Afternoon => &slots.afternoon,
            TimeOfDay::Night => &slots.night,
        }
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new(ThemeRegistry::default())
    }
}
