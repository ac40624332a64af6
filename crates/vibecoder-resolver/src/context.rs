//! Resolution inputs and outputs

use std::fmt;

/// Why a theme is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerType {
    Time,
    Language,
    Manual,
    Fallback,
}

impl TriggerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerType::Time => "Time",
            TriggerType::Language => "Language",
            TriggerType::Manual => "Manual",
            TriggerType::Fallback => "Fallback",
        }
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a resolution looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveContext<'a> {
    /// Language of the active editor, if any
    pub language_id: Option<&'a str>,
    /// Local hour, 0-23
    pub hour: u32,
    pub enable_language_trigger: bool,
    pub enable_time_trigger: bool,
}

/// The theme that should be active and the trigger that selected it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub theme_key: String,
    pub trigger: TriggerType,
}

impl Resolution {
    pub fn new(theme_key: impl Into<String>, trigger: TriggerType) -> Self {
        Self {
            theme_key: theme_key.into(),
            trigger,
        }
    }
}

/// Time-of-day bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    /// [06:00, 12:00)
    Morning,
    /// [12:00, 18:00)
    Afternoon,
    /// Everything else
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Night,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_time_of_day_boundaries() {
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(99), TimeOfDay::Night);
    }

    #[test]
    fn test_trigger_display() {
        assert_eq!(TriggerType::Language.to_string(), "Language");
        assert_eq!(TriggerType::Fallback.to_string(), "Fallback");
    }

    proptest! {
        #[test]
        fn prop_every_hour_has_one_bucket(hour in any::<u32>()) {
            let expected = if (6..12).contains(&hour) {
                TimeOfDay::Morning
            } else if (12..18).contains(&hour) {
                TimeOfDay::Afternoon
            } else {
                TimeOfDay::Night
            };
            prop_assert_eq!(TimeOfDay::from_hour(hour), expected);
        }
    }
}
