//! Presentation of the active theme

use std::sync::Mutex;

use vibecoder_themes::Theme;

use crate::context::TriggerType;

/// What a status line shows for the active theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub theme_key: String,
    /// Short text, the theme's host label
    pub text: String,
    /// Longer description including the trigger
    pub tooltip: String,
    pub trigger: TriggerType,
}

impl StatusLine {
    pub fn new(theme: &Theme, trigger: TriggerType) -> Self {
        let text = theme.host_label();
        Self {
            theme_key: theme.key.clone(),
            tooltip: format!("Vibe Coder: {} ({})", text, trigger),
            text,
            trigger,
        }
    }
}

/// Receives display updates; never feeds back into resolution
pub trait DisplaySink: Send + Sync {
    fn show(&self, theme: &Theme, status: &StatusLine);
}

/// Sink that keeps every status line it was shown
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<StatusLine>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<StatusLine> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<StatusLine> {
        self.lines
            .lock()
            .ok()
            .and_then(|lines| lines.last().cloned())
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DisplaySink for RecordingSink {
    fn show(&self, _theme: &Theme, status: &StatusLine) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(status.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use vibecoder_themes::ThemeRegistry;

    use super::*;

    #[test]
    fn test_status_line_text() {
        let registry = ThemeRegistry::default();
        let status = StatusLine::new(registry.require("webdev-flow").unwrap(), TriggerType::Language);
        assert_eq!(status.text, "Vibe: WebDev Flow");
        assert_eq!(status.tooltip, "Vibe Coder: Vibe: WebDev Flow (Language)");
    }

    #[test]
    fn test_recording_sink() {
        let registry = ThemeRegistry::default();
        let sink = RecordingSink::new();
        assert!(sink.is_empty());

        let theme = registry.fallback();
        sink.show(theme, &StatusLine::new(theme, TriggerType::Fallback));

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.last().unwrap().theme_key, "default-dark");
    }
}
