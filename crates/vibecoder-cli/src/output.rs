// Output formatting and styling

use colored::Colorize;
use ratatui::style::Color;
use vibecoder_resolver::{DisplaySink, StatusLine};
use vibecoder_themes::Theme;

/// Output styling configuration
#[derive(Debug, Clone, Copy)]
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format info message
    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "ℹ".blue(), msg)
        } else {
            format!("ℹ {}", msg)
        }
    }

    /// Format an identifier such as a theme key
    pub fn code(&self, code: &str) -> String {
        if self.use_colors {
            code.cyan().to_string()
        } else {
            code.to_string()
        }
    }

    /// Format section header
    pub fn header(&self, msg: &str) -> String {
        if self.use_colors {
            msg.bold().underline().to_string()
        } else {
            msg.to_string()
        }
    }

    /// Render text in a theme's own colors
    pub fn themed(&self, text: &str, theme: &Theme) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        let (fr, fg, fb) = rgb_parts(theme.colors.foreground);
        let (br, bg, bb) = rgb_parts(theme.colors.background);
        text.truecolor(fr, fg, fb).on_truecolor(br, bg, bb).to_string()
    }

    /// Four small blocks showing a theme's palette
    pub fn swatch(&self, theme: &Theme) -> String {
        let colors = [
            theme.colors.background,
            theme.colors.foreground,
            theme.colors.primary,
            theme.colors.secondary,
        ];
        if !self.use_colors {
            return colors
                .iter()
                .map(vibecoder_themes::types::color_to_hex)
                .collect::<Vec<_>>()
                .join(" ");
        }
        colors
            .iter()
            .map(|color| {
                let (r, g, b) = rgb_parts(*color);
                "  ".on_truecolor(r, g, b).to_string()
            })
            .collect()
    }

    /// Format a status line
    pub fn status(&self, theme: &Theme, status: &StatusLine) -> String {
        format!(
            "{} {}",
            self.themed(&format!(" {} ", status.text), theme),
            status.tooltip
        )
    }
}

fn rgb_parts(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    }
}

/// Print error message to stderr
pub fn print_error(msg: &str) {
    let style = OutputStyle::default();
    eprintln!("{}", style.error(msg));
}

/// Status line printed to stdout on every display update
#[derive(Debug, Default)]
pub struct TerminalStatus {
    style: OutputStyle,
}

impl TerminalStatus {
    pub fn new(style: OutputStyle) -> Self {
        Self { style }
    }
}

impl DisplaySink for TerminalStatus {
    fn show(&self, theme: &Theme, status: &StatusLine) {
        println!("{}", self.style.status(theme, status));
    }
}
