// Line protocol for editor events read by `vibecoder watch`

use std::{fmt, str::FromStr};

use vibecoder_resolver::ThemeEvent;

use crate::error::CliError;

/// One command line from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// `open <language>`: an editor for a file in that language became active
    Open(String),
    /// `close`: no editor is active
    Close,
    /// `lang <language>`: the active editor's language changed
    Lang(String),
    /// `set <theme-key>`: manual theme selection
    Set(String),
    /// `reload`: re-read the configuration
    Reload,
    /// `status`: print the current service status
    Status,
    /// `quit`
    Quit,
}

impl HostCommand {
    /// Event to forward to the service, if the command maps onto one
    ///
    /// `reload`, `status` and `quit` are handled by the caller.
    pub fn into_event(self) -> Option<ThemeEvent> {
        match self {
            HostCommand::Open(language_id) => Some(ThemeEvent::ActiveEditorChanged {
                language_id: Some(language_id),
            }),
            HostCommand::Close => Some(ThemeEvent::ActiveEditorChanged { language_id: None }),
            HostCommand::Lang(language_id) => Some(ThemeEvent::LanguageChanged { language_id }),
            HostCommand::Set(theme_key) => Some(ThemeEvent::ManualSelection { theme_key }),
            HostCommand::Reload | HostCommand::Status | HostCommand::Quit => None,
        }
    }
}

impl FromStr for HostCommand {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next().map(str::to_string);
        if parts.next().is_some() {
            return Err(invalid(format!("too many arguments in '{}'", line.trim())));
        }

        let command = match (verb.as_str(), arg) {
            ("open", Some(language)) => HostCommand::Open(language),
            ("lang", Some(language)) => HostCommand::Lang(language),
            ("set", Some(key)) => HostCommand::Set(key),
            ("close", None) => HostCommand::Close,
            ("reload", None) => HostCommand::Reload,
            ("status", None) => HostCommand::Status,
            ("quit" | "exit", None) => HostCommand::Quit,
            ("open" | "lang" | "set", None) => {
                return Err(invalid(format!("'{}' needs an argument", verb)))
            }
            ("close" | "reload" | "status" | "quit" | "exit", Some(_)) => {
                return Err(invalid(format!("'{}' takes no argument", verb)))
            }
            ("", _) => return Err(invalid("empty command".to_string())),
            (other, _) => return Err(invalid(format!("unknown command '{}'", other))),
        };
        Ok(command)
    }
}

impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostCommand::Open(language) => write!(f, "open {}", language),
            HostCommand::Close => f.write_str("close"),
            HostCommand::Lang(language) => write!(f, "lang {}", language),
            HostCommand::Set(key) => write!(f, "set {}", key),
            HostCommand::Reload => f.write_str("reload"),
            HostCommand::Status => f.write_str("status"),
            HostCommand::Quit => f.write_str("quit"),
        }
    }
}

fn invalid(message: String) -> CliError {
    CliError::InvalidArgument { message }
}
