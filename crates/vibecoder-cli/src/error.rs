// CLI error types

use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] vibecoder_config::ConfigError),

    #[error("Theme service error: {0}")]
    Service(#[from] vibecoder_resolver::ServiceError),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'vibecoder --help' for usage information.",
                    message
                )
            }
            CliError::Io(e) => format!("File operation failed: {}", e),
            CliError::Config(e) => {
                format!(
                    "Configuration error: {}\n\nRun 'vibecoder config' to check your configuration.",
                    e
                )
            }
            CliError::Service(e) => format!("Theme service failed: {}", e),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
