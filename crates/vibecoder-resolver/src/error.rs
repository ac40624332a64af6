//! Error types for theme application and the service loop

use thiserror::Error;

/// Failure reported by an [`Applier`](crate::Applier)
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("Host rejected setting {key}: {reason}")]
    Rejected { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings format error: {0}")]
    Format(String),
}

/// Errors from driving a [`ThemeService`](crate::ThemeService)
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Theme service is not running")]
    Stopped,

    #[error("Theme service task failed: {0}")]
    TaskFailed(String),
}
