// Logging setup

use std::sync::OnceLock;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, reload, Registry};
use vibecoder_config::LogLevel;

/// Handle of the installed subscriber, set by the first successful init
static LOG_HANDLE: OnceLock<LogHandle> = OnceLock::new();

/// Map the configured log level to a tracing filter
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
    }
}

fn log_level(filter: LevelFilter) -> LogLevel {
    if filter == LevelFilter::OFF {
        LogLevel::Off
    } else if filter >= LevelFilter::DEBUG {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

/// Changes the level of a running subscriber
#[derive(Clone)]
pub struct LogHandle {
    inner: reload::Handle<LevelFilter, Registry>,
}

impl LogHandle {
    /// Reloadable level filter layer and the handle controlling it
    pub fn layer(level: LogLevel) -> (reload::Layer<LevelFilter, Registry>, Self) {
        let (layer, inner) = reload::Layer::new(level_filter(level));
        (layer, Self { inner })
    }

    /// Switch to `level`; false once the subscriber is gone
    pub fn set_level(&self, level: LogLevel) -> bool {
        self.inner.modify(|filter| *filter = level_filter(level)).is_ok()
    }

    pub fn level(&self) -> Option<LogLevel> {
        self.inner.clone_current().map(log_level)
    }
}

/// Initialize tracing output on stderr
///
/// Only the first call installs a subscriber; later calls are ignored. The
/// level of the installed subscriber can be changed through [`log_handle`].
pub fn init_logging(level: LogLevel) {
    let debug = level == LogLevel::Debug;
    let (filter, handle) = LogHandle::layer(level);
    let output = fmt::layer()
        .with_target(debug)
        .with_file(debug)
        .with_line_number(debug)
        .with_writer(std::io::stderr);

    if tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init()
        .is_ok()
    {
        let _ = LOG_HANDLE.set(handle);
    }
}

/// Handle of the subscriber installed by [`init_logging`], if any
pub fn log_handle() -> Option<LogHandle> {
    LOG_HANDLE.get().cloned()
}
