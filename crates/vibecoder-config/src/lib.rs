//! VibeCoder Configuration
//!
//! Settings are layered from an optional TOML file and `VIBECODER_*`
//! environment variables. Every option has a documented default, and a value
//! that cannot be understood falls back to that default instead of failing.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{LogLevel, Profile, VibeConfig};
