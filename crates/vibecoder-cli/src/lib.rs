// VibeCoder CLI Library

pub mod commands;
pub mod error;
pub mod host;
pub mod logging;
pub mod output;
pub mod router;
pub mod settings;

pub use error::{CliError, CliResult};
pub use logging::init_logging;
pub use router::{Cli, CommandRouter, Commands};
