//! VibeCoder Theme Registry
//!
//! This crate holds the immutable set of themes VibeCoder can switch between,
//! together with the tables that map languages and times of day onto them.
//! Registries are built once at startup, either from a built-in preset or from
//! a YAML definition file, and are never mutated afterwards.

pub mod builtin;
pub mod error;
pub mod loader;
pub mod registry;
pub mod types;

pub use error::{Result, ThemeError};
pub use loader::RegistryLoader;
pub use registry::ThemeRegistry;
pub use types::{LanguagePreset, Theme, ThemeColors, TimeSlots};
