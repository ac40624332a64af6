//! VibeCoder theme resolution
//!
//! Decides which theme should be active for the current editor context and
//! time of day, applies it through a host [`Applier`], and keeps rechecking
//! on a timer and on editor or configuration events.
//!
//! The pieces, from the inside out:
//! - [`ThemeResolver`]: the pure priority policy (language, then time, then fallback)
//! - [`ThemeController`]: owns the active theme and suppresses redundant applies
//! - [`RecheckSchedule`]: the single periodic timer
//! - [`ThemeService`]: the event loop tying events, timer and controller together

pub mod applier;
pub mod clock;
pub mod context;
pub mod controller;
pub mod display;
pub mod error;
pub mod resolver;
pub mod schedule;
pub mod service;

pub use applier::{
    Applier, MemoryApplier, MemorySettingsStore, SettingsApplier, SettingsStore,
    COLOR_THEME_SETTING,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use context::{Resolution, ResolveContext, TimeOfDay, TriggerType};
pub use controller::{ApplyOutcome, ResolverState, ThemeController};
pub use display::{DisplaySink, RecordingSink, StatusLine};
pub use error::{ApplyError, ServiceError};
pub use resolver::ThemeResolver;
pub use schedule::RecheckSchedule;
pub use service::{ServiceStatus, ThemeEvent, ThemeService};
