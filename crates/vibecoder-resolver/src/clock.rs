//! Time sources

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Timelike;

/// Source of the current local hour
pub trait Clock: Send + Sync {
    /// Hour of the day, 0-23
    fn hour(&self) -> u32;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// Clock pinned to an hour that can be moved by hand
#[derive(Debug, Default)]
pub struct FixedClock {
    hour: AtomicU32,
}

impl FixedClock {
    pub fn new(hour: u32) -> Self {
        Self {
            hour: AtomicU32::new(hour % 24),
        }
    }

    pub fn set_hour(&self, hour: u32) {
        self.hour.store(hour % 24, Ordering::Relaxed);
    }
}

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.hour.load(Ordering::Relaxed)
    }
}
