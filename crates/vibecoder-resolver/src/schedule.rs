//! Periodic recheck timer

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::debug;

/// The single periodic recheck timer
///
/// Reconfiguring always tears the old timer down first; a new one is armed
/// only when a period is given. The first tick fires one full period after
/// arming.
#[derive(Debug, Default)]
pub struct RecheckSchedule {
    interval: Option<Interval>,
    period: Option<Duration>,
    rebuilds: u64,
}

impl RecheckSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tear down the current timer and arm a new one if `period` is set
    ///
    /// Returns whether a timer is armed afterwards.
    pub fn reconfigure(&mut self, period: Option<Duration>) -> bool {
        self.stop();
        let Some(period) = period.filter(|p| !p.is_zero()) else {
            debug!("Recheck timer disabled");
            return false;
        };

        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
        self.period = Some(period);
        self.rebuilds += 1;
        debug!("Recheck timer armed every {:?}", period);
        true
    }

    /// Drop the timer; calling this again is a no-op
    pub fn stop(&mut self) {
        self.interval = None;
        self.period = None;
    }

    /// Wait for the next tick; never completes while no timer is armed
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// How many times a timer has been armed
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}
