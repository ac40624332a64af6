//! Event loop driving the controller
//!
//! A [`ThemeService`] owns one background task. Host events and recheck ticks
//! are handled one at a time inside that task, so resolutions never overlap
//! and the latest one always wins.

use std::time::Duration;

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use vibecoder_config::VibeConfig;

use crate::{
    controller::{ResolverState, ThemeController},
    error::ServiceError,
    schedule::RecheckSchedule,
};

/// Context changes reported by the host
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeEvent {
    /// Focus moved to another editor, or to none
    ActiveEditorChanged { language_id: Option<String> },
    /// The active editor's language changed
    LanguageChanged { language_id: String },
    /// Settings affecting theme switching changed
    ConfigurationChanged(VibeConfig),
    /// The user picked a theme by hand
    ManualSelection { theme_key: String },
}

/// Snapshot published after every handled event or tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub state: ResolverState,
    pub timer_period: Option<Duration>,
    pub timer_rebuilds: u64,
    pub resolutions: u64,
    /// Host events taken off the queue and handled
    pub events_handled: u64,
}

impl ServiceStatus {
    fn capture(
        controller: &ThemeController,
        schedule: &RecheckSchedule,
        events_handled: u64,
    ) -> Self {
        Self {
            state: controller.state().clone(),
            timer_period: schedule.period(),
            timer_rebuilds: schedule.rebuilds(),
            resolutions: controller.resolutions(),
            events_handled,
        }
    }
}

/// Running theme switcher
pub struct ThemeService {
    events: mpsc::UnboundedSender<ThemeEvent>,
    status: watch::Receiver<ServiceStatus>,
    cancel: CancellationToken,
    task: Option<JoinHandle<ThemeController>>,
}

impl ThemeService {
    /// Spawn the service task
    ///
    /// The task arms the recheck timer from the controller's configuration and
    /// resolves once immediately. Must be called inside a tokio runtime.
    pub fn start(controller: ThemeController) -> Self {
        let (events, rx) = mpsc::unbounded_channel();
        let mut schedule = RecheckSchedule::new();
        schedule.reconfigure(controller.config().recheck_interval());
        let (status_tx, status) =
            watch::channel(ServiceStatus::capture(&controller, &schedule, 0));
        let cancel = CancellationToken::new();

        let task = tokio::spawn(run(controller, schedule, rx, status_tx, cancel.clone()));
        info!("Theme service started");

        Self {
            events,
            status,
            cancel,
            task: Some(task),
        }
    }

    /// Queue a host event
    pub fn send(&self, event: ThemeEvent) -> Result<(), ServiceError> {
        if self.cancel.is_cancelled() {
            return Err(ServiceError::Stopped);
        }
        self.events.send(event).map_err(|_| ServiceError::Stopped)
    }

    /// Latest published snapshot
    pub fn status(&self) -> ServiceStatus {
        self.status.borrow().clone()
    }

    /// Watch for new snapshots
    pub fn subscribe(&self) -> watch::Receiver<ServiceStatus> {
        self.status.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some() && !self.cancel.is_cancelled()
    }

    /// Stop the task and tear down its timer
    ///
    /// The first call hands back the controller; later calls return `Ok(None)`.
    pub async fn stop(&mut self) -> Result<Option<ThemeController>, ServiceError> {
        self.cancel.cancel();
        let Some(task) = self.task.take() else {
            return Ok(None);
        };
        let controller = task
            .await
            .map_err(|e| ServiceError::TaskFailed(e.to_string()))?;
        info!("Theme service stopped");
        Ok(Some(controller))
    }
}

impl Drop for ThemeService {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl std::fmt::Debug for ThemeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeService")
            .field("running", &self.is_running())
            .field("status", &*self.status.borrow())
            .finish()
    }
}

async fn run(
    mut controller: ThemeController,
    mut schedule: RecheckSchedule,
    mut events: mpsc::UnboundedReceiver<ThemeEvent>,
    status: watch::Sender<ServiceStatus>,
    cancel: CancellationToken,
) -> ThemeController {
    let mut handled = 0;
    controller.refresh().await;
    status.send_replace(ServiceStatus::capture(&controller, &schedule, handled));

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            event = events.recv() => {
                let Some(event) = event else { break };
                if let ThemeEvent::ConfigurationChanged(config) = &event {
                    schedule.reconfigure(config.recheck_interval());
                }
                controller.handle(event).await;
                handled += 1;
            }
            _ = schedule.tick() => {
                debug!("Recheck timer fired");
                controller.refresh().await;
            }
        }
        status.send_replace(ServiceStatus::capture(&controller, &schedule, handled));
    }

    schedule.stop();
    status.send_replace(ServiceStatus::capture(&controller, &schedule, handled));
    controller
}
