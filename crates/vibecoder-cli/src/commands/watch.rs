// Long-running theme switcher fed by stdin

use std::{path::PathBuf, sync::Arc};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use vibecoder_config::{ConfigManager, LogLevel, VibeConfig};
use vibecoder_resolver::{
    Applier, MemoryApplier, ServiceError, ServiceStatus, SettingsApplier, ThemeController,
    ThemeEvent, ThemeService,
};

use super::{build_clock, load_registry, Command};
use crate::{
    error::{CliError, CliResult},
    host::HostCommand,
    logging::{log_handle, LogHandle},
    output::{OutputStyle, TerminalStatus},
    settings::JsonSettingsStore,
};

/// Run the service until `quit` or end of input
pub struct WatchCommand {
    pub manager: ConfigManager,
    pub config: VibeConfig,
    pub settings: Option<PathBuf>,
    pub hour: Option<u32>,
    /// Level given on the command line; wins over reloaded configuration
    pub log_override: Option<LogLevel>,
    logs: Option<LogHandle>,
}

impl WatchCommand {
    pub fn new(
        manager: ConfigManager,
        config: VibeConfig,
        settings: Option<PathBuf>,
        hour: Option<u32>,
    ) -> Self {
        Self {
            manager,
            config,
            settings,
            hour,
            log_override: None,
            logs: log_handle(),
        }
    }

    pub fn with_log_override(mut self, level: Option<LogLevel>) -> Self {
        self.log_override = level;
        self
    }

    pub fn with_log_handle(mut self, logs: LogHandle) -> Self {
        self.logs = Some(logs);
        self
    }

    /// Re-read the configuration and apply its log level
    pub fn reload_config(&self) -> CliResult<VibeConfig> {
        let mut config = self.manager.load()?;
        if let Some(level) = self.log_override {
            config.log_level = level;
        }
        if let Some(logs) = &self.logs {
            if logs.level() != Some(config.log_level) && logs.set_level(config.log_level) {
                info!("Log level set to {}", config.log_level);
            }
        }
        Ok(config)
    }

    fn applier(&self) -> Arc<dyn Applier> {
        match &self.settings {
            Some(path) => {
                info!("Writing color theme to {}", path.display());
                Arc::new(SettingsApplier::new(JsonSettingsStore::new(path.clone())))
            }
            None => Arc::new(MemoryApplier::new()),
        }
    }

    fn controller(&self, style: OutputStyle) -> CliResult<ThemeController> {
        Ok(ThemeController::new(
            load_registry(&self.config),
            self.config.clone(),
            build_clock(self.hour)?,
            self.applier(),
            Arc::new(TerminalStatus::new(style)),
        ))
    }
}

#[async_trait::async_trait]
impl Command for WatchCommand {
    async fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::default();
        let mut service = ThemeService::start(self.controller(style)?);
        eprintln!(
            "{}",
            style.info(
                "Reading commands: open <lang>, close, lang <lang>, set <theme>, reload, status, quit"
            )
        );

        let input = BufReader::new(tokio::io::stdin());
        let result = tokio::select! {
            result = drive(&service, input, || self.reload_config(), style) => result,
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted");
                Ok(())
            }
        };

        service.stop().await?;
        result
    }
}

/// Forward host commands to a running service until `quit` or end of input
///
/// Each event is waited on until the service has handled it, so output stays
/// in input order. Malformed lines are reported and skipped.
pub async fn drive<R, F>(
    service: &ThemeService,
    input: R,
    reload: F,
    style: OutputStyle,
) -> CliResult<()>
where
    R: AsyncBufRead + Unpin,
    F: Fn() -> CliResult<VibeConfig>,
{
    let mut lines = input.lines();
    let mut status = service.subscribe();
    let mut sent = status.borrow().events_handled;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<HostCommand>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", style.warning(&e.to_string()));
                continue;
            }
        };
        debug!("Host command: {}", command);

        let event = match command {
            HostCommand::Quit => break,
            HostCommand::Status => {
                println!("{}", describe(&service.status()));
                continue;
            }
            HostCommand::Reload => match reload() {
                Ok(config) => ThemeEvent::ConfigurationChanged(config),
                Err(e) => {
                    warn!("Reload failed: {}", e);
                    eprintln!("{}", style.warning(&format!("Reload failed: {}", e)));
                    continue;
                }
            },
            other => match other.into_event() {
                Some(event) => event,
                None => continue,
            },
        };

        service.send(event)?;
        sent += 1;
        status
            .wait_for(|s| s.events_handled >= sent)
            .await
            .map_err(|_| CliError::Service(ServiceError::Stopped))?;
    }
    Ok(())
}

/// One-line summary of a service snapshot
pub fn describe(status: &ServiceStatus) -> String {
    let timer = match status.timer_period {
        Some(period) => format!("every {}s", period.as_secs()),
        None => "off".to_string(),
    };
    format!(
        "theme={} trigger={} timer={} resolutions={}",
        status.state.theme_key, status.state.trigger, timer, status.resolutions
    )
}
