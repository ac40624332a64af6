// Configuration inspection

use vibecoder_config::{ConfigManager, VibeConfig};

use super::Command;
use crate::{error::CliResult, output::OutputStyle};

/// Show the effective configuration, optionally writing a default file
pub struct ConfigCommand {
    pub manager: ConfigManager,
    pub config: VibeConfig,
    pub init: bool,
}

impl ConfigCommand {
    pub fn new(manager: ConfigManager, config: VibeConfig, init: bool) -> Self {
        Self {
            manager,
            config,
            init,
        }
    }

    /// Write the default configuration unless a file already exists
    ///
    /// Returns whether a file was written.
    pub fn init_file(&self) -> CliResult<bool> {
        if self.manager.config_path().exists() {
            return Ok(false);
        }
        self.manager.save(&VibeConfig::default())?;
        Ok(true)
    }
}

#[async_trait::async_trait]
impl Command for ConfigCommand {
    async fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::default();
        let path = self.manager.config_path().display().to_string();

        if self.init {
            if self.init_file()? {
                println!("{}", style.success(&format!("Wrote default configuration to {}", path)));
            } else {
                println!("{}", style.warning(&format!("{} already exists; left unchanged", path)));
            }
            println!();
        }

        println!("{}", style.header("VibeCoder Configuration"));
        println!();
        for line in ConfigManager::to_toml(&self.config)?.lines() {
            println!("  {}", line);
        }
        println!();

        match self.config.recheck_interval() {
            Some(interval) => println!(
                "{}",
                style.info(&format!("Recheck every {}s", interval.as_secs()))
            ),
            None => println!("{}", style.info("Time trigger disabled; no recheck timer")),
        }
        println!("{}", style.info(&format!("Config file: {}", path)));

        Ok(())
    }
}
