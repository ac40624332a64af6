// JSON settings file used as the host settings store

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::{Map, Value};
use vibecoder_resolver::{ApplyError, SettingsStore};

/// Flat JSON object on disk, like an editor's `settings.json`
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read(&self) -> Result<Map<String, Value>, ApplyError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ApplyError::Format(format!(
                "{} is not a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(ApplyError::Format(e.to_string())),
        }
    }
}

#[async_trait]
impl SettingsStore for JsonSettingsStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ApplyError> {
        Ok(self
            .read()
            .await?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ApplyError> {
        let mut settings = self.read().await?;
        settings.insert(key.to_string(), Value::String(value.to_string()));
        let content = serde_json::to_string_pretty(&Value::Object(settings))
            .map_err(|e| ApplyError::Format(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}
