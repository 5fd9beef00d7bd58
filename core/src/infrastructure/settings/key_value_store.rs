use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use tokio::sync::RwLock;
use tracing::{error, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    settings::{entities::OPENAI_API_KEY_SETTING, ports::SettingsRepository},
};

/// Key-value settings, kept in memory and optionally mirrored to a JSON file.
#[derive(Debug, Default)]
pub struct KeyValueSettingsStore {
    values: RwLock<BTreeMap<String, String>>,
    path: Option<PathBuf>,
}

impl KeyValueSettingsStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads stored settings from `path` when the file exists.
    pub async fn open(path: &Path) -> Result<Self, CoreError> {
        let values = match tokio::fs::read_to_string(path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                error!("Settings file {} is not valid JSON: {}", path.display(), e);
                CoreError::SettingsStore(format!("invalid settings file: {}", e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                error!("Failed to read settings file {}: {}", path.display(), e);
                return Err(CoreError::SettingsStore(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        info!(path = %path.display(), keys = values.len(), "Opened settings store");

        Ok(Self {
            values: RwLock::new(values),
            path: Some(path.to_path_buf()),
        })
    }

    /// Sets `key` only if the store holds no value for it yet.
    pub async fn seed(&self, key: &str, value: String) {
        self.values
            .write()
            .await
            .entry(key.to_string())
            .or_insert(value);
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.values.read().await.get(key).cloned()
    }

    pub async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value);

        if let Some(path) = &self.path {
            let raw = serde_json::to_string_pretty(&*values)
                .map_err(|e| CoreError::SettingsStore(e.to_string()))?;
            tokio::fs::write(path, raw).await.map_err(|e| {
                error!("Failed to write settings file {}: {}", path.display(), e);
                CoreError::SettingsStore(format!("cannot write {}: {}", path.display(), e))
            })?;
        }

        Ok(())
    }
}

impl SettingsRepository for KeyValueSettingsStore {
    async fn get_api_key(&self) -> Result<Option<String>, CoreError> {
        Ok(self.get(OPENAI_API_KEY_SETTING).await)
    }

    async fn set_api_key(&self, api_key: String) -> Result<(), CoreError> {
        self.set(OPENAI_API_KEY_SETTING, api_key).await
    }
}
