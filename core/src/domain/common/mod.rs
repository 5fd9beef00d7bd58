use std::{fmt, path::PathBuf};

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod html;
pub mod services;

#[derive(Clone, Debug)]
pub struct GroceryKitConfig {
    pub llm: LLMConfig,
    pub settings: SettingsConfig,
    pub catalog: CatalogConfig,
    pub generation: GenerationConfig,
}

/// Chat-completion endpoint used for recipe generation.
#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4".to_string(),
            max_tokens: 500,
            timeout_secs: 60,
        }
    }
}

#[derive(Clone, Default)]
pub struct SettingsConfig {
    /// Initial API key, used only when the settings store holds none.
    pub openai_api_key: Option<String>,
    /// JSON file the settings store persists to. Memory only when absent.
    pub settings_file: Option<PathBuf>,
}

impl fmt::Debug for SettingsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsConfig")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("settings_file", &self.settings_file)
            .finish()
    }
}

#[derive(Clone, Debug, Default)]
pub struct CatalogConfig {
    pub ingredients_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Default)]
pub struct GenerationConfig {
    /// Share one upstream call between identical submissions in flight at the same time.
    pub coalesce_requests: bool,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
