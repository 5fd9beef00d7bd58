use serde::{Deserialize, Serialize};

/// Setting key under which the API key is stored.
pub const OPENAI_API_KEY_SETTING: &str = "gmk_openai_api_key";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub openai_api_key: Option<String>,
}

impl Settings {
    pub fn has_api_key(&self) -> bool {
        self.openai_api_key
            .as_deref()
            .is_some_and(|api_key| !api_key.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSettingsInput {
    pub openai_api_key: String,
}
