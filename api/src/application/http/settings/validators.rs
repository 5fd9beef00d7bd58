use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSettingsValidator {
    /// An empty value clears the stored key.
    #[serde(default)]
    #[validate(length(max = 512, message = "gmk_openai_api_key is too long"))]
    pub gmk_openai_api_key: String,
}
