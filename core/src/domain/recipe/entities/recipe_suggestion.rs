use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletion {
    pub content: String,
    pub model: Option<String>,
}

/// Generated recipe text, relayed once and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSuggestion {
    pub id: Uuid,
    pub ingredients: Vec<String>,
    /// Escaped model output with `<br />` line breaks, safe to inject as markup.
    pub html: String,
    pub generated_at: DateTime<Utc>,
}

impl RecipeSuggestion {
    pub fn new(ingredients: Vec<String>, html: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            ingredients,
            html,
            generated_at: now,
        }
    }
}
