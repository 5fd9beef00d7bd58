use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub ingredient_count: usize,
    pub credential_configured: bool,
    pub checked_at: DateTime<Utc>,
}
