use chrono::Utc;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::HealthStatus, ports::HealthCheckService},
    ingredient::ports::IngredientRepository,
    recipe::ports::LLMClient,
    settings::{entities::Settings, ports::SettingsRepository},
};

impl<I, S, L> HealthCheckService for Service<I, S, L>
where
    I: IngredientRepository,
    S: SettingsRepository,
    L: LLMClient,
{
    async fn health(&self) -> Result<HealthStatus, CoreError> {
        let ingredient_count = self.ingredient_repository.fetch_all().await?.len();
        let openai_api_key = self.settings_repository.get_api_key().await?;

        Ok(HealthStatus {
            status: "ok".to_string(),
            ingredient_count,
            credential_configured: Settings { openai_api_key }.has_api_key(),
            checked_at: Utc::now(),
        })
    }
}
