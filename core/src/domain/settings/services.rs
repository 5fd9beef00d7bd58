use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::ports::IngredientRepository,
    recipe::ports::LLMClient,
    settings::{
        entities::{Settings, UpdateSettingsInput},
        ports::{SettingsRepository, SettingsService},
    },
};

impl<I, S, L> SettingsService for Service<I, S, L>
where
    I: IngredientRepository,
    S: SettingsRepository,
    L: LLMClient,
{
    async fn get_settings(&self) -> Result<Settings, CoreError> {
        let openai_api_key = self.settings_repository.get_api_key().await?;

        Ok(Settings { openai_api_key })
    }

    async fn update_settings(&self, input: UpdateSettingsInput) -> Result<Settings, CoreError> {
        self.settings_repository
            .set_api_key(input.openai_api_key)
            .await?;

        let settings = self.get_settings().await?;
        info!(configured = settings.has_api_key(), "API key setting updated");

        Ok(settings)
    }
}
