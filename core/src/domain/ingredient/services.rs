use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{
        entities::IngredientTag,
        ports::{IngredientRepository, IngredientService},
    },
    recipe::ports::LLMClient,
    settings::ports::SettingsRepository,
};

impl<I, S, L> IngredientService for Service<I, S, L>
where
    I: IngredientRepository,
    S: SettingsRepository,
    L: LLMClient,
{
    async fn get_ingredients(&self) -> Result<Vec<IngredientTag>, CoreError> {
        self.ingredient_repository.fetch_all().await
    }
}
