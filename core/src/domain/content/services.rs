use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    content::{
        blocks::{expand_content_blocks, render_selection_block},
        entities::ContentTypes,
        ports::ContentService,
    },
    ingredient::ports::IngredientRepository,
    recipe::ports::LLMClient,
    settings::ports::SettingsRepository,
};

impl<I, S, L> ContentService for Service<I, S, L>
where
    I: IngredientRepository,
    S: SettingsRepository,
    L: LLMClient,
{
    fn get_content_types(&self) -> ContentTypes {
        ContentTypes::default()
    }

    async fn render_selection_block(&self) -> Result<String, CoreError> {
        let ingredients = self.ingredient_repository.fetch_all().await?;

        Ok(render_selection_block(&ingredients))
    }

    async fn render_content(&self, content: String) -> Result<String, CoreError> {
        let ingredients = self.ingredient_repository.fetch_all().await?;

        Ok(expand_content_blocks(&content, &ingredients))
    }
}
