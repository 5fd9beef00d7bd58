use futures::FutureExt;
use tracing::{error, info, warn};

use crate::domain::{
    common::services::Service,
    ingredient::ports::IngredientRepository,
    recipe::{
        entities::{ChatCompletion, CompletionError, RecipeGenerationError, RecipeSuggestion},
        helpers::format_recipe_html,
        ports::{LLMClient, RecipeService},
        prompt::build_recipe_prompt,
        value_objects::{GenerateRecipesInput, Submission},
    },
    settings::ports::SettingsRepository,
};

impl<I, S, L> Service<I, S, L>
where
    I: IngredientRepository,
    S: SettingsRepository,
    L: LLMClient,
{
    async fn request_completion(
        &self,
        api_key: String,
        prompt: String,
    ) -> Result<ChatCompletion, CompletionError> {
        let Some(coalescer) = &self.coalescer else {
            return self.llm_client.complete_chat(api_key, prompt).await;
        };

        let key = format!("{api_key}\u{0}{prompt}");
        let llm_client = self.llm_client.clone();

        coalescer
            .run(key, move || {
                async move { llm_client.complete_chat(api_key, prompt).await }.boxed()
            })
            .await
    }
}

impl<I, S, L> RecipeService for Service<I, S, L>
where
    I: IngredientRepository,
    S: SettingsRepository,
    L: LLMClient,
{
    async fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> Result<RecipeSuggestion, RecipeGenerationError> {
        // 1. Payload must be present
        let form_data = input
            .form_data
            .ok_or(RecipeGenerationError::MissingInput)?;

        // 2. Merge checked and free-text ingredients
        let ingredients = Submission::from_form_data(&form_data).ingredients();

        // 3. Credential must be configured
        let api_key = match self.settings_repository.get_api_key().await {
            Ok(Some(api_key)) if !api_key.trim().is_empty() => api_key,
            Ok(_) => {
                warn!("Recipe generation requested but no API key is configured");
                return Err(RecipeGenerationError::MissingCredential);
            }
            Err(e) => {
                error!("Failed to read API key from settings: {}", e);
                return Err(RecipeGenerationError::Unavailable);
            }
        };

        let prompt = build_recipe_prompt(&ingredients);

        let completion = self
            .request_completion(api_key, prompt)
            .await
            .map_err(|e| match e {
                CompletionError::Transport { message, detail } => {
                    error!(detail = %detail, "OpenAI API Error: {}", message);
                    RecipeGenerationError::Transport(message)
                }
                CompletionError::MissingContent { raw_body } => {
                    error!(
                        "Failed to generate AI recipes. API Response: {}",
                        raw_body
                    );
                    RecipeGenerationError::MalformedResponse
                }
            })?;

        let suggestion =
            RecipeSuggestion::new(ingredients, format_recipe_html(&completion.content));

        info!(
            suggestion_id = %suggestion.id,
            ingredient_count = suggestion.ingredients.len(),
            model = completion.model.as_deref().unwrap_or("unknown"),
            "Generated AI recipes"
        );

        Ok(suggestion)
    }
}
