use std::future::Future;

use crate::domain::recipe::{
    entities::{ChatCompletion, CompletionError, RecipeGenerationError, RecipeSuggestion},
    value_objects::GenerateRecipesInput,
};

/// Chat-completion API used to generate recipe text.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync + 'static {
    /// Sends `prompt` as a single user message. No retries.
    fn complete_chat(
        &self,
        api_key: String,
        prompt: String,
    ) -> impl Future<Output = Result<ChatCompletion, CompletionError>> + Send;
}

pub trait RecipeService: Send + Sync {
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<RecipeSuggestion, RecipeGenerationError>> + Send;
}
