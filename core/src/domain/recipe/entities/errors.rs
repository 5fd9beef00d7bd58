use thiserror::Error;

/// Outcome of a failed generation request. The `Display` text is what the caller sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeGenerationError {
    #[error("No ingredients selected.")]
    MissingInput,

    #[error("API key not set. Please go to the settings page to set your OpenAI API key.")]
    MissingCredential,

    #[error("Error generating AI recipes: {0}")]
    Transport(String),

    #[error("Failed to generate AI recipes.")]
    MalformedResponse,

    #[error("Recipe generation is temporarily unavailable.")]
    Unavailable,
}

/// Failure reported by an [`LLMClient`](crate::domain::recipe::ports::LLMClient).
/// Carries the diagnostic detail that is logged but never returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("{message}")]
    Transport { message: String, detail: String },

    #[error("chat completion has no message content")]
    MissingContent { raw_body: String },
}
