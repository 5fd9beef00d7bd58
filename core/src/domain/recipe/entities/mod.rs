pub mod errors;
pub mod recipe_suggestion;

pub use errors::{CompletionError, RecipeGenerationError};
pub use recipe_suggestion::{ChatCompletion, RecipeSuggestion};
