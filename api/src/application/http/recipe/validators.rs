use grocerykit_core::domain::{
    common::html::escape_html,
    recipe::entities::{RecipeGenerationError, RecipeSuggestion},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outer POST body. `form_data` holds the urlencoded selection form.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipesForm {
    #[serde(default)]
    pub action: Option<String>,

    #[serde(default)]
    pub form_data: Option<String>,
}

impl GenerateRecipesForm {
    /// Builds the form from decoded body pairs. A repeated key keeps its last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::default(), |mut form, (key, value)| {
                match key.as_str() {
                    "action" => form.action = Some(value),
                    "form_data" => form.form_data = Some(value),
                    _ => {}
                }
                form
            })
    }
}

/// Uniform `{success, data}` reply. `data` is always safe to inject as HTML.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeEnvelope {
    pub success: bool,
    pub data: String,
}

impl From<RecipeSuggestion> for RecipeEnvelope {
    fn from(suggestion: RecipeSuggestion) -> Self {
        Self {
            success: true,
            data: suggestion.html,
        }
    }
}

impl From<RecipeGenerationError> for RecipeEnvelope {
    fn from(error: RecipeGenerationError) -> Self {
        Self {
            success: false,
            data: escape_html(&error.to_string()),
        }
    }
}
