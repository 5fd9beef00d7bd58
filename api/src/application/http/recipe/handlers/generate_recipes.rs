use axum::{Json, extract::State};
use bytes::Bytes;
use grocerykit_core::domain::recipe::{ports::RecipeService, value_objects::GenerateRecipesInput};
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

use crate::application::http::{
    recipe::validators::{GenerateRecipesForm, RecipeEnvelope},
    server::app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate AI recipes",
    description = "Builds a recipe prompt from the submitted ingredient selection and relays the model's answer. Always answers 200 with a success/failure envelope.",
    request_body(
        content = GenerateRecipesForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, body = RecipeEnvelope),
        (status = 401, description = "Generation is gated and the access token is missing or wrong")
    ),
)]
pub async fn generate_recipes(State(state): State<AppState>, body: Bytes) -> Json<RecipeEnvelope> {
    let pairs = serde_urlencoded::from_bytes::<Vec<(String, String)>>(&body).unwrap_or_else(|e| {
        warn!("Unreadable recipe request body: {}", e);
        Vec::new()
    });
    let form = GenerateRecipesForm::from_pairs(pairs);

    let span = info_span!(
        "generate_recipes",
        request_id = %Uuid::new_v4(),
        action = form.action.as_deref().unwrap_or_default()
    );

    let result = state
        .service
        .generate_recipes(GenerateRecipesInput {
            form_data: form.form_data,
        })
        .instrument(span)
        .await;

    Json(match result {
        Ok(suggestion) => RecipeEnvelope::from(suggestion),
        Err(error) => RecipeEnvelope::from(error),
    })
}
