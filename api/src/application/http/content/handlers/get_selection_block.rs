use axum::{extract::State, response::Html};
use grocerykit_core::domain::content::ports::ContentService;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    get,
    path = "/blocks/ingredient-selection",
    tag = "content",
    summary = "Ingredient selection block",
    description = "The selection form followed by the empty result container.",
    responses(
        (status = 200, content_type = "text/html", body = String)
    )
)]
pub async fn get_selection_block(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let block = state.service.render_selection_block().await?;

    Ok(Html(block))
}
