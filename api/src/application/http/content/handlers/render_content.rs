use axum::{extract::State, response::Html};
use grocerykit_core::domain::content::ports::ContentService;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    post,
    path = "/content/render",
    tag = "content",
    summary = "Expand content blocks",
    description = "Replaces every [gmk_ingredient_selection] shortcode in the posted content with the selection block.",
    request_body(content = String, content_type = "text/plain"),
    responses(
        (status = 200, content_type = "text/html", body = String)
    )
)]
pub async fn render_content(
    State(state): State<AppState>,
    content: String,
) -> Result<Html<String>, ApiError> {
    let rendered = state.service.render_content(content).await?;

    Ok(Html(rendered))
}
