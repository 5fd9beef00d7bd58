use axum::{extract::State, response::Html};
use grocerykit_core::domain::content::ports::ContentService;

use crate::application::http::{
    content::views::{CLIENT_SCRIPT_PATH, GENERATE_RECIPES_PATH, demo_page_content, render_page},
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

#[utoipa::path(
    get,
    path = "/",
    tag = "content",
    summary = "Demo page",
    description = "A page whose content holds the selection shortcode, expanded and wired to the client script.",
    responses(
        (status = 200, content_type = "text/html", body = String)
    )
)]
pub async fn get_index_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let body = state.service.render_content(demo_page_content()).await?;

    Ok(Html(render_page(
        &body,
        &state.route_path(GENERATE_RECIPES_PATH),
        &state.route_path(CLIENT_SCRIPT_PATH),
    )))
}
