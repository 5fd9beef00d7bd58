use axum::{extract::State, response::Html};
use grocerykit_core::domain::settings::ports::SettingsService;

use crate::application::http::{
    server::{api_entities::api_error::ApiError, app_state::AppState},
    settings::views::render_settings_page,
};

#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    summary = "Settings page",
    description = "HTML form holding the stored OpenAI API key.",
    responses(
        (status = 200, content_type = "text/html", body = String),
        (status = 401, description = "Missing or wrong admin token"),
        (status = 403, description = "No admin token configured")
    )
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let settings = state.service.get_settings().await?;

    Ok(Html(render_settings_page(
        &settings,
        &state.route_path("/admin/settings"),
        None,
    )))
}
