use axum::{extract::State, response::Html};
use grocerykit_core::domain::settings::{entities::UpdateSettingsInput, ports::SettingsService};

use crate::application::http::{
    server::{
        api_entities::api_error::{ApiError, ValidateForm},
        app_state::AppState,
    },
    settings::{
        validators::UpdateSettingsValidator,
        views::{SAVED_NOTICE, render_settings_page},
    },
};

#[utoipa::path(
    post,
    path = "/settings",
    tag = "settings",
    summary = "Save settings",
    description = "Stores the OpenAI API key. The next generation request reads the new value.",
    request_body(
        content = UpdateSettingsValidator,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, content_type = "text/html", body = String),
        (status = 401, description = "Missing or wrong admin token"),
        (status = 403, description = "No admin token configured"),
        (status = 422, description = "Value too long")
    )
)]
pub async fn update_settings(
    State(state): State<AppState>,
    ValidateForm(payload): ValidateForm<UpdateSettingsValidator>,
) -> Result<Html<String>, ApiError> {
    let settings = state
        .service
        .update_settings(UpdateSettingsInput {
            openai_api_key: payload.gmk_openai_api_key,
        })
        .await?;

    Ok(Html(render_settings_page(
        &settings,
        &state.route_path("/admin/settings"),
        Some(SAVED_NOTICE),
    )))
}
