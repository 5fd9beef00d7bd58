use axum::extract::State;
use grocerykit_core::domain::content::{entities::ContentTypes, ports::ContentService};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[utoipa::path(
    get,
    path = "/content-types",
    tag = "content",
    summary = "Content type definitions",
    description = "The AI recipe record type and the hierarchical ingredient taxonomy attached to it.",
    responses(
        (status = 200, body = ContentTypes)
    )
)]
pub async fn get_content_types(State(state): State<AppState>) -> Response<ContentTypes> {
    Response::OK(state.service.get_content_types())
}
