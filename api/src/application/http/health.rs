use axum::{Router, extract::State, routing::get};
use grocerykit_core::domain::health::{entities::HealthStatus, ports::HealthCheckService};
use utoipa::OpenApi;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness",
    description = "Catalog size and whether an API key is configured. The key itself is never returned.",
    responses(
        (status = 200, body = HealthStatus)
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthStatus>, ApiError> {
    let status = state.service.health().await?;
    Ok(Response::OK(status))
}

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/health", state.args.server.root_path),
        get(health),
    )
}
