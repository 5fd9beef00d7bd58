use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_settings::{__path_get_settings, get_settings},
    update_settings::{__path_update_settings, update_settings},
};
use crate::application::{auth::require_admin, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_settings, update_settings))]
pub struct SettingsApiDoc;

pub fn settings_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/admin/settings", state.args.server.root_path),
            get(get_settings).post(update_settings),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_admin))
}
