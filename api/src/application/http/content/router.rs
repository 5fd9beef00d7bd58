use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::{
    handlers::{
        get_client_script::{__path_get_client_script, get_client_script},
        get_content_types::{__path_get_content_types, get_content_types},
        get_index_page::{__path_get_index_page, get_index_page},
        get_selection_block::{__path_get_selection_block, get_selection_block},
        render_content::{__path_render_content, render_content},
    },
    views::CLIENT_SCRIPT_PATH,
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_index_page, get_content_types, get_selection_block, render_content))]
pub struct ContentApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_client_script))]
pub struct AssetsApiDoc;

pub fn content_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    let index_path = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.clone()
    };

    Router::new()
        .route(&index_path, get(get_index_page))
        .route(&format!("{}/content-types", root_path), get(get_content_types))
        .route(
            &format!("{}/blocks/ingredient-selection", root_path),
            get(get_selection_block),
        )
        .route(&format!("{}/content/render", root_path), post(render_content))
        .route(
            &format!("{}{}", root_path, CLIENT_SCRIPT_PATH),
            get(get_client_script),
        )
}
