use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::generate_recipes::{__path_generate_recipes, generate_recipes};
use crate::application::{auth::generation_access, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(generate_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/generate", state.args.server.root_path),
            post(generate_recipes),
        )
        .layer(middleware::from_fn_with_state(state.clone(), generation_access))
}
