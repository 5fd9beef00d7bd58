use axum::extract::State;
use grocerykit_core::domain::ingredient::{entities::IngredientTag, ports::IngredientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct IngredientResponse {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub parent: Option<u64>,
}

impl From<IngredientTag> for IngredientResponse {
    fn from(tag: IngredientTag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            slug: tag.slug,
            parent: tag.parent,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientsResponse {
    pub data: Vec<IngredientResponse>,
}

#[utoipa::path(
    get,
    path = "/ingredients",
    tag = "ingredient",
    summary = "List ingredients",
    description = "Every ingredient of the taxonomy, ordered by name.",
    responses(
        (status = 200, body = GetIngredientsResponse)
    )
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
) -> Result<Response<GetIngredientsResponse>, ApiError> {
    let tags = state.service.get_ingredients().await?;

    Ok(Response::OK(GetIngredientsResponse {
        data: tags.into_iter().map(IngredientResponse::from).collect(),
    }))
}
