use utoipa::OpenApi;

use crate::application::http::{
    content::router::{AssetsApiDoc, ContentApiDoc},
    health::HealthApiDoc,
    ingredient::router::IngredientApiDoc,
    recipe::router::RecipeApiDoc,
    settings::router::SettingsApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GroceryKit API",
        description = "AI recipe suggestions from a grocery ingredient checklist"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/admin", api = SettingsApiDoc),
        (path = "/assets", api = AssetsApiDoc),
    )
)]
pub struct ApiDoc;

/// Full document, including the routes that live at the root.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(ContentApiDoc::openapi());
    openapi.merge(IngredientApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}
