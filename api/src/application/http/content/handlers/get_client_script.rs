use axum::{
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
};

const CLIENT_SCRIPT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/grocerykit.js"));

#[utoipa::path(
    get,
    path = "/grocerykit.js",
    tag = "content",
    summary = "Client submission script",
    description = "Submits the ingredient form to the generation endpoint and writes the reply into the result container.",
    responses(
        (status = 200, content_type = "application/javascript", body = String)
    )
)]
pub async fn get_client_script() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (CACHE_CONTROL, "public, max-age=300"),
        ],
        CLIENT_SCRIPT,
    )
}
