use std::sync::Arc;

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use grocerykit_core::{application::create_service, domain::common::GroceryKitConfig};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, info_span, warn};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use crate::{
    application::http::{
        content::router::content_routes,
        health::health_routes,
        ingredient::router::ingredient_routes,
        recipe::router::recipe_routes,
        server::{app_state::AppState, openapi::api_doc},
        settings::router::settings_routes,
    },
    args::Args,
};

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = GroceryKitConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allowed_origins = allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| warn!("Ignoring invalid allowed origin {:?}", origin))
                .ok()
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true)
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        });

    let root_path = state.args.server.root_path.clone();

    let mut openapi = api_doc();
    openapi.paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", root_path), item))
        .collect();

    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let mut router: Router<AppState> = Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi.clone()))
        .merge(RapiDoc::with_openapi(api_docs_url, openapi).path(format!("{}/rapidoc", root_path)))
        .merge(content_routes(state.clone()))
        .merge(ingredient_routes(state.clone()))
        .merge(recipe_routes(state.clone()))
        .merge(settings_routes(state.clone()))
        .merge(health_routes(state.clone()));

    if state.args.server.disable_metrics {
        info!("Prometheus metrics disabled");
    } else {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    Ok(router
        .layer(trace_layer)
        .layer(cors_layer(&state.args.server.allowed_origins))
        .with_state(state))
}
