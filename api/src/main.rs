use std::sync::Arc;

use clap::Parser;
use grocerykit_api::{
    application::http::server::http_server::{router, state},
    args::{Args, GenerationAccess, LogArgs},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    match args.access.generation_access {
        GenerationAccess::Open => {
            warn!("Recipe generation is open to unauthenticated callers")
        }
        GenerationAccess::Gated if args.access.access_token.is_none() => {
            warn!("Recipe generation is gated but no access token is set, every request will be rejected")
        }
        GenerationAccess::Gated => {}
    }

    let state = state(args.clone()).await?;
    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
