mod cors;
mod extract;
pub mod handlers;
pub mod types;

pub use cors::build_cors_layer;
pub use extract::ValidatedJson;

use crate::{Result, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the full application: routes, request tracing and the CORS policy.
pub fn router(config: &Config) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/calculate", post(handlers::calculate))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config.cors))
}

pub async fn run(config: Config) -> Result<()> {
    let app = router(&config);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
