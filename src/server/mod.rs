mod auth;
pub mod handlers;
pub mod types;

pub use auth::{check_bearer, require_bearer_token};
pub use handlers::AppState;

use crate::{Result, config::Config, llm::OpenAiClient, writer::ForumWriter};
use axum::{Router, middleware, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/generate-response", post(handlers::generate_response))
        .route("/generate-topic", post(handlers::generate_topic))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer_token,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm_client = OpenAiClient::new(&config.llm)?;
    info!(
        "Using {} model {} at {}",
        config.llm.provider,
        llm_client.model(),
        config.llm.base_url
    );

    let app_state = AppState {
        writer: Arc::new(ForumWriter::new(Arc::new(llm_client))),
        auth: Arc::new(config.auth.clone()),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
