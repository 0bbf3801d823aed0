use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use senti_core::{Result, PREDICT_RSS_PATH, PREDICT_SENTIMENT_PATH};

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, ServerConfig};

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(PREDICT_SENTIMENT_PATH, post(handlers::predict_sentiment))
        .route(PREDICT_RSS_PATH, post(handlers::predict_sentiments_from_rss))
        .route("/models", get(handlers::list_models))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(Arc::new(state))
}

/// Binds `config.bind` and serves until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = create_app(AppState::new(&config)?);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("🚀 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{create_app, serve, AppState, ServerConfig};
    pub use senti_core::{Error, Result};
}
