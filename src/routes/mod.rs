//! API Routes
//!
//! One file per endpoint:
//! - `POST /translate` - bilingual phrase translation (paid)
//! - `POST /code-review` - static code review (paid)
//! - `POST /summarize` - extractive summarization (paid)
//! - `GET /health` - health check (free)
//! - `GET /` - service directory (free)

pub mod code_review;
pub mod health;
pub mod index;
pub mod summarize;
pub mod translate;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors::apply_cors;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let router = Router::new()
        .merge(translate::router(state.clone()))
        .merge(code_review::router(state.clone()))
        .merge(summarize::router(state.clone()))
        .merge(health::router(state.clone()))
        .merge(index::router(state.clone()))
        .layer(TraceLayer::new_for_http());

    apply_cors(router, &state.config.server.cors_allowed_origins)
}
