// x402-services - pay-per-request text utilities behind an x402 payment gate

pub mod analyzers;
pub mod config;
pub mod middleware;
pub mod models;
pub mod payment;
pub mod routes;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
