use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::models::{AppState, ServiceDirectory, ServiceInfo};
use crate::payment::pricing;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_directory))
        .with_state(state)
}

/// Free discovery endpoint listing every paid service with its price.
async fn service_directory(State(state): State<AppState>) -> Json<ServiceDirectory> {
    let services = pricing::SERVICES
        .iter()
        .map(|service| ServiceInfo {
            name: service.name.to_string(),
            endpoint: format!("POST {}", service.route),
            description: service.description.to_string(),
            price: format!("{} USDC", service.price_label),
            discoverable: true,
        })
        .collect();

    Json(ServiceDirectory {
        name: state.config.service.name.clone(),
        description: state.config.service.description.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        network: state.config.payment.network.clone(),
        pay_to: state.config.payment.pay_to.clone(),
        services,
    })
}
