// Error taxonomy shared by all endpoints

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::payment::PaymentRequirements;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidInput(String),

    #[error("Payment required")]
    PaymentRequired(Box<PaymentRequirements>),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn invalid(message: impl Into<String>) -> Self {
        AppError::InvalidInput(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidInput(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            AppError::PaymentRequired(requirements) => (
                StatusCode::PAYMENT_REQUIRED,
                Json(json!({
                    "error": "Payment Required",
                    "x402": { "accepts": [*requirements] },
                })),
            )
                .into_response(),
        }
    }
}
