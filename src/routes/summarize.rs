use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tracing::info;

use crate::analyzers::summarize::summarize;
use crate::models::{AppState, SummarizeRequest, SummarizeResponse};
use crate::payment::{self, pricing, PaymentRequirements};
use crate::types::{AppError, AppResult};

const DEFAULT_MAX_LENGTH: usize = 200;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(summarize_handler))
        .with_state(state)
}

async fn summarize_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> AppResult<Json<SummarizeResponse>> {
    payment::require_payment(&headers, &requirements(&state))?;

    let Json(request) = payload.map_err(|_| AppError::invalid("Missing text parameter"))?;
    let text = request.text.as_deref().unwrap_or_default();
    let max_length = request.max_length.unwrap_or(DEFAULT_MAX_LENGTH);

    let result = summarize(text, max_length)?;
    info!(
        ratio = %result.compression_ratio,
        max_length,
        "summarize request served"
    );

    Ok(Json(SummarizeResponse { result, paid: true }))
}

fn requirements(state: &AppState) -> PaymentRequirements {
    PaymentRequirements::for_service(
        &state.config.payment,
        pricing::SUMMARIZE,
        Some(json!({
            "input": {
                "bodyFields": {
                    "text": { "type": "string", "description": "Text to summarize", "required": true },
                    "maxLength": { "type": "number", "description": "Maximum summary length (default: 200)" },
                },
            },
            "output": {
                "summary": { "type": "string" },
                "compressionRatio": { "type": "string" },
            },
        })),
    )
}
