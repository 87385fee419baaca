use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tracing::info;

use crate::analyzers::translate::translate;
use crate::models::{AppState, TranslateRequest, TranslateResponse};
use crate::payment::{self, pricing, PaymentRequirements};
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/translate", post(translate_handler))
        .with_state(state)
}

async fn translate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> AppResult<Json<TranslateResponse>> {
    payment::require_payment(&headers, &requirements(&state))?;

    // Malformed bodies are treated the same as a missing text field
    let Json(request) = payload.map_err(|_| AppError::invalid("Missing text parameter"))?;
    let text = request.text.as_deref().unwrap_or_default();
    let from = request.from.as_deref().unwrap_or("auto");
    let to = request.to.as_deref().unwrap_or("en");

    let result = translate(text, from, to)?;
    info!(from = %result.from, to = %result.to, "translate request served");

    Ok(Json(TranslateResponse { result, paid: true }))
}

fn requirements(state: &AppState) -> PaymentRequirements {
    PaymentRequirements::for_service(
        &state.config.payment,
        pricing::TRANSLATE,
        Some(json!({
            "input": {
                "bodyFields": {
                    "text": { "type": "string", "description": "Text to translate", "required": true },
                    "from": { "type": "string", "description": "Source language (auto/en/zh)" },
                    "to": { "type": "string", "description": "Target language (en/zh)" },
                },
            },
            "output": {
                "translated": { "type": "string" },
                "from": { "type": "string" },
                "to": { "type": "string" },
            },
        })),
    )
}
