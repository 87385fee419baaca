use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tracing::info;

use crate::analyzers::code_review::review;
use crate::models::{AppState, CodeReviewRequest, CodeReviewResponse};
use crate::payment::{self, pricing, PaymentRequirements};
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/code-review", post(code_review_handler))
        .with_state(state)
}

async fn code_review_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CodeReviewRequest>, JsonRejection>,
) -> AppResult<Json<CodeReviewResponse>> {
    payment::require_payment(&headers, &requirements(&state))?;

    let Json(request) = payload.map_err(|_| AppError::invalid("Missing code parameter"))?;
    let code = request.code.as_deref().unwrap_or_default();
    let language = request.language.as_deref().unwrap_or("javascript");

    let result = review(code, language)?;
    info!(score = result.score, grade = %result.grade, "code review served");

    Ok(Json(CodeReviewResponse { result, paid: true }))
}

fn requirements(state: &AppState) -> PaymentRequirements {
    PaymentRequirements::for_service(
        &state.config.payment,
        pricing::CODE_REVIEW,
        Some(json!({
            "input": {
                "bodyFields": {
                    "code": { "type": "string", "description": "Code to review", "required": true },
                    "language": { "type": "string", "description": "Programming language (default: javascript)" },
                },
            },
            "output": {
                "issues": { "type": "array", "description": "List of issues found" },
                "suggestions": { "type": "array", "description": "Improvement suggestions" },
                "score": { "type": "number", "description": "Quality score 0-100" },
                "grade": { "type": "string", "description": "Letter grade A-F" },
            },
        })),
    )
}
