use crate::analyzers::{ReviewResult, SummaryResult, TranslationResult};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

// API Request/Response types
//
// Required fields are Option<String> so that an absent field surfaces as a
// 400 "missing parameter" instead of a deserialization failure.

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct TranslateResponse {
    #[serde(flatten)]
    pub result: TranslationResult,
    pub paid: bool,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CodeReviewRequest {
    pub code: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct CodeReviewResponse {
    #[serde(flatten)]
    pub result: ReviewResult,
    pub paid: bool,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SummarizeRequest {
    pub text: Option<String>,
    #[serde(rename = "maxLength")]
    pub max_length: Option<usize>,
}

#[derive(Debug, serde::Serialize)]
pub struct SummarizeResponse {
    #[serde(flatten)]
    pub result: SummaryResult,
    pub paid: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub wallet: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ServiceDirectory {
    pub name: String,
    pub description: String,
    pub version: String,
    pub network: String,
    #[serde(rename = "payTo")]
    pub pay_to: String,
    pub services: Vec<ServiceInfo>,
}

#[derive(Debug, serde::Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub endpoint: String,
    pub description: String,
    pub price: String,
    pub discoverable: bool,
}
