//! x402 payment gate.
//!
//! A request is treated as paid when it carries any non-empty value in one
//! of the payment headers; otherwise the endpoint answers 402 with a
//! machine-readable `PaymentRequirements` descriptor. No signature or
//! settlement verification happens here - a deployment wanting real x402
//! compliance would hand the header value to a facilitator service before
//! accepting it.

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::config::PaymentConfig;
use crate::types::{AppError, AppResult};

/// Primary payment header carrying the opaque payment token.
pub const PAYMENT_HEADER: &str = "x-payment";
/// Alternate header name accepted for compatibility.
pub const PAYMENT_HEADER_ALT: &str = "x402-payment";

/// Static pricing for one paid endpoint, in micro USDC.
#[derive(Debug, Clone, Copy)]
pub struct ServicePricing {
    pub name: &'static str,
    pub route: &'static str,
    pub description: &'static str,
    pub price_label: &'static str,
    pub max_amount_required: &'static str,
}

pub mod pricing {
    use super::ServicePricing;

    pub const TRANSLATE: ServicePricing = ServicePricing {
        name: "translate",
        route: "/translate",
        description: "Chinese-English phrase translation",
        price_label: "$0.001",
        max_amount_required: "1000",
    };

    pub const CODE_REVIEW: ServicePricing = ServicePricing {
        name: "code-review",
        route: "/code-review",
        description: "Static code review - detects common issues and leaked credentials",
        price_label: "$0.01",
        max_amount_required: "10000",
    };

    pub const SUMMARIZE: ServicePricing = ServicePricing {
        name: "summarize",
        route: "/summarize",
        description: "Extractive text summarization",
        price_label: "$0.005",
        max_amount_required: "5000",
    };

    pub const SERVICES: [ServicePricing; 3] = [TRANSLATE, CODE_REVIEW, SUMMARIZE];
}

/// Payment descriptor advertised in a 402 response, one per endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequirements {
    pub scheme: String,
    pub network: String,
    /// String integer in the asset's smallest unit (micro USDC).
    pub max_amount_required: String,
    /// Absolute URL of the paid resource.
    pub resource: String,
    pub pay_to: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_timeout_seconds: Option<u32>,
    /// Bazaar-style discovery schema for the endpoint's input and output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<serde_json::Value>,
}

impl PaymentRequirements {
    pub fn for_service(
        config: &PaymentConfig,
        pricing: ServicePricing,
        output_schema: Option<serde_json::Value>,
    ) -> Self {
        Self {
            scheme: "exact".to_string(),
            network: config.network.clone(),
            max_amount_required: pricing.max_amount_required.to_string(),
            resource: format!("{}{}", config.base_url.trim_end_matches('/'), pricing.route),
            pay_to: config.pay_to.clone(),
            description: pricing.description.to_string(),
            asset: config.asset.clone(),
            max_timeout_seconds: Some(60),
            output_schema,
        }
    }
}

/// Let the request through when a payment header is present, otherwise fail
/// with the 402 descriptor. The header value is treated as boolean-present
/// and never parsed.
pub fn require_payment(headers: &HeaderMap, requirements: &PaymentRequirements) -> AppResult<()> {
    let paid = [PAYMENT_HEADER, PAYMENT_HEADER_ALT].iter().any(|name| {
        headers
            .get(*name)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| !value.is_empty())
    });

    if paid {
        Ok(())
    } else {
        Err(AppError::PaymentRequired(Box::new(requirements.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn test_requirements() -> PaymentRequirements {
        let config = PaymentConfig {
            pay_to: "0xda53D50572B8124A6B9d6d147d532Db59ABe0610".to_string(),
            network: "base".to_string(),
            base_url: "http://localhost:3402".to_string(),
            asset: None,
        };
        PaymentRequirements::for_service(&config, pricing::TRANSLATE, None)
    }

    #[test]
    fn missing_header_is_unpaid() {
        let headers = HeaderMap::new();
        let err = require_payment(&headers, &test_requirements()).unwrap_err();
        match err {
            AppError::PaymentRequired(req) => {
                assert_eq!(req.scheme, "exact");
                assert_eq!(req.max_amount_required, "1000");
                assert_eq!(req.resource, "http://localhost:3402/translate");
            }
            other => panic!("expected PaymentRequired, got {other:?}"),
        }
    }

    #[test]
    fn any_nonempty_token_is_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert(PAYMENT_HEADER, HeaderValue::from_static("opaque-token"));
        assert!(require_payment(&headers, &test_requirements()).is_ok());
    }

    #[test]
    fn alternate_header_is_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert(PAYMENT_HEADER_ALT, HeaderValue::from_static("t"));
        assert!(require_payment(&headers, &test_requirements()).is_ok());
    }

    #[test]
    fn empty_header_value_is_unpaid() {
        let mut headers = HeaderMap::new();
        headers.insert(PAYMENT_HEADER, HeaderValue::from_static(""));
        assert!(require_payment(&headers, &test_requirements()).is_err());
    }

    #[test]
    fn resource_url_joins_cleanly_with_trailing_slash() {
        let config = PaymentConfig {
            pay_to: "0xabc".to_string(),
            network: "base".to_string(),
            base_url: "https://example.com/".to_string(),
            asset: None,
        };
        let req = PaymentRequirements::for_service(&config, pricing::SUMMARIZE, None);
        assert_eq!(req.resource, "https://example.com/summarize");
    }
}
