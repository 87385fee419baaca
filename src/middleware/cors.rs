// CORS configuration

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, AllowOrigin, CorsLayer};

/// Apply the CORS layer; a "*" entry allows any origin.
pub fn apply_cors(router: Router, allowed_origins: &[String]) -> Router {
    let origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    router.layer(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
