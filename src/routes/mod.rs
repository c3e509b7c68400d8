//! HTTP route handlers.
//!
//! The scoring API is never cached; static front-end files get a short
//! public cache. Every request passes through the request ID middleware so
//! all logs within a request can be correlated.

pub mod health;
pub mod risk;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::{SetResponseHeader, SetResponseHeaderLayer};

use crate::config::{AppConfig, CorsConfig, CACHE_CONTROL_API, CACHE_CONTROL_STATIC};
use crate::http::static_files::create_static_service;
use crate::middleware::request_id_layer;

/// Build the CORS layer.
///
/// Permissive unless an explicit origin list is configured. Origins that are
/// not valid header values are skipped with a warning.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.is_permissive() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Creates the Axum router with all routes, cache headers and middleware.
pub fn create_router(config: &AppConfig) -> Router {
    // Scoring API - never cached, body size capped
    let api_routes = Router::new()
        .route("/api/calculate-risk", post(risk::calculate))
        .layer(DefaultBodyLimit::max(config.http.max_body_bytes))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_API),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    let mut router = Router::new().merge(api_routes).merge(health_routes);

    // Static files - everything not matched above
    if config.static_files.enabled {
        router = router.fallback_service(SetResponseHeader::if_not_present(
            create_static_service(&config.static_files),
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));
    }

    router
        .layer(cors_layer(&config.cors))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
