//! Health check endpoint for container orchestration.
//!
//! A liveness probe for load balancers and orchestrators: returns 200 OK
//! whenever the process can answer HTTP. Scoring has no dependencies to probe.

/// Health check handler.
pub async fn health() -> &'static str {
    "ok"
}
