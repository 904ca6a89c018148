//! Health check handler.

/// Handler for GET /health
///
/// Liveness probe; guard-exempt by default policy.
pub async fn health_check() -> &'static str {
    "OK"
}
