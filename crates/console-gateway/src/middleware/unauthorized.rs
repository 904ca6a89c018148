//! 401 observer middleware.
//!
//! A 401 observed anywhere in the application is fatal to the current
//! session: it forces logout rather than being retried. This layer is
//! installed exactly once, at the router root, and delegates to
//! [`SessionStore::handle_unauthorized`], which clears at most once per
//! observation window; requests that race in after logout see an empty
//! store and trigger nothing further.
//!
//! [`SessionStore::handle_unauthorized`]: session_core::session::SessionStore::handle_unauthorized

use crate::routes::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Observe every response; force logout on the first 401.
pub async fn observe_unauthorized(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let response = next.run(req).await;

    if response.status() == StatusCode::UNAUTHORIZED && state.sessions.handle_unauthorized() {
        tracing::info!(
            target: "gateway.middleware.unauthorized",
            "401 observed, session force-cleared"
        );
    }

    response
}
