//! Route-guard middleware.
//!
//! Inspects the persisted session cookie before a page is served,
//! redirecting unauthenticated or expired sessions to the login entry
//! point and already-authenticated sessions away from it. Runs once
//! per navigation with no suspension point before the decision; a
//! redirect, once decided, is terminal for that navigation. The guard
//! never mutates session state.

use crate::routes::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tracing::instrument;

/// Route-guard middleware for page navigations.
///
/// Exempt paths (static assets, the auth API surface, favicon, health)
/// bypass evaluation entirely. Everything else goes through
/// [`GuardPolicy::decide`]: a decode failure in the expiry check is
/// treated identically to "expired", so the guard fails closed.
///
/// [`GuardPolicy::decide`]: session_core::guard::GuardPolicy::decide
#[instrument(skip_all, name = "gateway.middleware.guard")]
pub async fn route_guard(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();

    if state.policy.is_exempt(&path) {
        return next.run(req).await;
    }

    let jar = CookieJar::from_headers(req.headers());
    let token = jar
        .get(&state.policy.cookie_name)
        .map(|cookie| cookie.value().to_string());

    match state.policy.decide(&path, token.as_deref()) {
        session_core::guard::Decision::Proceed => next.run(req).await,
        session_core::guard::Decision::Redirect(target) => {
            tracing::debug!(
                target: "gateway.middleware.guard",
                path = %path,
                redirect_to = %target,
                "Navigation redirected"
            );
            Redirect::to(&target).into_response()
        }
    }
}
