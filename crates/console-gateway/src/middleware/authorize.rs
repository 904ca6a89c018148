//! Role-gate middleware for admin-only route groups.
//!
//! Decodes the cookie-borne token into claims and asks the access gate
//! whether the configured admin role set is satisfied. On allow, the
//! claims are stored in request extensions for downstream handlers; on
//! deny, the caller gets 401 (no decodable session) or 403 (session
//! present, insufficient role), never a redirect; redirects are the
//! route guard's job.

use crate::errors::GatewayError;
use crate::routes::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use session_core::{codec, gate};
use std::sync::Arc;
use tracing::instrument;

/// Require one of the configured admin roles.
///
/// # Errors
///
/// - `GatewayError::Unauthenticated` when no decodable token accompanies
///   the request
/// - `GatewayError::InsufficientRole` when claims are present but hold
///   none of the required roles
#[instrument(skip_all, name = "gateway.middleware.authorize")]
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let jar = CookieJar::from_headers(req.headers());
    let claims = jar
        .get(&state.policy.cookie_name)
        .and_then(|cookie| codec::decode(cookie.value()).ok());

    match gate::authorize(claims.as_ref(), &state.admin_roles) {
        gate::Access::Allow => {
            if let Some(claims) = claims {
                // Downstream handlers read the claims from extensions
                req.extensions_mut().insert(claims);
            }
            Ok(next.run(req).await)
        }
        gate::Access::Deny => match claims {
            None => {
                tracing::debug!(
                    target: "gateway.middleware.authorize",
                    "Role gate denied: no decodable session"
                );
                Err(GatewayError::Unauthenticated)
            }
            Some(claims) => {
                let mut provided: Vec<String> =
                    claims.role_set().iter().map(ToString::to_string).collect();
                provided.sort();
                let mut required: Vec<String> = state.admin_roles.iter().cloned().collect();
                required.sort();

                tracing::debug!(
                    target: "gateway.middleware.authorize",
                    required = ?required,
                    "Role gate denied: insufficient role"
                );
                Err(GatewayError::InsufficientRole { required, provided })
            }
        },
    }
}
