//! Session endpoints: login, logout, and current-session lookup.
//!
//! Login accepts an access token issued by the upstream identity
//! provider, mirrors its shape/expiry checks (no signature verification
//! happens in this layer), derives roles, and persists the session plus
//! its cookie. Logout is idempotent. The session lookup returns the
//! identity and effective roles every protected view reads.

use crate::errors::GatewayError;
use crate::routes::AppState;
use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use session_core::claims::Claims;
use session_core::codec;
use std::sync::Arc;
use tracing::instrument;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Raw access token from the identity provider. Redacted in Debug.
    pub access_token: SecretString,
}

/// Response for login and session lookup.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    /// Subject (stable user identifier).
    pub sub: String,

    /// Display name, if present in the claims.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Email, if present in the claims.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Effective role names, sorted for stable output.
    pub roles: Vec<String>,

    /// Token expiration timestamp (Unix epoch seconds).
    pub exp: i64,
}

impl SessionResponse {
    fn from_claims(claims: &Claims) -> Self {
        let mut roles: Vec<String> = claims.role_set().iter().map(ToString::to_string).collect();
        roles.sort();

        Self {
            sub: claims.sub.clone(),
            name: claims.name.clone(),
            email: claims.email.clone(),
            roles,
            exp: claims.exp,
        }
    }
}

/// Handler for POST /api/auth/login
///
/// Decodes and expiry-checks the submitted token, persists the session,
/// and sets the session cookie. A structurally invalid or expired token
/// creates no session and sets no cookie.
///
/// # Errors
///
/// Returns `GatewayError::InvalidToken` for any decode failure or an
/// expired token (generic client message, detail logged server-side).
#[instrument(skip_all, name = "gateway.handlers.login")]
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), GatewayError> {
    let raw_token = payload.access_token.expose_secret();

    let claims = codec::decode(raw_token)
        .map_err(|e| GatewayError::InvalidToken(e.to_string()))?;

    if !codec::is_current(raw_token) {
        return Err(GatewayError::InvalidToken("token already expired".to_string()));
    }

    let roles = claims
        .role_set()
        .iter()
        .map(ToString::to_string)
        .collect();
    state
        .sessions
        .set(SecretString::from(raw_token.to_string()), roles);

    let mut cookie = Cookie::new(state.config.cookie_name.clone(), raw_token.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(state.config.secure_cookies);

    tracing::info!(target: "gateway.handlers.login", "Session established");

    Ok((jar.add(cookie), Json(SessionResponse::from_claims(&claims))))
}

/// Handler for POST /api/auth/logout
///
/// Idempotent: clears the session store and removes the session cookie.
/// Logging out without a session is a successful no-op. The removal
/// cookie is emitted unconditionally, not only when the request carried
/// the cookie, so a client that lost its jar still gets the deletion
/// instruction.
#[instrument(skip_all, name = "gateway.handlers.logout")]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, StatusCode) {
    state.sessions.clear();

    let mut removal = Cookie::from(state.config.cookie_name.clone());
    removal.set_path("/");
    removal.make_removal();

    tracing::info!(target: "gateway.handlers.logout", "Session cleared");

    (jar.add(removal), StatusCode::NO_CONTENT)
}

/// Handler for GET /api/auth/session
///
/// Returns the current session's identity and effective roles.
///
/// # Errors
///
/// Returns `GatewayError::Unauthenticated` when no session exists or the
/// stored token no longer decodes; the 401 observer then clears the
/// store, so the failure also destroys the session.
#[instrument(skip_all, name = "gateway.handlers.session")]
pub async fn get_session(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionResponse>, GatewayError> {
    let session = state.sessions.get().ok_or(GatewayError::Unauthenticated)?;

    let claims = codec::decode(session.token.expose_secret())
        .map_err(|_| GatewayError::Unauthenticated)?;

    Ok(Json(SessionResponse::from_claims(&claims)))
}
