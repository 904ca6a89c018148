//! Page-shell handlers.
//!
//! The console UI itself is an external collaborator; these handlers
//! serve the minimal shells it boots from. They exist to exercise both
//! consumers of the access gate: the dashboard renders its admin-only
//! widget block conditionally, and the user administration page sits
//! behind the role-gate middleware entirely.

use crate::routes::AppState;
use axum::{extract::State, response::Html, Extension};
use axum_extra::extract::cookie::CookieJar;
use session_core::claims::Claims;
use session_core::{codec, gate};
use std::sync::Arc;
use tracing::instrument;

/// Handler for GET /login
///
/// The login entry point. The route guard sends authenticated sessions
/// away from here before this handler runs.
pub async fn login_page() -> Html<&'static str> {
    Html(
        "<!doctype html>\n<title>Console sign-in</title>\n\
         <main id=\"login-root\"></main>\n",
    )
}

/// Handler for GET /admin/dashboard
///
/// The default authenticated landing page. The admin widget block is
/// emitted only when the access gate allows the session's roles; the
/// page itself only required an authenticated session, so a non-admin
/// sees the shell without the block rather than a denial.
#[instrument(skip_all, name = "gateway.handlers.dashboard")]
pub async fn dashboard(State(state): State<Arc<AppState>>, jar: CookieJar) -> Html<String> {
    // Single synchronous read of the cookie the guard already admitted
    let claims = jar
        .get(&state.policy.cookie_name)
        .and_then(|cookie| codec::decode(cookie.value()).ok());

    let show_admin_widgets =
        gate::authorize(claims.as_ref(), &state.admin_roles).is_allowed();

    let mut body = String::from(
        "<!doctype html>\n<title>Console dashboard</title>\n\
         <main id=\"dashboard-root\">\n",
    );
    if show_admin_widgets {
        body.push_str("  <section id=\"admin-widgets\"></section>\n");
    }
    body.push_str("</main>\n");

    Html(body)
}

/// Handler for GET /admin/users
///
/// Admin-only page shell. Reaching this handler means the role-gate
/// middleware already allowed the request and stored the claims in
/// extensions.
#[instrument(skip_all, name = "gateway.handlers.users")]
pub async fn users(Extension(claims): Extension<Claims>) -> Html<String> {
    tracing::debug!(target: "gateway.handlers.users", "Serving user administration shell");

    let display = claims.name.as_deref().unwrap_or(claims.sub.as_str());
    Html(format!(
        "<!doctype html>\n<title>User administration</title>\n\
         <main id=\"users-root\" data-operator=\"{display}\"></main>\n"
    ))
}
