//! HTTP routes for the console gateway.
//!
//! Defines the Axum router and application state.

use crate::config::Config;
use crate::handlers::{health, pages, session_handler};
use crate::middleware::{authorize, guard, unauthorized};
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use session_core::guard::GuardPolicy;
use session_core::session::SessionStore;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Application state shared across handlers and middleware.
///
/// Owns the one [`SessionStore`] for this running client; everything
/// else reads it through this state, never through a global.
pub struct AppState {
    /// Service configuration.
    pub config: Config,

    /// Route-guard policy derived from the configuration.
    pub policy: GuardPolicy,

    /// The current browsing session.
    pub sessions: SessionStore,

    /// Required-role set for admin-only surfaces.
    pub admin_roles: HashSet<String>,
}

impl AppState {
    /// Build the application state from a loaded configuration.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        let policy = config.guard_policy();
        let admin_roles = config.admin_roles.iter().cloned().collect();
        Self {
            config,
            policy,
            sessions: SessionStore::new(),
            admin_roles,
        }
    }
}

/// Build the application routes.
///
/// - `/api/auth/*` - session endpoints (guard-exempt by policy)
/// - `/login`, `/admin/*` - page shells behind the route guard
/// - `/health` - liveness probe
///
/// Layer order (outermost first): timeout, trace, 401 observer, then the
/// route guard on page routes only. The 401 observer is installed exactly
/// once, at the router root, so every response passes it exactly once.
pub fn build_routes(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/auth/login", post(session_handler::login))
        .route("/api/auth/logout", post(session_handler::logout))
        .route("/api/auth/session", get(session_handler::get_session))
        .with_state(state.clone());

    let page_routes = Router::new()
        .route("/login", get(pages::login_page))
        .route("/admin/dashboard", get(pages::dashboard))
        .route(
            "/admin/users",
            get(pages::users)
                .layer(from_fn_with_state(state.clone(), authorize::require_admin)),
        )
        .layer(from_fn_with_state(state.clone(), guard::route_guard))
        .with_state(state.clone());

    api_routes
        .merge(page_routes)
        .route("/health", get(health::health_check))
        .layer(from_fn_with_state(state, unauthorized::observe_unauthorized))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_app_state_from_config() {
        let config = Config::from_vars(&HashMap::new()).unwrap();
        let state = AppState::from_config(config);

        assert!(state.admin_roles.contains("admin"));
        assert_eq!(state.policy.login_path, "/login");
        assert!(state.sessions.get().is_none());
    }
}
