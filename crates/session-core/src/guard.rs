//! Route-protection decision policy.
//!
//! Given a request path and the cookie-borne token (if any), the policy
//! decides whether the navigation proceeds or redirects. The decision is
//! evaluated once per navigation, before any protected content is
//! produced, and never mutates session state. A decode failure inside
//! the expiry check is treated identically to "expired": the guard fails
//! closed, never open.

use crate::codec;

/// Default login entry point.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Default landing path for already-authenticated sessions.
pub const DEFAULT_LANDING_PATH: &str = "/admin/dashboard";

/// Default name of the cookie carrying the raw token.
pub const DEFAULT_COOKIE_NAME: &str = "token";

/// Outcome of a route-guard evaluation. Terminal for the navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Serve the requested page.
    Proceed,
    /// Redirect the navigation to the given path.
    Redirect(String),
}

/// Path and naming conventions the guard enforces.
#[derive(Debug, Clone)]
pub struct GuardPolicy {
    /// The login entry point.
    pub login_path: String,

    /// Default authenticated landing path.
    pub landing_path: String,

    /// Name of the cookie holding the raw token.
    pub cookie_name: String,

    /// Path prefixes excluded from evaluation entirely (static assets,
    /// the auth API surface, favicon, health probes).
    pub exempt_prefixes: Vec<String>,
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            landing_path: DEFAULT_LANDING_PATH.to_string(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            exempt_prefixes: vec![
                "/api/auth".to_string(),
                "/assets".to_string(),
                "/favicon.ico".to_string(),
                "/health".to_string(),
            ],
        }
    }
}

impl GuardPolicy {
    /// Whether a path is excluded from guard evaluation.
    ///
    /// Evaluated prior to [`GuardPolicy::decide`]; exempt paths are
    /// never redirected, even unauthenticated.
    #[must_use]
    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Decide whether a navigation proceeds or redirects.
    ///
    /// - Already-authenticated sessions are sent away from the login
    ///   entry point to the landing path.
    /// - Absent or expired (or undecodable) tokens are sent to login
    ///   from every other path.
    /// - Everything else proceeds.
    #[must_use]
    pub fn decide(&self, path: &str, token: Option<&str>) -> Decision {
        self.decide_at(path, token, chrono::Utc::now().timestamp())
    }

    /// Deterministic variant of [`GuardPolicy::decide`] against an
    /// explicit `now` timestamp, for boundary testing.
    pub(crate) fn decide_at(&self, path: &str, token: Option<&str>, now: i64) -> Decision {
        // Absent token and decode failure both collapse to "expired"
        let current = token.is_some_and(|t| codec::is_current_at(t, now));

        if path == self.login_path {
            if current {
                tracing::debug!(
                    target: "session.guard",
                    path = %path,
                    "Authenticated navigation to login entry, redirecting to landing"
                );
                return Decision::Redirect(self.landing_path.clone());
            }
            return Decision::Proceed;
        }

        if !current {
            tracing::debug!(
                target: "session.guard",
                path = %path,
                token_present = token.is_some(),
                "Unauthenticated or expired navigation, redirecting to login"
            );
            return Decision::Redirect(self.login_path.clone());
        }

        Decision::Proceed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use session_test_utils::TestTokenBuilder;

    const NOW: i64 = 1_700_000_000;

    fn current_token() -> String {
        TestTokenBuilder::new().expires_at(NOW + 3600).build()
    }

    fn expired_token() -> String {
        TestTokenBuilder::new().expires_at(NOW - 1).build()
    }

    #[test]
    fn test_absent_token_redirects_to_login() {
        let policy = GuardPolicy::default();
        assert_eq!(
            policy.decide_at("/admin/dashboard", None, NOW),
            Decision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_current_token_on_login_redirects_to_landing() {
        let policy = GuardPolicy::default();
        assert_eq!(
            policy.decide_at("/login", Some(&current_token()), NOW),
            Decision::Redirect("/admin/dashboard".to_string())
        );
    }

    #[test]
    fn test_expired_token_redirects_to_login() {
        let policy = GuardPolicy::default();
        assert_eq!(
            policy.decide_at("/admin/users", Some(&expired_token()), NOW),
            Decision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_current_token_proceeds_on_protected_path() {
        let policy = GuardPolicy::default();
        assert_eq!(
            policy.decide_at("/admin/dashboard", Some(&current_token()), NOW),
            Decision::Proceed
        );
    }

    #[test]
    fn test_absent_token_proceeds_on_login_path() {
        let policy = GuardPolicy::default();
        assert_eq!(policy.decide_at("/login", None, NOW), Decision::Proceed);
    }

    #[test]
    fn test_expired_token_proceeds_on_login_path() {
        let policy = GuardPolicy::default();
        assert_eq!(
            policy.decide_at("/login", Some(&expired_token()), NOW),
            Decision::Proceed
        );
    }

    #[test]
    fn test_undecodable_token_treated_as_expired() {
        let policy = GuardPolicy::default();
        assert_eq!(
            policy.decide_at("/admin/users", Some("not-a-token"), NOW),
            Decision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let policy = GuardPolicy::default();
        let boundary = TestTokenBuilder::new().expires_at(NOW).build();
        assert_eq!(
            policy.decide_at("/admin/dashboard", Some(&boundary), NOW),
            Decision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_exempt_prefixes() {
        let policy = GuardPolicy::default();
        assert!(policy.is_exempt("/api/auth/login"));
        assert!(policy.is_exempt("/assets/app.css"));
        assert!(policy.is_exempt("/favicon.ico"));
        assert!(policy.is_exempt("/health"));
        assert!(!policy.is_exempt("/admin/dashboard"));
        assert!(!policy.is_exempt("/login"));
    }

    #[test]
    fn test_custom_paths() {
        let policy = GuardPolicy {
            login_path: "/signin".to_string(),
            landing_path: "/home".to_string(),
            ..GuardPolicy::default()
        };

        assert_eq!(
            policy.decide_at("/signin", Some(&current_token()), NOW),
            Decision::Redirect("/home".to_string())
        );
        assert_eq!(
            policy.decide_at("/anything", None, NOW),
            Decision::Redirect("/signin".to_string())
        );
    }
}
