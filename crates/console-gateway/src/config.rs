//! Console gateway configuration.
//!
//! Configuration is loaded from environment variables with sensible
//! defaults for every knob; only malformed values are errors.

use session_core::guard::{GuardPolicy, DEFAULT_COOKIE_NAME, DEFAULT_LANDING_PATH, DEFAULT_LOGIN_PATH};
use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default server bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default role names that grant access to admin-only surfaces.
pub const DEFAULT_ADMIN_ROLES: &str = "admin";

/// Default guard-exempt path prefixes.
pub const DEFAULT_EXEMPT_PATHS: &str = "/api/auth,/assets,/favicon.ico,/health";

/// Console gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: "0.0.0.0:8080").
    pub bind_address: String,

    /// Login entry point path.
    pub login_path: String,

    /// Default authenticated landing path.
    pub landing_path: String,

    /// Name of the session cookie holding the raw token.
    pub cookie_name: String,

    /// Path prefixes excluded from route-guard evaluation.
    pub exempt_paths: Vec<String>,

    /// Role names that grant access to admin-only surfaces.
    pub admin_roles: Vec<String>,

    /// Whether session cookies carry the `Secure` attribute.
    pub secure_cookies: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid path configuration: {0}")]
    InvalidPath(String),

    #[error("Invalid boolean flag: {0}")]
    InvalidFlag(String),
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPath` when a configured path does not
    /// start with `/` or the login and landing paths are equal, and
    /// `ConfigError::InvalidFlag` when a boolean knob is neither `true`
    /// nor `false`.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let login_path = vars
            .get("CONSOLE_LOGIN_PATH")
            .cloned()
            .unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string());

        let landing_path = vars
            .get("CONSOLE_LANDING_PATH")
            .cloned()
            .unwrap_or_else(|| DEFAULT_LANDING_PATH.to_string());

        for (name, value) in [
            ("CONSOLE_LOGIN_PATH", &login_path),
            ("CONSOLE_LANDING_PATH", &landing_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::InvalidPath(format!(
                    "{name} must start with '/', got '{value}'"
                )));
            }
        }

        // Equal paths would redirect an authenticated navigation to the
        // login entry point back to itself forever.
        if login_path == landing_path {
            return Err(ConfigError::InvalidPath(format!(
                "CONSOLE_LOGIN_PATH and CONSOLE_LANDING_PATH must differ, both are '{login_path}'"
            )));
        }

        let cookie_name = vars
            .get("SESSION_COOKIE_NAME")
            .cloned()
            .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string());

        let exempt_paths = split_list(
            vars.get("GUARD_EXEMPT_PATHS")
                .map_or(DEFAULT_EXEMPT_PATHS, String::as_str),
        );

        let admin_roles = split_list(
            vars.get("CONSOLE_ADMIN_ROLES")
                .map_or(DEFAULT_ADMIN_ROLES, String::as_str),
        );

        let secure_cookies = match vars.get("SECURE_COOKIES").map(String::as_str) {
            None => false,
            Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(ConfigError::InvalidFlag(format!(
                    "SECURE_COOKIES must be 'true' or 'false', got '{other}'"
                )));
            }
        };

        Ok(Config {
            bind_address,
            login_path,
            landing_path,
            cookie_name,
            exempt_paths,
            admin_roles,
            secure_cookies,
        })
    }

    /// Derive the route-guard policy from this configuration.
    #[must_use]
    pub fn guard_policy(&self) -> GuardPolicy {
        GuardPolicy {
            login_path: self.login_path.clone(),
            landing_path: self.landing_path.clone(),
            cookie_name: self.cookie_name.clone(),
            exempt_prefixes: self.exempt_paths.clone(),
        }
    }
}

/// Split a comma-separated list, trimming whitespace and dropping empties.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
