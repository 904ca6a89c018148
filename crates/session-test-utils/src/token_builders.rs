//! Builder patterns for test token construction
//!
//! Produces compact three-segment tokens (`header.payload.signature`)
//! with a base64url JSON payload. The signature segment is a fixed
//! placeholder: the gateway never verifies one.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{Duration, Utc};
use serde_json::json;

/// Which payload shape carries the role names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleShape {
    /// Flat top-level `roles` list.
    Flat,
    /// Nested `realm_access.roles` list.
    RealmAccess,
}

/// Builder for creating test access tokens
///
/// # Example
/// ```rust
/// use session_test_utils::TestTokenBuilder;
///
/// let token = TestTokenBuilder::new()
///     .for_user("alice")
///     .with_roles(&["admin"])
///     .expires_in(3600)
///     .build();
///
/// assert_eq!(token.split('.').count(), 3);
/// ```
pub struct TestTokenBuilder {
    sub: String,
    name: Option<String>,
    email: Option<String>,
    roles: Vec<String>,
    role_shape: RoleShape,
    exp: i64,
}

impl TestTokenBuilder {
    /// Create a new token builder with defaults (valid for one hour).
    pub fn new() -> Self {
        Self {
            sub: "test-subject".to_string(),
            name: None,
            email: None,
            roles: Vec::new(),
            role_shape: RoleShape::Flat,
            exp: (Utc::now() + Duration::seconds(3600)).timestamp(),
        }
    }

    /// Set the subject.
    pub fn for_user(mut self, subject: &str) -> Self {
        self.sub = subject.to_string();
        self
    }

    /// Set the display name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Set the email address.
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Carry the roles as a flat top-level `roles` list.
    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(ToString::to_string).collect();
        self.role_shape = RoleShape::Flat;
        self
    }

    /// Carry the roles as a nested `realm_access.roles` list.
    pub fn with_realm_roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(ToString::to_string).collect();
        self.role_shape = RoleShape::RealmAccess;
        self
    }

    /// Set expiration in seconds from now.
    pub fn expires_in(mut self, seconds: i64) -> Self {
        self.exp = (Utc::now() + Duration::seconds(seconds)).timestamp();
        self
    }

    /// Set an absolute expiration timestamp (Unix epoch seconds).
    pub fn expires_at(mut self, timestamp: i64) -> Self {
        self.exp = timestamp;
        self
    }

    /// Build the payload claims as a JSON value.
    pub fn build_claims(&self) -> serde_json::Value {
        let mut claims = json!({
            "sub": self.sub,
            "exp": self.exp,
        });

        if let Some(name) = &self.name {
            claims["name"] = json!(name);
        }
        if let Some(email) = &self.email {
            claims["email"] = json!(email);
        }

        if !self.roles.is_empty() {
            match self.role_shape {
                RoleShape::Flat => {
                    claims["roles"] = json!(self.roles);
                }
                RoleShape::RealmAccess => {
                    claims["realm_access"] = json!({ "roles": self.roles });
                }
            }
        }

        claims
    }

    /// Build the compact three-segment token string.
    pub fn build(self) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(self.build_claims().to_string());
        format!("{header}.{payload}.test-signature")
    }
}

impl Default for TestTokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
