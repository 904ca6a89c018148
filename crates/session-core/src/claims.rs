//! Decoded token claims.
//!
//! Claims carry identity, expiry, and the role names used for
//! coarse-grained authorization. Roles arrive in one of two payload
//! shapes: a flat `roles` list, or a nested `realm_access.roles` list.
//! The `sub` and `email` fields are redacted in Debug output to prevent
//! exposure in logs.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Realm-level access block carried by some identity providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealmAccess {
    /// Realm role names.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Claims decoded from the payload segment of an access token.
///
/// Unknown payload fields are ignored. `exp` is required; a payload
/// without it does not decode. A payload with neither `roles` nor
/// `realm_access.roles` yields an empty role set, which is not an error.
#[derive(Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (stable user identifier) - redacted in Debug output.
    pub sub: String,

    /// Display name, if the provider supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Email address - redacted in Debug output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Expiration timestamp (Unix epoch seconds).
    pub exp: i64,

    /// Flat role list (one of the two accepted role shapes).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    /// Nested realm-access role block (the other accepted shape).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm_access: Option<RealmAccess>,
}

/// Custom Debug implementation that redacts `sub` and `email`.
impl fmt::Debug for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claims")
            .field("sub", &"[REDACTED]")
            .field("name", &self.name)
            .field("email", &self.email.as_ref().map(|_| "[REDACTED]"))
            .field("exp", &self.exp)
            .field("roles", &self.roles)
            .field("realm_access", &self.realm_access)
            .finish()
    }
}

impl Claims {
    /// Effective role names as a set.
    ///
    /// The flat `roles` list wins when non-empty; otherwise the nested
    /// `realm_access.roles` list is used; otherwise the set is empty.
    /// Roles are always treated as a membership set, never positionally.
    #[must_use]
    pub fn role_set(&self) -> HashSet<&str> {
        if !self.roles.is_empty() {
            return self.roles.iter().map(String::as_str).collect();
        }

        self.realm_access
            .as_ref()
            .map(|ra| ra.roles.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Check whether the effective role set contains a specific role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.role_set().contains(role)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn base_claims() -> Claims {
        Claims {
            sub: "user-1".to_string(),
            name: None,
            email: None,
            exp: 1_700_000_000,
            roles: Vec::new(),
            realm_access: None,
        }
    }

    #[test]
    fn test_debug_redacts_sub_and_email() {
        let claims = Claims {
            sub: "secret-user-id".to_string(),
            email: Some("alice@example.com".to_string()),
            ..base_claims()
        };

        let debug_str = format!("{claims:?}");

        assert!(
            !debug_str.contains("secret-user-id"),
            "Debug output should not contain actual sub value"
        );
        assert!(
            !debug_str.contains("alice@example.com"),
            "Debug output should not contain actual email value"
        );
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_role_set_from_flat_roles() {
        let claims = Claims {
            roles: vec!["admin".to_string(), "merchant".to_string()],
            ..base_claims()
        };

        let roles = claims.role_set();
        assert!(roles.contains("admin"));
        assert!(roles.contains("merchant"));
        assert!(!roles.contains("guest"));
    }

    #[test]
    fn test_role_set_from_realm_access() {
        let claims = Claims {
            realm_access: Some(RealmAccess {
                roles: vec!["merchant".to_string()],
            }),
            ..base_claims()
        };

        assert!(claims.has_role("merchant"));
        assert!(!claims.has_role("admin"));
    }

    #[test]
    fn test_flat_roles_win_over_realm_access() {
        let claims = Claims {
            roles: vec!["admin".to_string()],
            realm_access: Some(RealmAccess {
                roles: vec!["guest".to_string()],
            }),
            ..base_claims()
        };

        assert!(claims.has_role("admin"));
        assert!(!claims.has_role("guest"));
    }

    #[test]
    fn test_missing_both_role_shapes_is_empty_set() {
        let claims = base_claims();
        assert!(claims.role_set().is_empty());
        assert!(!claims.has_role("admin"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "sub": "user-1",
            "exp": 1700000000,
            "roles": ["admin"],
            "aud": "console",
            "custom_claim": {"nested": true}
        }"#;

        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert!(claims.has_role("admin"));
    }

    #[test]
    fn test_missing_exp_fails_deserialization() {
        let json = r#"{"sub": "user-1", "roles": []}"#;
        let result: Result<Claims, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialization_round_trip() {
        let claims = Claims {
            name: Some("Alice".to_string()),
            roles: vec!["admin".to_string()],
            ..base_claims()
        };

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.sub, claims.sub);
        assert_eq!(deserialized.exp, claims.exp);
        assert_eq!(deserialized.roles, claims.roles);
        assert_eq!(deserialized.name, claims.name);
    }
}
