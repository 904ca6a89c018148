//! Role-based access decision.
//!
//! A single set-intersection predicate used both for whole-route
//! protection and for conditional UI rendering (admin-only widgets).
//! The semantics live here so they stay independently testable instead
//! of being duplicated at call sites.

use crate::claims::Claims;
use std::collections::HashSet;

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The session satisfies the required capabilities.
    Allow,
    /// The session is absent or lacks every required capability.
    Deny,
}

impl Access {
    /// `true` for [`Access::Allow`].
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Access::Allow)
    }
}

/// Decide whether a session's claims satisfy a required-role set.
///
/// - Absent claims (no token, or decode failed) deny unconditionally,
///   even when `required_roles` is empty: absence of a session is never
///   an authorized state for a protected capability.
/// - An empty `required_roles` set allows any authenticated session.
/// - Otherwise the decision is `Allow` iff the intersection of the
///   claims' effective role set and `required_roles` is non-empty.
///
/// Pure decision function with no side effects; callers act on `Deny`.
#[must_use]
pub fn authorize(claims: Option<&Claims>, required_roles: &HashSet<String>) -> Access {
    let Some(claims) = claims else {
        return Access::Deny;
    };

    if required_roles.is_empty() {
        return Access::Allow;
    }

    let held = claims.role_set();
    if required_roles.iter().any(|role| held.contains(role.as_str())) {
        Access::Allow
    } else {
        Access::Deny
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn claims_with_roles(roles: &[&str]) -> Claims {
        Claims {
            sub: "user-1".to_string(),
            name: None,
            email: None,
            exp: 1_900_000_000,
            roles: roles.iter().map(ToString::to_string).collect(),
            realm_access: None,
        }
    }

    fn required(roles: &[&str]) -> HashSet<String> {
        roles.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_any_match_allows() {
        let claims = claims_with_roles(&["admin"]);
        let result = authorize(Some(&claims), &required(&["admin", "merchant"]));
        assert_eq!(result, Access::Allow);
    }

    #[test]
    fn test_no_match_denies() {
        let claims = claims_with_roles(&["guest"]);
        let result = authorize(Some(&claims), &required(&["admin", "merchant"]));
        assert_eq!(result, Access::Deny);
    }

    #[test]
    fn test_empty_required_set_allows_authenticated_session() {
        let claims = claims_with_roles(&[]);
        assert_eq!(authorize(Some(&claims), &required(&[])), Access::Allow);
    }

    #[test]
    fn test_absent_claims_denies_even_with_empty_required_set() {
        assert_eq!(authorize(None, &required(&[])), Access::Deny);
    }

    #[test]
    fn test_absent_claims_denies_with_required_roles() {
        assert_eq!(authorize(None, &required(&["admin"])), Access::Deny);
    }

    #[test]
    fn test_order_independence() {
        let claims = claims_with_roles(&["merchant", "admin"]);
        assert_eq!(
            authorize(Some(&claims), &required(&["admin"])),
            authorize(Some(&claims), &required(&["merchant"]))
        );
    }

    #[test]
    fn test_partial_role_name_does_not_match() {
        let claims = claims_with_roles(&["administrator"]);
        assert_eq!(
            authorize(Some(&claims), &required(&["admin"])),
            Access::Deny
        );
    }

    #[test]
    fn test_is_allowed_helper() {
        assert!(Access::Allow.is_allowed());
        assert!(!Access::Deny.is_allowed());
    }
}
