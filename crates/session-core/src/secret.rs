//! Secret types for protecting sensitive values from accidental logging.
//!
//! This module re-exports types from the [`secrecy`] crate. Use them for
//! all token material held by the gateway: the raw access token in the
//! session store and any request body that carries one.
//!
//! The key property is that `SecretString` implements `Debug` with
//! redaction, so any struct that derives `Debug` while holding a secret
//! gets safe logging behavior for free. Secrets are zeroized on drop.
//!
//! # Example
//!
//! ```rust
//! use session_core::secret::{ExposeSecret, SecretString};
//!
//! #[derive(Debug)]
//! struct StoredSession {
//!     subject: String,
//!     token: SecretString, // Debug shows "[REDACTED]"
//! }
//!
//! let session = StoredSession {
//!     subject: "alice".to_string(),
//!     token: SecretString::from("eyJhbGciOi..."),
//! };
//!
//! // Safe: token is redacted
//! println!("{:?}", session);
//!
//! // Access requires an explicit call
//! let raw: &str = session.token.expose_secret();
//! ```

// Re-export the main types from secrecy
pub use secrecy::{ExposeSecret, SecretBox, SecretString};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let secret = SecretString::from("header.payload.signature");
        let debug_str = format!("{secret:?}");

        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("payload"));
    }

    #[test]
    fn test_expose_secret_returns_inner_value() {
        let secret = SecretString::from("raw-token");
        assert_eq!(secret.expose_secret(), "raw-token");
    }

    #[test]
    fn test_clone_works() {
        let secret = SecretString::from("cloneable");
        let cloned = secret.clone();
        assert_eq!(cloned.expose_secret(), "cloneable");
    }
}
