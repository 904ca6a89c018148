//! Token decoding and expiry checking.
//!
//! An access token is an opaque signed credential with the compact
//! three-segment shape `header.payload.signature`. Only the middle
//! segment is read here: it is base64url-decoded and parsed as UTF-8
//! JSON into [`Claims`]. The header and signature segments are never
//! interpreted.
//!
//! # Security
//!
//! - Tokens are size-checked BEFORE any parsing (DoS prevention)
//! - No signature verification happens in this layer; the expiry check
//!   exists for UX only and must not be relied on as a security control
//! - All failure paths return a tagged error value; nothing panics

use crate::claims::Claims;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use thiserror::Error;

/// Maximum allowed token size in bytes (8KB).
///
/// Typical tokens are a few hundred bytes. Anything larger is rejected
/// before base64 decoding or JSON parsing touches it, so an oversized
/// token costs almost nothing to refuse.
pub const MAX_TOKEN_SIZE_BYTES: usize = 8192;

/// Errors that can occur while decoding a token.
///
/// Decode errors never escape as uncaught faults: callers that only need
/// a validity boolean treat every variant as "invalid".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Token is empty, oversized, or does not split into exactly three segments.
    #[error("token is not a three-segment compact credential")]
    MalformedToken,

    /// The middle (payload) segment is empty.
    #[error("token payload segment is empty")]
    MissingPayload,

    /// The payload segment is not valid base64url-encoded UTF-8 JSON,
    /// or the JSON lacks a required claim.
    #[error("token payload could not be decoded")]
    PayloadDecodeError,
}

/// Decode the claims from a compact token.
///
/// # Errors
///
/// - [`DecodeError::MalformedToken`] - empty, oversized, or not three
///   dot-separated segments
/// - [`DecodeError::MissingPayload`] - middle segment is empty
/// - [`DecodeError::PayloadDecodeError`] - payload is not base64url
///   UTF-8 JSON, or is missing the `exp` claim
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    // Size check first (DoS prevention)
    if token.len() > MAX_TOKEN_SIZE_BYTES {
        tracing::debug!(
            target: "session.codec",
            token_size = token.len(),
            max_size = MAX_TOKEN_SIZE_BYTES,
            "Token rejected: size exceeds maximum allowed"
        );
        return Err(DecodeError::MalformedToken);
    }

    // Compact format: header.payload.signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        tracing::debug!(
            target: "session.codec",
            parts = parts.len(),
            "Token rejected: not a three-segment credential"
        );
        return Err(DecodeError::MalformedToken);
    }

    let payload = parts.get(1).ok_or(DecodeError::MalformedToken)?;
    if payload.is_empty() {
        tracing::debug!(target: "session.codec", "Token rejected: empty payload segment");
        return Err(DecodeError::MissingPayload);
    }

    // Some issuers pad the payload segment; the compact form does not.
    // Accept both by stripping trailing padding before the no-pad decode.
    let payload_bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| {
            tracing::debug!(target: "session.codec", error = %e, "Failed to decode payload base64url");
            DecodeError::PayloadDecodeError
        })?;

    let claims: Claims = serde_json::from_slice(&payload_bytes).map_err(|e| {
        tracing::debug!(target: "session.codec", error = %e, "Failed to parse payload JSON");
        DecodeError::PayloadDecodeError
    })?;

    Ok(claims)
}

/// Pure expiry predicate used on the navigation hot path.
///
/// Returns `false` for any token that fails to decode, and `true` only
/// when `exp` is strictly greater than the current time. A token whose
/// `exp` equals "now" is already expired. This function never panics.
#[must_use]
pub fn is_current(token: &str) -> bool {
    is_current_at(token, chrono::Utc::now().timestamp())
}

/// Deterministic expiry check against an explicit `now` timestamp.
///
/// Prefer [`is_current`] in production code. This variant exists so that
/// boundary conditions can be unit-tested without wall-clock dependence.
pub(crate) fn is_current_at(token: &str, now: i64) -> bool {
    match decode(token) {
        Ok(claims) => claims.exp > now,
        Err(_) => false,
    }
}
