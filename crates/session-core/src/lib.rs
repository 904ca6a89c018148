//! Session and authorization primitives shared across the console gateway.
//!
//! This crate holds the contractual core of the back-office console's
//! access control: decoding compact signed tokens into claims, deriving
//! roles, holding the browsing session, and deciding whether a navigation
//! may proceed or must redirect.
//!
//! # Security
//!
//! No cryptographic verification happens in this layer. The gateway only
//! mirrors the expiry/shape checks for UX purposes (avoiding a flash of
//! protected content before redirect); the real trust boundary lives in
//! the upstream identity provider and the services behind it.

#![warn(clippy::pedantic)]

/// Module for decoded token claims and role derivation
pub mod claims;

/// Module for token decoding and expiry checking
pub mod codec;

/// Module for the role-based access decision
pub mod gate;

/// Module for the route-protection decision policy
pub mod guard;

/// Module for secret types that prevent accidental logging
pub mod secret;

/// Module for the process-wide session holder
pub mod session;
