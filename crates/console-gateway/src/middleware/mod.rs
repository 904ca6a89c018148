//! Middleware for the console gateway.
//!
//! # Components
//!
//! - `guard` - Route protection: redirect decisions before any page is served
//! - `authorize` - Role gate for admin-only route groups
//! - `unauthorized` - 401 observer triggering idempotent forced logout

pub mod authorize;
pub mod guard;
pub mod unauthorized;
