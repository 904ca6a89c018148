//! Console Gateway Service Library
//!
//! This library provides the session gateway that fronts the back-office
//! console: it holds the browsing session, guards page navigations, and
//! exposes the login/logout/session endpoints the console UI calls.
//!
//! # Architecture
//!
//! ```text
//! routes/mod.rs -> middleware/*.rs -> handlers/*.rs -> session-core
//! ```
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `errors` - Error types with HTTP status code mapping
//! - `handlers` - HTTP request handlers
//! - `middleware` - Route guard, role gate, and 401 observer
//! - `routes` - Axum router setup

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
