//! Test utilities for the console gateway.
//!
//! Provides builders for structurally valid access tokens so tests never
//! hand-assemble base64 payloads.

pub mod token_builders;

pub use token_builders::TestTokenBuilder;
