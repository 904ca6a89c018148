//! HTTP request handlers for the console gateway.

pub mod health;
pub mod pages;
pub mod session_handler;
