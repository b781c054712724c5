//! HTTP request handlers.

pub mod auth;
