//! Domain models shared across the service and controller layers.

pub mod auth;
