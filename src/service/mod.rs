//! Business logic orchestration between the HTTP controllers and Discord.

pub mod auth;
pub mod notification;
