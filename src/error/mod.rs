//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Authentication errors handle their own response mapping, while
/// generic variants map to 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Configuration is validated before either listener starts, so this
    /// variant is process-fatal and never reaches a request handler.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error on the OAuth login path.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping
    /// (400 for a missing code, 500 for upstream failures).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when external API calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Results in 500 Internal Server Error when
    /// Discord bot operations fail.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error, typically from binding the HTTP listener at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Converts application errors into HTTP responses.
///
/// Authentication errors delegate to their own response handling. Everything
/// else is logged with full details server-side and returned as a generic
/// 500 Internal Server Error to avoid leaking implementation details.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            err => {
                tracing::error!("{}", err);

                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
