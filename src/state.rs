//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the HTTP side of the application. The state is initialized
//! once during startup and then cloned for each request handler through Axum's state
//! extraction.
//!
//! The state includes:
//! - HTTP client for Discord REST requests
//! - OAuth2 client for Discord authentication
//! - Dispatch handle for the login notification queue
//! - Discord API base URL (configurable so tests can point at a mock server)

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};

use crate::service::notification::NotificationService;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and then cloned (cheaply, as every
/// field is reference-counted or otherwise cheap to clone) for each incoming
/// request via Axum's state extraction. The HTTP side and the bot session
/// share no mutable state; the notification queue is the single handoff
/// point between them.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for Discord REST API requests.
    ///
    /// Configured with redirects disabled (SSRF hardening, also required by
    /// the oauth2 crate) and a request timeout so a stalled Discord endpoint
    /// cannot pin an HTTP worker indefinitely.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord authentication flow.
    ///
    /// Handles generating login URLs and exchanging authorization codes for
    /// access tokens.
    pub oauth_client: OAuth2Client,

    /// Base URL of the Discord REST API, without a trailing slash.
    pub api_base_url: String,

    /// Dispatch handle for posting login notifications to the log channel.
    pub notifier: NotificationService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during startup after all dependencies have been
    /// initialized; the result is handed to the Axum router.
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        api_base_url: String,
        notifier: NotificationService,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            api_base_url,
            notifier,
        }
    }
}
