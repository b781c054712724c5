//! OAuth2 login with Discord.
//!
//! The service is organized into separate modules by concern:
//! - `login` - Authorization URL construction (pure, no I/O)
//! - `callback` - Code-for-token exchange and identity lookups

pub mod callback;
pub mod login;

use crate::state::OAuth2Client;

/// Service for the Discord OAuth2 authentication flow.
///
/// Borrows the shared HTTP and OAuth2 clients from application state for the
/// duration of one request. Acts as the orchestration layer between Discord's
/// OAuth endpoints, its REST API, and the controller that invoked it.
pub struct AuthService<'a> {
    /// HTTP client for Discord API requests.
    pub http_client: &'a reqwest::Client,
    /// OAuth2 client for Discord authentication flow.
    pub oauth_client: &'a OAuth2Client,
    /// Base URL of the Discord REST API.
    pub api_base_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        api_base_url: &'a str,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            api_base_url,
        }
    }
}
