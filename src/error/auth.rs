use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors that can occur on the OAuth2 login path.
///
/// Each variant is terminal for a single `/callback` request only; none of
/// them affect other in-flight requests or the process itself.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The `/callback` request did not include a `code` query parameter.
    ///
    /// The user arrived at the callback URL without going through Discord's
    /// consent screen, or the provider redirected without a code.
    /// Results in a 400 Bad Request response.
    #[error("Error: No code provided")]
    MissingCode,

    /// The authorization code could not be exchanged for an access token.
    ///
    /// Covers a non-200 token endpoint response, a response body without an
    /// access token, and request timeouts. The provider's error text is kept
    /// for diagnostics. A replayed single-use code lands here as well.
    /// Results in a 500 Internal Server Error response.
    #[error("Error getting access token: {0}")]
    TokenExchange(String),

    /// The user profile lookup failed after a successful token exchange.
    ///
    /// Covers transport failures and responses missing identity fields such
    /// as the username. Results in a 500 Internal Server Error response.
    #[error("Error fetching user info: {0}")]
    ProfileFetch(String),
}

/// Converts authentication errors into HTTP responses.
///
/// A missing code is the caller's fault and maps to 400 Bad Request; token
/// exchange and profile fetch failures are upstream faults and map to 500
/// with the provider's error text in the body.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingCode => StatusCode::BAD_REQUEST,
            Self::TokenExchange(_) | Self::ProfileFetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
