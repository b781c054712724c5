use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    AuthorizationCode, EmptyExtraTokenFields, RequestTokenError, StandardErrorResponse,
    StandardTokenResponse, TokenResponse,
};

use crate::{
    error::{auth::AuthError, AppError},
    model::auth::{DiscordProfile, LoginSummary, UserGuild},
    service::auth::AuthService,
};

type DiscordTokenResponse = StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>;

impl AuthService<'_> {
    /// Handles the OAuth2 callback for one authorization code.
    ///
    /// Exchanges the code for an access token, fetches the user's Discord
    /// profile and guild list with it, and renders the login summary. The
    /// token lives only on this call stack; it is never stored or logged.
    ///
    /// A guild lookup failure is non-fatal and degrades to an empty guild
    /// list, since the identity itself was already established.
    ///
    /// # Arguments
    /// - `authorization_code` - Single-use code from Discord's redirect
    ///
    /// # Returns
    /// - `Ok(LoginSummary)` - Authenticated identity and guild memberships
    /// - `Err(AppError::AuthErr(TokenExchange))` - Provider rejected the code
    ///   or returned no usable token (including a replayed code or a timeout)
    /// - `Err(AppError::AuthErr(ProfileFetch))` - Identity lookup failed
    pub async fn callback(&self, authorization_code: String) -> Result<LoginSummary, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(describe_token_error(e)))?;

        let profile = self.fetch_profile(&token).await?;
        tracing::info!("Authenticated Discord user {} ({})", profile.username, profile.id);

        let guilds = match self.fetch_guilds(&token).await {
            Ok(guilds) => guilds,
            Err(e) => {
                tracing::warn!("Failed to fetch guilds for {}: {}", profile.username, e);
                Vec::new()
            }
        };

        Ok(LoginSummary::new(profile, guilds))
    }

    /// Retrieves the authenticated user's profile with the access token.
    ///
    /// Uses Discord's `/users/@me` endpoint. Any transport failure, non-2xx
    /// status, or response missing identity fields maps to a profile fetch
    /// error.
    async fn fetch_profile(&self, token: &DiscordTokenResponse) -> Result<DiscordProfile, AppError> {
        let access_token = token.access_token().secret();

        let response = self
            .http_client
            .get(format!("{}/users/@me", self.api_base_url))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| AuthError::ProfileFetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(
                AuthError::ProfileFetch(format!("Discord returned {}", response.status())).into(),
            );
        }

        let profile = response
            .json::<DiscordProfile>()
            .await
            .map_err(|e| AuthError::ProfileFetch(e.to_string()))?;

        Ok(profile)
    }

    /// Retrieves the list of guilds the authenticated user is a member of.
    ///
    /// Uses Discord's `/users/@me/guilds` endpoint. The caller treats any
    /// failure here as non-fatal.
    async fn fetch_guilds(&self, token: &DiscordTokenResponse) -> Result<Vec<UserGuild>, AppError> {
        let access_token = token.access_token().secret();

        let response = self
            .http_client
            .get(format!("{}/users/@me/guilds", self.api_base_url))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(
                AuthError::ProfileFetch(format!("Discord returned {}", response.status())).into(),
            );
        }

        let guilds = response.json::<Vec<UserGuild>>().await?;

        Ok(guilds)
    }
}

/// Flattens an oauth2 token request error into the provider's diagnostics.
///
/// Keeps the raw response body for parse failures so a token endpoint that
/// returned 200 without an access token is still debuggable.
fn describe_token_error<RE>(
    err: RequestTokenError<RE, StandardErrorResponse<BasicErrorResponseType>>,
) -> String
where
    RE: std::error::Error + 'static,
{
    match err {
        RequestTokenError::ServerResponse(response) => response.to_string(),
        RequestTokenError::Parse(parse_err, body) => {
            format!("{} in response body: {}", parse_err, String::from_utf8_lossy(&body))
        }
        other => other.to_string(),
    }
}
