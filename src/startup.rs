use oauth2::basic::BasicClient;
use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use std::time::Duration;

use crate::{
    config::Config,
    error::{config::ConfigError, AppError},
    router::router,
    state::{AppState, OAuth2Client},
};

/// Timeout applied to every outbound Discord request so a stalled endpoint
/// cannot pin an HTTP worker indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client used for Discord REST and token requests.
///
/// Redirects are disabled; the oauth2 crate requires it and it prevents SSRF
/// via a misbehaving endpoint.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for Discord authentication from configuration.
///
/// # Arguments
/// - `config` - Application configuration with Discord credentials and endpoint URLs
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorize, token, and redirect URLs set
/// - `Err(AppError::ConfigErr)` - A configured URL failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.discord_auth_url.clone()).map_err(ConfigError::from)?,
        )
        .set_token_uri(
            TokenUrl::new(config.discord_token_url.clone()).map_err(ConfigError::from)?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone()).map_err(ConfigError::from)?,
        );

    Ok(client)
}

/// Binds the HTTP listener and serves requests until shutdown.
pub async fn serve(config: &Config, state: AppState) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, router().with_state(state)).await?;

    Ok(())
}
