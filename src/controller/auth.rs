use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::{
    error::{auth::AuthError, AppError},
    service::auth::AuthService,
    state::AppState,
};

/// Query parameters for the OAuth callback endpoint.
///
/// Discord also sends a `state` parameter, which is accepted and ignored;
/// the flow carries no CSRF validation.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// Authorization code from Discord SSO for token exchange. Absent when
    /// the user reached the callback without completing the consent screen.
    pub code: Option<String>,
}

/// Landing page with the login link.
pub async fn home() -> Html<&'static str> {
    Html(r#"<a href="/login">Login with Discord</a>"#)
}

/// Redirects the browser to Discord's authorization page.
///
/// Responds with 302 Found; the URL is built from configuration alone, so
/// this handler performs no network I/O.
pub async fn login(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.api_base_url,
    );

    let (url, _csrf_token) = auth_service.login_url();

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, url.to_string())],
    ))
}

/// Completes the OAuth flow for one authorization code.
///
/// On success the login summary is queued for the Discord log channel and
/// echoed to the browser as plaintext. Notification delivery is best-effort;
/// only the auth exchange itself can fail this request.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let code = params.code.ok_or(AuthError::MissingCode)?;

    let auth_service = AuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.api_base_url,
    );

    let summary = auth_service.callback(code).await?;

    state.notifier.notify(summary.channel_message());

    Ok((StatusCode::OK, summary.response_body()))
}
