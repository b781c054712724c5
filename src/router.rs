use axum::{routing::get, Router};

use crate::{
    controller::auth::{callback, home, login},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login))
        .route("/callback", get(callback))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
    use tokio::sync::mpsc;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::service::notification::NotificationService;
    use crate::state::OAuth2Client;

    fn oauth_client(base_url: &str) -> OAuth2Client {
        oauth2::basic::BasicClient::new(ClientId::new("1234567890".to_string()))
            .set_client_secret(ClientSecret::new("shhh".to_string()))
            .set_auth_uri(AuthUrl::new(format!("{base_url}/oauth2/authorize")).unwrap())
            .set_token_uri(TokenUrl::new(format!("{base_url}/oauth2/token")).unwrap())
            .set_redirect_uri(
                RedirectUrl::new("http://localhost:5000/callback".to_string()).unwrap(),
            )
    }

    /// Builds a router with its state pointed at the given base URL,
    /// returning the receiving end of the notification queue.
    fn test_router(base_url: &str) -> (Router, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(8);

        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        let state = AppState::new(
            http_client,
            oauth_client(base_url),
            base_url.to_string(),
            NotificationService::new(tx),
        );

        (router().with_state(state), rx)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn mock_discord() -> MockServer {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "mock-access-token",
                "token_type": "Bearer",
                "expires_in": 604800,
                "scope": "identify guilds"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/users/@me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "42",
                "username": "alice",
                "discriminator": "0001"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/users/@me/guilds"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": "1", "name": "G1" },
                { "id": "2", "name": "G2" }
            ])))
            .mount(&server)
            .await;

        server
    }

    /// Tests that the landing page links to the login route.
    ///
    /// Expected: 200 with an anchor to /login
    #[tokio::test]
    async fn home_links_to_login() {
        let (app, _rx) = test_router("http://127.0.0.1:1");

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains(r#"href="/login""#));
    }

    /// Tests that the login route redirects to Discord's consent screen.
    ///
    /// The state points at an unroutable address, so the 302 also proves the
    /// handler performs no network I/O.
    ///
    /// Expected: 302 with a Location containing client id and both scopes
    #[tokio::test]
    async fn login_redirects_to_authorize_url() {
        let (app, _rx) = test_router("http://127.0.0.1:1");

        let response = app
            .oneshot(Request::builder().uri("/login").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);

        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(location.contains("client_id=1234567890"));
        assert!(location.contains("identify"));
        assert!(location.contains("guilds"));
    }

    /// Tests that a callback without a code is rejected up front.
    ///
    /// Expected: exactly 400 with the missing-code error body, and nothing
    /// queued for the log channel
    #[tokio::test]
    async fn callback_without_code_is_bad_request() {
        let (app, mut rx) = test_router("http://127.0.0.1:1");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/callback")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, "Error: No code provided");
        assert!(rx.try_recv().is_err());
    }

    /// Tests the success path end to end against a mocked Discord.
    ///
    /// Expected: 200 whose body and queued notification both carry the
    /// formatted identity and the guild lines in order
    #[tokio::test]
    async fn callback_success_logs_and_echoes_summary() {
        let server = mock_discord().await;
        let (app, mut rx) = test_router(&server.uri());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/callback?code=one-time-code")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("alice#0001"));
        assert!(body.find("- G1 (ID: 1)").unwrap() < body.find("- G2 (ID: 2)").unwrap());

        let notification = rx.try_recv().unwrap();
        assert!(notification.contains("alice#0001"));
        assert!(
            notification.find("- G1 (ID: 1)").unwrap()
                < notification.find("- G2 (ID: 2)").unwrap()
        );
        // Exactly one notification per successful callback
        assert!(rx.try_recv().is_err());
    }

    /// Tests that a failed token exchange never triggers a notification.
    ///
    /// Expected: 500 with the provider's error text and an empty queue
    #[tokio::test]
    async fn callback_failure_skips_notification() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "error": "invalid_grant" })),
            )
            .mount(&server)
            .await;

        let (app, mut rx) = test_router(&server.uri());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/callback?code=already-used")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_string(response).await.contains("invalid_grant"));
        assert!(rx.try_recv().is_err());
    }

    /// Tests that notification delivery is best-effort.
    ///
    /// Dropping the receiving end simulates a stopped notifier; the login
    /// response must be unaffected.
    ///
    /// Expected: 200 with the correct summary
    #[tokio::test]
    async fn callback_succeeds_without_notifier() {
        let server = mock_discord().await;
        let (app, rx) = test_router(&server.uri());
        drop(rx);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/callback?code=one-time-code")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("alice#0001"));
    }
}
