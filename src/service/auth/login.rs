use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::service::auth::AuthService;

impl AuthService<'_> {
    /// Generates the Discord OAuth2 authorization URL.
    ///
    /// Pure URL construction from configuration; performs no network I/O.
    /// Requests the `identify` and `guilds` scopes so the callback can fetch
    /// the user's profile and guild memberships. A random `state` value is
    /// included in the URL, but the callback does not validate it; the
    /// upstream flow this mirrors has no CSRF protection.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and the state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            // Request scope to retrieve user information and guilds
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url();

        (authorize_url, csrf_state)
    }
}
