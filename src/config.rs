use std::num::ParseIntError;

use crate::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/api/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_API_BASE_URL: &str = "https://discord.com/api";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug)]
pub struct Config {
    pub discord_bot_token: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    /// Channel that receives the login notifications. Parsed at startup so a
    /// malformed value aborts before either listener starts.
    pub log_channel_id: u64,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    pub discord_api_base_url: String,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: require_env("TOKEN")?,
            discord_client_id: require_env("CLIENT_ID")?,
            discord_client_secret: require_env("CLIENT_SECRET")?,
            discord_redirect_url: require_env("REDIRECT_URI")?,
            log_channel_id: parse_int(require_env("LOG_CHANNEL_ID")?, "LOG_CHANNEL_ID")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_api_base_url: DISCORD_API_BASE_URL.to_string(),
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: match std::env::var("PORT") {
                Ok(port) => parse_int(port, "PORT")?,
                Err(_) => DEFAULT_PORT,
            },
        })
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_int<T>(value: String, name: &'static str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    value
        .parse::<T>()
        .map_err(|source| ConfigError::InvalidInteger {
            name,
            value,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_required_vars() {
        std::env::set_var("TOKEN", "bot-token");
        std::env::set_var("CLIENT_ID", "1234567890");
        std::env::set_var("CLIENT_SECRET", "shhh");
        std::env::set_var("REDIRECT_URI", "http://localhost:5000/callback");
        std::env::set_var("LOG_CHANNEL_ID", "9876543210");
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }

    /// Tests loading configuration with all required variables present.
    ///
    /// Verifies that all values are picked up from the environment and
    /// that the Discord endpoint URLs and listen defaults are filled in.
    ///
    /// Expected: Ok with parsed channel id and default host/port
    #[test]
    #[serial]
    fn loads_config_from_env() {
        set_required_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.discord_client_id, "1234567890");
        assert_eq!(config.log_channel_id, 9876543210);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(config.discord_auth_url.contains("discord.com"));
    }

    /// Tests that a missing required variable fails configuration loading.
    ///
    /// Expected: Err naming the missing variable
    #[test]
    #[serial]
    fn fails_on_missing_env_var() {
        set_required_vars();
        std::env::remove_var("CLIENT_SECRET");

        let err = Config::from_env().unwrap_err();

        assert!(err.to_string().contains("CLIENT_SECRET"));
    }

    /// Tests that a non-numeric log channel id aborts configuration loading
    /// rather than being deferred to request time.
    ///
    /// Expected: Err naming LOG_CHANNEL_ID
    #[test]
    #[serial]
    fn fails_on_malformed_channel_id() {
        set_required_vars();
        std::env::set_var("LOG_CHANNEL_ID", "not-a-number");

        let err = Config::from_env().unwrap_err();

        assert!(err.to_string().contains("LOG_CHANNEL_ID"));
    }
}
