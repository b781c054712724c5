use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable that must be an integer failed to parse.
    ///
    /// Applies to `LOG_CHANNEL_ID` and `PORT`. Startup-fatal so a bad channel
    /// id fails immediately instead of at the first login.
    #[error("Environment variable {name} must be an integer, got '{value}': {source}")]
    InvalidInteger {
        /// The environment variable that failed to parse
        name: &'static str,
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A configured endpoint or redirect URL is not a valid URL.
    #[error("Invalid URL in configuration: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
