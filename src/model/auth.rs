use serde::Deserialize;

/// Discord user profile returned from the `/users/@me` endpoint.
///
/// Typed decode of the fields the login flow needs; a response missing the
/// username fails deserialization instead of being checked key-by-key.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordProfile {
    /// Discord's opaque snowflake id for the user.
    pub id: String,
    pub username: String,
    pub discriminator: String,
}

/// Partial guild information returned from Discord's user guilds endpoint.
///
/// Contains the minimal guild data needed to report a user's memberships.
#[derive(Debug, Clone, Deserialize)]
pub struct UserGuild {
    /// Discord guild ID.
    pub id: String,
    /// Human-readable guild name.
    pub name: String,
}

/// The outcome of one successful login, rendered for both destinations.
///
/// Owns the formatted `username#discriminator` tag and the guild list in the
/// order Discord returned it. The access token used to assemble this summary
/// is discarded by the auth service and never appears here.
#[derive(Debug, Clone)]
pub struct LoginSummary {
    pub user_tag: String,
    pub guilds: Vec<UserGuild>,
}

impl LoginSummary {
    pub fn new(profile: DiscordProfile, guilds: Vec<UserGuild>) -> Self {
        Self {
            user_tag: format!("{}#{}", profile.username, profile.discriminator),
            guilds,
        }
    }

    fn guild_lines(&self) -> String {
        self.guilds
            .iter()
            .map(|guild| format!("- {} (ID: {})", guild.name, guild.id))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Plaintext body returned to the browser on a successful `/callback`.
    pub fn response_body(&self) -> String {
        format!(
            "Success! Your info has been logged.\nUser: `{}`\nServers:\n{}",
            self.user_tag,
            self.guild_lines()
        )
    }

    /// Message posted to the configured Discord log channel.
    pub fn channel_message(&self) -> String {
        format!(
            "**New Authenticated User**\n👤 User: `{}`\n🖥️ Servers:\n{}",
            self.user_tag,
            self.guild_lines()
        )
    }
}
