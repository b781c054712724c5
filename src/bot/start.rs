use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Builds the Discord bot client and hands back its HTTP client.
///
/// The returned `Arc<Http>` is shared with the notifier task so messages can
/// be posted without a second connection to Discord.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Bot client ready to start, plus its HTTP client
/// - `Err(AppError)` - Bot initialization failed
pub async fn init_bot(config: &Config) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Runs the bot's gateway loop until shutdown.
///
/// Should be called from within a `tokio::spawn` task since it blocks until
/// the bot shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
