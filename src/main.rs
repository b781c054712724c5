mod bot;
mod config;
mod controller;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config, error::AppError, service::notification::NotificationService, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Configuration problems (missing vars, malformed channel id) abort here,
    // before either listener starts.
    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    tracing::info!("Starting server");

    // Initialize Discord bot and extract its HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config).await?;

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // The notifier task is the only bridge between the HTTP handlers and the
    // bot session; handlers hold just the sending half of its queue.
    let notifier = NotificationService::spawn(discord_http, config.log_channel_id);

    let state = AppState::new(
        http_client,
        oauth_client,
        config.discord_api_base_url.clone(),
        notifier,
    );

    startup::serve(&config, state).await
}
