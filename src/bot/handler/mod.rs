use serenity::all::{Context, EventHandler, Ready};
use serenity::async_trait;

pub mod ready;

/// Discord bot event handler
pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }
}
