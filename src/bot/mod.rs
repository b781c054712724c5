//! Discord bot session for login notification delivery.
//!
//! The bot's only jobs are to hold the gateway connection that makes the
//! application a member of its log channel's guild and to provide the HTTP
//! client the notifier task posts messages with. It is initialized during
//! startup and runs in a separate tokio task so a gateway failure is logged
//! without taking down the HTTP server, and vice versa.
//!
//! # Gateway Intents
//!
//! The bot requires only the `GUILDS` intent; it reacts to no guild events
//! beyond logging that it connected.

pub mod handler;
pub mod start;
