//! # Owghat Bot Main Entry Point
//!
//! Initializes logging, loads configuration, wires the provider client into
//! the message router, and runs the Telegram dispatcher alongside the health
//! check server.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod config;
mod error;
mod services;
mod utils;

use crate::bot::handlers::BotHandler;
use crate::bot::router::MessageRouter;
use crate::config::Config;
use crate::services::health::HealthService;
use crate::services::owghat::OwghatClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "owghat_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Owghat Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Provider: {}, HTTP Port: {}",
        config.provider_base_url, config.http_port
    );

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let provider = OwghatClient::new(&config.provider_base_url, &config.provider_token);
    let handler = BotHandler::new(MessageRouter::new(provider));
    info!("Telegram bot initialized successfully");

    // Initialize health service
    let health_service = HealthService::new();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result = bot_task => {
            if let Err(e) = result {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result = health_task => {
            if let Err(e) = result {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    info!("Application stopped");
    Ok(())
}
