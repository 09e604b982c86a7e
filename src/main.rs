//! # Department Timetable Bot Main Entry Point
//!
//! Initializes logging, loads configuration, builds the timetable store and
//! navigator, and runs the Telegram bot alongside the health-check server.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timetable_bot::bot::handlers::BotHandler;
use timetable_bot::config::Config;
use timetable_bot::navigation::Navigator;
use timetable_bot::services::clock::SystemClock;
use timetable_bot::services::health::HealthService;
use timetable_bot::timetable::TimetableStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timetable_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Department Timetable Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - HTTP Port: {}", config.http_port);

    // Build the read-only timetable store
    let store = TimetableStore::new();
    let section_count = store.sections().len();
    info!("Timetable store loaded with {} sections", section_count);

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let navigator = Arc::new(Navigator::new(store, Arc::new(SystemClock)));
    let handler = BotHandler::new(navigator);
    info!("Telegram bot initialized successfully");

    // Initialize health service
    let health_service = HealthService::new(section_count);
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
