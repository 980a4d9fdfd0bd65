//! Bookshelf - terminal library manager
//!
//! Seeds an in-memory collection and drives it from stdin.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bookshelf::{
    config::{AppConfig, LoggingConfig},
    console, services,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    init_tracing(&config.logging);

    tracing::info!("Starting Bookshelf v{}", env!("CARGO_PKG_VERSION"));

    let mut library = services::bootstrap(&config.library)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(&mut library, stdin.lock(), stdout.lock())?;

    Ok(())
}

/// Logs go to stderr so they stay out of the rendered view
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookshelf={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}
