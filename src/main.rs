//! Anteroom — virtual waiting room for a protected origin.
//!
//! Main entry point: loads configuration, initializes logging, and
//! starts the gate server.

use tracing_subscriber::{EnvFilter, fmt};

use anteroom_core::config::AppConfig;

#[tokio::main]
async fn main() {
    let env = std::env::var("ANTEROOM_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!(
        "Starting Anteroom v{} (env: {env})",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = anteroom_api::run_server(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
