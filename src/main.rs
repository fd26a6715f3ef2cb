//! HomeFruits Server: shop backend with accounts, sessions and carts.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use homefruits_core::config::{AppConfig, StorageBackend};
use homefruits_core::error::AppError;
use homefruits_database::{DatabasePool, Stores};

#[tokio::main]
async fn main() {
    let env = std::env::var("HOMEFRUITS_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
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
                .with_thread_ids(true)
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

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting HomeFruits v{}", env!("CARGO_PKG_VERSION"));

    let stores = match config.database.backend {
        StorageBackend::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            homefruits_database::migration::run_migrations(pool.pool()).await?;
            Stores::postgres(pool)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; all data is lost on exit");
            Stores::memory()
        }
    };

    homefruits_api::run_server(config, stores).await
}
