//! Acme CRM server.
//!
//! Loads configuration, connects to PostgreSQL and serves the JSON API.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use crm_api::{AppState, build_app, shutdown_signal};
use crm_core::config::AppConfig;
use crm_database::{DatabasePool, run_migrations, seed_demo};

#[tokio::main]
async fn main() {
    let env = std::env::var("CRM_ENV").unwrap_or_else(|_| "development".to_string());

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

    if config.logging.is_json() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Acme CRM v{}", env!("CARGO_PKG_VERSION"));

    let (db, connected) = match DatabasePool::connect(&config.database).await {
        Ok(db) => (db, true),
        Err(e) if config.auth.dev_fallback_enabled => {
            tracing::warn!(
                error = %e,
                "Database unreachable, continuing with development sign-in only"
            );
            (DatabasePool::connect_lazy(&config.database)?, false)
        }
        Err(e) => return Err(e).context("database connection failed"),
    };

    if connected && config.database.run_migrations {
        run_migrations(db.pool())
            .await
            .context("database migrations failed")?;
    }

    if connected && config.auth.dev_fallback_enabled {
        if let Err(e) = seed_demo(db.pool(), &config.auth).await {
            tracing::warn!(error = %e, "Demo seed failed, development account has no team");
        }
    }

    let bind_address = config.server.bind_address();
    let state = AppState::new(config, db.clone());
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    tracing::info!(address = %bind_address, "CRM API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}
