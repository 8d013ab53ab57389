//! practitioner-salary-server: REST server for classification lookups and
//! salary calculation.
//!
//! Reads config from env vars:
//!   PRACTITIONER_CONFIG_DIR — directory holding salary.yaml and
//!                             classifications.yaml (default: ./config/default)
//!   PRACTITIONER_BIND_ADDR  — listen address (default: 0.0.0.0:3000)

use anyhow::Context;
use tokio::net::TcpListener;

use practitioner_salary::api::{create_router, AppState};
use practitioner_salary::config::ConfigLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,practitioner_salary=debug".into()),
        )
        .init();

    let config_dir =
        std::env::var("PRACTITIONER_CONFIG_DIR").unwrap_or_else(|_| "./config/default".into());
    let bind_addr =
        std::env::var("PRACTITIONER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load configuration from {}", config_dir))?;
    tracing::info!(
        config_dir = %config_dir,
        records = config.records().len(),
        "Configuration loaded"
    );

    let state = AppState::new(config).context("failed to build classification store")?;
    let app = create_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("practitioner-salary-server listening on {}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
