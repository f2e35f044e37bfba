use anyhow::Context;
use flyshop_api::{app, AppState};
use flyshop_core::repository::ProductRepository;
use flyshop_store::app_config::Config;
use flyshop_store::{DbClient, InMemoryFlightRepository, InMemoryProductRepository, PostgresProductRepository};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flyshop_api=debug,flyshop_store=info,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Flyshop API on port {}", config.server.port);

    let product_repo: Arc<dyn ProductRepository> = if config.database.url.is_empty() {
        tracing::warn!("No database configured, serving an empty product catalog");
        Arc::new(InMemoryProductRepository::default())
    } else {
        let db = DbClient::new(&config.database).context("Invalid database configuration")?;
        if config.database.run_migrations {
            db.migrate().await.context("Failed to run migrations")?;
        }
        Arc::new(PostgresProductRepository::new(db.pool.clone()))
    };

    let flight_repo = InMemoryFlightRepository::from_config(&config.flights)
        .await
        .context("Failed to load flight schedule")?;
    tracing::info!("Serving {} flights", flight_repo.len());

    let app_state = AppState::new(product_repo, Arc::new(flight_repo));
    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
