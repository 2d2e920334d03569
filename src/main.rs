use anyhow::Context;
use shopinow::catalog::{CatalogModule, InMemoryProductRepository};
use shopinow::config::AppConfig;
use shopinow::lifecycle::shutdown_signal;
use shopinow::{ContainerBuilder, Module, app};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(host = %config.host, port = config.port, "Starting shopinow catalog");

    // 1. Infrastructure without DI dependencies
    let repository = InMemoryProductRepository::from_json_file(&config.seed_path)
        .context("failed to load product catalog")?;
    let mut container = ContainerBuilder::new().register(repository).build();

    // 2. Bindings, providers and controllers
    CatalogModule::register(&mut container).context("failed to register CatalogModule")?;

    // 3. Router
    let router = app::build_router(&container)?;

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    tracing::info!(addr = %listener.local_addr()?, "Server running");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
