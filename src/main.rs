//! HR engine server binary.

use std::sync::Arc;

use hr_engine::api::{AppState, create_router};
use hr_engine::clock::{Clock, SystemClock};
use hr_engine::config::ConfigLoader;
use hr_engine::store::MemoryStore;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loader = ConfigLoader::from_env()?;
    let settings = loader.settings().clone();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = MemoryStore::seeded(clock.clone(), loader.config())?;

    info!(
        service = %settings.name,
        environment = ?settings.environment,
        absence_types = loader.config().absence_types().len(),
        payroll_parameters = loader.config().payroll_parameters().len(),
        "Configuration loaded"
    );

    let address = settings.server.address();
    let router = create_router(AppState::new(Arc::new(store), clock, settings));

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "HR engine listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HR engine stopped");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
