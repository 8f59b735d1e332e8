use anyhow::Result;
use portfolio_backend::{config::PortfolioConfig, create_router, initialize_backend};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = PortfolioConfig::load()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio backend");

    let app_state = initialize_backend(&config).await?;
    if !app_state.auth_service.is_enabled() {
        warn!("No operator credentials configured; admin login is disabled");
    }

    let app = create_router(app_state, &config)?;

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
