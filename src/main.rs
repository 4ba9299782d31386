use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use ansdesk::api::router::{build_router, AppState};
use ansdesk::config::Config;
use ansdesk::database::{Database, SqlScheduleRepository};
use ansdesk::services::{HolidayApiProvider, SlaService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ansdesk=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Initialize database connection
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Run migrations
    db.run_migrations().await?;
    tracing::info!("Database migrations applied");

    // Wire the projection service to its collaborators
    let schedule_repo = Arc::new(SqlScheduleRepository::new(db));
    let holiday_provider = Arc::new(HolidayApiProvider::new(
        &config.holiday_api_url,
        &config.holiday_country,
        Duration::from_secs(config.holiday_http_timeout_secs),
    ));
    let sla_service = SlaService::new(schedule_repo, holiday_provider);

    let state = AppState { sla_service };
    let app = build_router(state);

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
