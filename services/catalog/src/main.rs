use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use catalog::catalog::Catalog;
use catalog::routes;
use catalog::state::AppState;
use catalog::store::PgListingStore;
use common::database::{DatabaseConfig, init_pool};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set default tracing subscriber")?;

    info!("Starting catalog service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Wire the store into the catalog facade
    let store = Arc::new(PgListingStore::new(pool));
    let app_state = AppState {
        catalog: Catalog::new(store),
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3002").await?;
    info!("Catalog service listening on 0.0.0.0:3002");

    axum::serve(listener, app).await?;

    Ok(())
}
