use diesel_migrations::MigrationHarness;
use eyre::Report;
use kudipay::clients::monnify::MonnifyClient;
use kudipay::models::app_config::AppConfig;
use kudipay::models::app_state::AppState;
use kudipay::utility::db_pool::{create_db_pool, DbPool};
use kudipay::utility::logging::setup_logging;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Report> {
    // 1. load environment variables
    load_env();

    // 2. initialize logging first
    setup_logging();

    info!("Starting kudipay...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. create the database pool and bring the schema up to date
    let pool = create_db_pool(&config.database_url)?;
    run_migrations(&pool)?;

    // 5. build application state
    let state = AppState::new(pool, config)?;

    // 6. one-time bearer-token exchange; a failure here is not fatal,
    //    remote calls stay Unauthorized until a later refresh succeeds
    let client = MonnifyClient::from_state(&state)?;
    match client.refresh_token().await {
        Ok(()) => info!("Provider access token refreshed"),
        Err(e) => warn!("Provider token refresh failed: {}", e),
    }

    info!("kudipay ready");
    Ok(())
}

fn load_env() {
    if dotenvy::dotenv().is_ok() {
        info!("Loaded .env file");
    } else {
        info!("No .env file found, using system environment");
    }
}

fn run_migrations(pool: &DbPool) -> Result<(), Report> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(kudipay::MIGRATIONS)
        .map_err(|e| eyre::eyre!("Failed to run migrations: {}", e))?;
    Ok(())
}
