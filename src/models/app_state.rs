use crate::clients::credentials::MonnifyCredentials;
use crate::models::app_config::AppConfig;
use crate::utility::db_pool::DbPool;
use eyre::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub http_client: Client,
    pub config: AppConfig,
    pub credentials: Arc<MonnifyCredentials>,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Result<Arc<Self>> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;

        let credentials = Arc::new(MonnifyCredentials::new(&config.monnify));

        Ok(Arc::new(Self {
            db,
            http_client: http,
            config,
            credentials,
        }))
    }
}
