use crate::error::ApiError;
use crate::models::app_state::AppState;
use crate::models::entities::inventory::{InventoryBatch, InventoryItem};
use crate::repositories::inventory_repository::InventoryRepository;
use tracing::{error, info};

pub struct InventoryService;

impl InventoryService {
    pub async fn create_item(
        state: &AppState,
        name: &str,
        quantity: i32,
        unit_price: f64,
    ) -> Result<InventoryItem, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("inventory.create: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let item = InventoryRepository::create_item(&mut conn, name, quantity, unit_price)?;

        info!(item_id = %item.id, name, "Inventory item created");

        Ok(item)
    }

    pub async fn add_batch(
        state: &AppState,
        item_id: &str,
        quantity: i32,
        unit_price: f64,
    ) -> Result<InventoryBatch, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("inventory.add_batch: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let batch = InventoryRepository::add_batch(&mut conn, item_id, quantity, unit_price)?;

        info!(item_id, batch_id = batch.id, "Inventory batch added");

        Ok(batch)
    }

    pub async fn batches(
        state: &AppState,
        item_id: &str,
    ) -> Result<Vec<InventoryBatch>, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("inventory.batches: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        InventoryRepository::batches_for_item(&mut conn, item_id)
    }
}
