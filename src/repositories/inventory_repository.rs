use crate::error::ApiError;
use crate::models::entities::inventory::{
    InventoryBatch, InventoryItem, NewInventoryBatch, NewInventoryItem,
};
use crate::schema::{inventory_batches, inventory_items};
use diesel::prelude::*;
use uuid::Uuid;

pub struct InventoryRepository;

impl InventoryRepository {
    /// Inserts the item definition and its initial batch in one
    /// transaction; either both rows land or neither does.
    pub fn create_item(
        conn: &mut SqliteConnection,
        name: &str,
        quantity: i32,
        unit_price: f64,
    ) -> Result<InventoryItem, ApiError> {
        let item_id = Uuid::new_v4().to_string();

        conn.transaction::<InventoryItem, ApiError, _>(|conn| {
            let item = diesel::insert_into(inventory_items::table)
                .values(&NewInventoryItem {
                    id: &item_id,
                    name,
                })
                .get_result::<InventoryItem>(conn)?;

            diesel::insert_into(inventory_batches::table)
                .values(&NewInventoryBatch {
                    inventory_item_id: &item_id,
                    quantity,
                    unit_price,
                })
                .execute(conn)?;

            Ok(item)
        })
    }

    /// Appends a cost layer to an existing item. An unknown item id fails
    /// the foreign-key constraint and no batch row is written.
    pub fn add_batch(
        conn: &mut SqliteConnection,
        item_id: &str,
        quantity: i32,
        unit_price: f64,
    ) -> Result<InventoryBatch, ApiError> {
        diesel::insert_into(inventory_batches::table)
            .values(&NewInventoryBatch {
                inventory_item_id: item_id,
                quantity,
                unit_price,
            })
            .get_result::<InventoryBatch>(conn)
            .map_err(Into::into)
    }

    pub fn find_item(
        conn: &mut SqliteConnection,
        item_id: &str,
    ) -> Result<Option<InventoryItem>, ApiError> {
        inventory_items::table
            .find(item_id)
            .first::<InventoryItem>(conn)
            .optional()
            .map_err(Into::into)
    }

    pub fn batches_for_item(
        conn: &mut SqliteConnection,
        item_id: &str,
    ) -> Result<Vec<InventoryBatch>, ApiError> {
        inventory_batches::table
            .filter(inventory_batches::inventory_item_id.eq(item_id))
            .order(inventory_batches::id.asc())
            .load::<InventoryBatch>(conn)
            .map_err(Into::into)
    }
}
