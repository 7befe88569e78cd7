use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct NewInventoryItem<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

/// One cost layer for an item. Batches are append-only; adding a batch
/// never mutates earlier ones.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::inventory_batches)]
#[diesel(belongs_to(InventoryItem, foreign_key = inventory_item_id))]
pub struct InventoryBatch {
    pub id: i32,
    pub inventory_item_id: String,
    pub quantity: i32,
    pub unit_price: f64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::inventory_batches)]
pub struct NewInventoryBatch<'a> {
    pub inventory_item_id: &'a str,
    pub quantity: i32,
    pub unit_price: f64,
}
