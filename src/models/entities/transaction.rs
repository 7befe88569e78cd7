use chrono::NaiveDateTime;
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(belongs_to(crate::models::entities::wallet::Wallet))]
pub struct Transaction {
    pub id: i32,
    pub wallet_id: i32,
    pub txn_type: String,
    pub amount: f64,
    pub settlement_amount: Option<f64>,
    pub bank_name: Option<String>,
    pub monnify_tran_ref: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransaction<'a> {
    pub wallet_id: i32,
    pub txn_type: &'a str,
    pub amount: f64,
    pub settlement_amount: Option<f64>,
    pub bank_name: Option<&'a str>,
    pub monnify_tran_ref: &'a str,
    pub status: &'a str,
}
