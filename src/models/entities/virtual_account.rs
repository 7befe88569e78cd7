use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;

/// A reserved bank account hosted by the provider. Rows are written once,
/// after a successful reservation call, and never updated.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::virtual_accounts)]
#[diesel(belongs_to(crate::models::entities::wallet::Wallet))]
pub struct VirtualAccount {
    pub id: i32,
    pub user_id: i32,
    pub wallet_id: i32,
    pub bank_name: String,
    pub bank_code: String,
    pub account_number: String,
    pub monnify_reservation_id: String,
    // provider-supplied timestamp, stored verbatim
    pub created_at: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::virtual_accounts)]
pub struct NewVirtualAccount<'a> {
    pub user_id: i32,
    pub wallet_id: i32,
    pub bank_name: &'a str,
    pub bank_code: &'a str,
    pub account_number: &'a str,
    pub monnify_reservation_id: &'a str,
    pub created_at: &'a str,
}
