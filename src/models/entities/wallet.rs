use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::wallets)]
#[diesel(belongs_to(crate::models::entities::user::User))]
pub struct Wallet {
    pub id: i32,
    pub user_id: i32,
    pub account_reference: String,
    pub balance: f64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::wallets)]
pub struct NewWallet<'a> {
    pub user_id: i32,
    pub account_reference: &'a str,
}
