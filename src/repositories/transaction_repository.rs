use crate::error::ApiError;
use crate::models::entities::transaction::{NewTransaction, Transaction};
use crate::schema::transactions;
use diesel::prelude::*;

pub struct TransactionRepository;

impl TransactionRepository {
    pub fn record(
        conn: &mut SqliteConnection,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, ApiError> {
        diesel::insert_into(transactions::table)
            .values(&new_transaction)
            .get_result::<Transaction>(conn)
            .map_err(Into::into)
    }

    pub fn find_by_reference(
        conn: &mut SqliteConnection,
        monnify_tran_ref: &str,
    ) -> Result<Option<Transaction>, ApiError> {
        transactions::table
            .filter(transactions::monnify_tran_ref.eq(monnify_tran_ref))
            .first::<Transaction>(conn)
            .optional()
            .map_err(Into::into)
    }

    pub fn list_for_wallet(
        conn: &mut SqliteConnection,
        wallet_id: i32,
    ) -> Result<Vec<Transaction>, ApiError> {
        transactions::table
            .filter(transactions::wallet_id.eq(wallet_id))
            .order(transactions::id.asc())
            .load::<Transaction>(conn)
            .map_err(Into::into)
    }
}
