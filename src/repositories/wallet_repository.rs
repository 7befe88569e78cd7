use crate::error::ApiError;
use crate::models::entities::wallet::{NewWallet, Wallet};
use crate::schema::{virtual_accounts, wallets};
use diesel::prelude::*;

pub struct WalletRepository;

impl WalletRepository {
    pub fn create(
        conn: &mut SqliteConnection,
        user_id: i32,
        account_reference: &str,
    ) -> Result<Wallet, ApiError> {
        diesel::insert_into(wallets::table)
            .values(&NewWallet {
                user_id,
                account_reference,
            })
            .get_result::<Wallet>(conn)
            .map_err(Into::into)
    }

    pub fn find_by_id(
        conn: &mut SqliteConnection,
        wallet_id: i32,
    ) -> Result<Option<Wallet>, ApiError> {
        wallets::table
            .find(wallet_id)
            .first::<Wallet>(conn)
            .optional()
            .map_err(Into::into)
    }

    pub fn latest_for_user(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<Option<Wallet>, ApiError> {
        wallets::table
            .filter(wallets::user_id.eq(user_id))
            .order(wallets::id.desc())
            .first::<Wallet>(conn)
            .optional()
            .map_err(Into::into)
    }

    /// Newest wallet for the user that has no virtual account attached.
    pub fn find_unreserved(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<Option<Wallet>, ApiError> {
        wallets::table
            .left_join(virtual_accounts::table)
            .filter(wallets::user_id.eq(user_id))
            .filter(virtual_accounts::id.nullable().is_null())
            .order(wallets::id.desc())
            .select(wallets::all_columns)
            .first::<Wallet>(conn)
            .optional()
            .map_err(Into::into)
    }

    /// Balance of the user's oldest wallet, `None` when they have none.
    pub fn balance_for_user(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<Option<f64>, ApiError> {
        wallets::table
            .filter(wallets::user_id.eq(user_id))
            .order(wallets::id.asc())
            .select(wallets::balance)
            .first::<f64>(conn)
            .optional()
            .map_err(Into::into)
    }

    /// Sets the balance of the wallet matching both predicates and returns
    /// the number of rows touched. Zero means no such wallet exists.
    pub fn set_balance(
        conn: &mut SqliteConnection,
        user_id: i32,
        account_reference: &str,
        new_balance: f64,
    ) -> Result<usize, ApiError> {
        diesel::update(
            wallets::table
                .filter(wallets::user_id.eq(user_id))
                .filter(wallets::account_reference.eq(account_reference)),
        )
        .set(wallets::balance.eq(new_balance))
        .execute(conn)
        .map_err(Into::into)
    }

    /// Applies a signed delta to the wallet balance.
    pub fn adjust_balance(
        conn: &mut SqliteConnection,
        wallet_id: i32,
        delta: f64,
    ) -> Result<(), ApiError> {
        diesel::update(wallets::table.find(wallet_id))
            .set(wallets::balance.eq(wallets::balance + delta))
            .execute(conn)?;
        Ok(())
    }
}
