use crate::error::ApiError;
use crate::models::entities::virtual_account::{NewVirtualAccount, VirtualAccount};
use crate::schema::virtual_accounts;
use diesel::prelude::*;

pub struct VirtualAccountRepository;

impl VirtualAccountRepository {
    pub fn create(
        conn: &mut SqliteConnection,
        new_account: NewVirtualAccount,
    ) -> Result<VirtualAccount, ApiError> {
        diesel::insert_into(virtual_accounts::table)
            .values(&new_account)
            .get_result::<VirtualAccount>(conn)
            .map_err(Into::into)
    }

    pub fn find_by_wallet(
        conn: &mut SqliteConnection,
        wallet_id: i32,
    ) -> Result<Option<VirtualAccount>, ApiError> {
        virtual_accounts::table
            .filter(virtual_accounts::wallet_id.eq(wallet_id))
            .first::<VirtualAccount>(conn)
            .optional()
            .map_err(Into::into)
    }

    pub fn find_for_user(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<Option<VirtualAccount>, ApiError> {
        virtual_accounts::table
            .filter(virtual_accounts::user_id.eq(user_id))
            .order(virtual_accounts::id.desc())
            .first::<VirtualAccount>(conn)
            .optional()
            .map_err(Into::into)
    }
}
