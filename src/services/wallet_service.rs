use crate::error::ApiError;
use crate::models::app_state::AppState;
use crate::models::dtos::wallet_dto::{TransactionPosting, WalletHandle};
use crate::models::entities::transaction::{NewTransaction, Transaction};
use crate::repositories::transaction_repository::TransactionRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::wallet_repository::WalletRepository;
use diesel::Connection;
use tracing::{error, info, warn};

pub struct WalletService;

impl WalletService {
    /// Creates a wallet for an existing user. The account reference is
    /// derived as `{full_name}_{user_id}` and must be unique.
    pub async fn create_wallet(state: &AppState, user_id: i32) -> Result<WalletHandle, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("wallet.create: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let user = UserRepository::find_by_id(&mut conn, user_id)?.ok_or_else(|| {
            warn!(user_id, "wallet.create: unknown user");
            ApiError::NotFound(format!("No user found with id {}", user_id))
        })?;

        let account_reference = format!("{}_{}", user.full_name, user.id);

        let wallet = WalletRepository::create(&mut conn, user.id, &account_reference)?;

        info!(user_id, wallet_id = wallet.id, "Wallet created");

        Ok(WalletHandle {
            user_id: user.id,
            wallet_id: wallet.id,
            full_name: user.full_name,
            email: user.email,
            bvn: user.bvn,
            account_reference: wallet.account_reference,
        })
    }

    pub async fn get_balance(state: &AppState, user_id: i32) -> Result<f64, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("wallet.balance: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        WalletRepository::balance_for_user(&mut conn, user_id)?
            .ok_or_else(|| ApiError::NotFound(format!("No wallet found for user id {}", user_id)))
    }

    /// Overwrites the balance of the wallet matching both the user id and
    /// the account reference. A zero-row match is NotFound, never a silent
    /// no-op.
    pub async fn set_balance(
        state: &AppState,
        user_id: i32,
        account_reference: &str,
        new_balance: f64,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("wallet.set_balance: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let rows = WalletRepository::set_balance(&mut conn, user_id, account_reference, new_balance)?;

        if rows == 0 {
            warn!(user_id, account_reference, "wallet.set_balance: no matching wallet");
            return Err(ApiError::NotFound(format!(
                "No wallet found for user id {} with reference {}",
                user_id, account_reference
            )));
        }

        info!(user_id, new_balance, "Wallet balance updated");
        Ok(())
    }

    /// Appends a ledger row and applies the credit or debit to the wallet
    /// balance in one storage transaction. The settlement amount, when
    /// present, is what actually lands in the wallet. A reused provider
    /// reference fails DuplicateKey and changes nothing.
    pub async fn post_transaction(
        state: &AppState,
        wallet_id: i32,
        posting: TransactionPosting,
    ) -> Result<Transaction, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("wallet.post: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let transaction = conn.transaction::<Transaction, ApiError, _>(|conn| {
            WalletRepository::find_by_id(conn, wallet_id)?.ok_or_else(|| {
                ApiError::NotFound(format!("No wallet found with id {}", wallet_id))
            })?;

            let transaction = TransactionRepository::record(
                conn,
                NewTransaction {
                    wallet_id,
                    txn_type: posting.kind.as_str(),
                    amount: posting.amount,
                    settlement_amount: posting.settlement_amount,
                    bank_name: posting.bank_name.as_deref(),
                    monnify_tran_ref: &posting.monnify_tran_ref,
                    status: &posting.status,
                },
            )?;

            let delta = posting
                .kind
                .signed(posting.settlement_amount.unwrap_or(posting.amount));
            WalletRepository::adjust_balance(conn, wallet_id, delta)?;

            Ok(transaction)
        })?;

        info!(
            wallet_id,
            reference = %transaction.monnify_tran_ref,
            "Transaction posted"
        );

        Ok(transaction)
    }
}
