use crate::clients::monnify::MonnifyClient;
use crate::error::ApiError;
use crate::models::app_state::AppState;
use crate::models::dtos::monnify_dto::ReserveAccountRequest;
use crate::models::dtos::provisioning_dto::{ProvisionedAccount, ProvisioningStatus};
use crate::models::dtos::wallet_dto::WalletHandle;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::virtual_account_repository::VirtualAccountRepository;
use crate::repositories::wallet_repository::WalletRepository;
use crate::models::entities::virtual_account::NewVirtualAccount;
use crate::services::wallet_service::WalletService;
use diesel::SqliteConnection;
use tracing::{error, info};

pub struct ProvisioningService;

impl ProvisioningService {
    pub async fn status(state: &AppState, user_id: i32) -> Result<ProvisioningStatus, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("provisioning.status: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        Self::derive_status(&mut conn, user_id)
    }

    /// Resumes onboarding from whatever step last completed: create the
    /// wallet if none exists, reserve a virtual account for the wallet that
    /// has none, or hand back the reservation that is already there. Each
    /// call is safe to retry after a failure.
    pub async fn provision(state: &AppState, user_id: i32) -> Result<ProvisionedAccount, ApiError> {
        let status = {
            let mut conn = state.db.get().map_err(|_| {
                error!("provisioning: failed to acquire db connection");
                ApiError::DatabaseConnection("Database unavailable".into())
            })?;
            Self::derive_status(&mut conn, user_id)?
        };

        let handle = match status {
            ProvisioningStatus::AccountReserved { wallet_id, .. } => {
                let mut conn = state.db.get().map_err(|_| {
                    error!("provisioning: failed to acquire db connection");
                    ApiError::DatabaseConnection("Database unavailable".into())
                })?;
                let account = VirtualAccountRepository::find_by_wallet(&mut conn, wallet_id)?
                    .ok_or_else(|| {
                        ApiError::NotFound(format!("No virtual account for wallet {}", wallet_id))
                    })?;
                info!(user_id, wallet_id, "Provisioning already complete");
                return Ok(ProvisionedAccount::from(account));
            }
            ProvisioningStatus::Registered => WalletService::create_wallet(state, user_id).await?,
            ProvisioningStatus::WalletCreated { .. } => Self::resume_handle(state, user_id)?,
        };

        Self::reserve(state, handle).await
    }

    fn derive_status(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<ProvisioningStatus, ApiError> {
        if UserRepository::find_by_id(conn, user_id)?.is_none() {
            return Err(ApiError::NotFound(format!(
                "No user found with id {}",
                user_id
            )));
        }

        if let Some(account) = VirtualAccountRepository::find_for_user(conn, user_id)? {
            return Ok(ProvisioningStatus::AccountReserved {
                wallet_id: account.wallet_id,
                virtual_account_id: account.id,
            });
        }

        match WalletRepository::latest_for_user(conn, user_id)? {
            Some(wallet) => Ok(ProvisioningStatus::WalletCreated {
                wallet_id: wallet.id,
            }),
            None => Ok(ProvisioningStatus::Registered),
        }
    }

    /// Rebuilds the provisioning handle for a wallet created by an earlier,
    /// partially completed run.
    fn resume_handle(state: &AppState, user_id: i32) -> Result<WalletHandle, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("provisioning.resume: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let user = UserRepository::find_by_id(&mut conn, user_id)?
            .ok_or_else(|| ApiError::NotFound(format!("No user found with id {}", user_id)))?;

        let wallet = WalletRepository::find_unreserved(&mut conn, user_id)?.ok_or_else(|| {
            ApiError::NotFound(format!("No unreserved wallet for user id {}", user_id))
        })?;

        Ok(WalletHandle {
            user_id: user.id,
            wallet_id: wallet.id,
            full_name: user.full_name,
            email: user.email,
            bvn: user.bvn,
            account_reference: wallet.account_reference,
        })
    }

    async fn reserve(
        state: &AppState,
        handle: WalletHandle,
    ) -> Result<ProvisionedAccount, ApiError> {
        let client = MonnifyClient::from_state(state)?;

        let request = ReserveAccountRequest {
            account_reference: &handle.account_reference,
            account_name: &handle.full_name,
            currency_code: &state.config.provisioning.currency_code,
            contract_code: state.credentials.contract_code(),
            customer_email: &handle.email,
            customer_name: &handle.full_name,
            bvn: &handle.bvn,
            get_all_available_banks: "true",
            preferred_banks: &state.config.provisioning.preferred_banks,
        };

        let reserved = match client.reserve_account(&request).await {
            Ok(reserved) => reserved,
            // an empty accounts list is its own condition, not a partial state
            Err(ApiError::MissingAccountData) => return Err(ApiError::MissingAccountData),
            Err(e) => {
                error!(
                    user_id = handle.user_id,
                    wallet_id = handle.wallet_id,
                    error = %e,
                    "provisioning: reservation failed; wallet kept for retry"
                );
                return Err(ApiError::PartiallyProvisioned {
                    wallet_id: handle.wallet_id,
                    reason: e.to_string(),
                });
            }
        };

        let mut conn = state.db.get().map_err(|_| {
            error!("provisioning: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let account = VirtualAccountRepository::create(
            &mut conn,
            NewVirtualAccount {
                user_id: handle.user_id,
                wallet_id: handle.wallet_id,
                bank_name: &reserved.bank_name,
                bank_code: &reserved.bank_code,
                account_number: &reserved.account_number,
                monnify_reservation_id: &reserved.reservation_reference,
                created_at: &reserved.created_on,
            },
        )?;

        info!(
            user_id = handle.user_id,
            wallet_id = handle.wallet_id,
            account_number = %account.account_number,
            bank = %account.bank_name,
            "Virtual account reserved"
        );

        Ok(ProvisionedAccount::from(account))
    }
}
