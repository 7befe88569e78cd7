use crate::models::entities::virtual_account::VirtualAccount;
use serde::Serialize;

/// Where a user currently sits in the onboarding flow, derived from the
/// rows that exist for them. Each provisioning call resumes from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProvisioningStatus {
    Registered,
    WalletCreated { wallet_id: i32 },
    AccountReserved { wallet_id: i32, virtual_account_id: i32 },
}

#[derive(Debug, Clone, Serialize)]
pub struct ProvisionedAccount {
    pub user_id: i32,
    pub wallet_id: i32,
    pub virtual_account_id: i32,
    pub account_number: String,
    pub bank_name: String,
    pub bank_code: String,
    pub reservation_reference: String,
    pub created_on: String,
}

impl From<VirtualAccount> for ProvisionedAccount {
    fn from(account: VirtualAccount) -> Self {
        Self {
            user_id: account.user_id,
            wallet_id: account.wallet_id,
            virtual_account_id: account.id,
            account_number: account.account_number,
            bank_name: account.bank_name,
            bank_code: account.bank_code,
            reservation_reference: account.monnify_reservation_id,
            created_on: account.created_at,
        }
    }
}
