use serde::{Deserialize, Serialize};

/// Everything the provisioning step needs to reserve a virtual account
/// for a freshly created (or resumed) wallet.
#[derive(Debug, Clone, Serialize)]
pub struct WalletHandle {
    pub user_id: i32,
    pub wallet_id: i32,
    pub full_name: String,
    pub email: String,
    pub bvn: String,
    pub account_reference: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "credit",
            TransactionKind::Debit => "debit",
        }
    }

    /// Applies the kind's sign to a positive amount.
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            TransactionKind::Credit => amount,
            TransactionKind::Debit => -amount,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TransactionPosting {
    pub kind: TransactionKind,
    pub amount: f64,
    pub settlement_amount: Option<f64>,
    pub bank_name: Option<String>,
    pub monnify_tran_ref: String,
    pub status: String,
}
