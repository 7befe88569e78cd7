//! Wire shapes for the Monnify API. Response envelopes keep every field
//! optional so a malformed body surfaces as a provider error instead of a
//! deserialization panic.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BvnMatchRequest<'a> {
    pub bvn: &'a str,
    pub name: &'a str,
    pub date_of_birth: &'a str,
    pub mobile_no: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NinLookupRequest<'a> {
    pub nin: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveAccountRequest<'a> {
    pub account_reference: &'a str,
    pub account_name: &'a str,
    pub currency_code: &'a str,
    pub contract_code: &'a str,
    pub customer_email: &'a str,
    pub customer_name: &'a str,
    pub bvn: &'a str,
    // the provider expects the string "true", not a boolean
    pub get_all_available_banks: &'a str,
    pub preferred_banks: &'a [String],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonnifyLoginResponse {
    pub response_body: Option<LoginResponseBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseBody {
    pub access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonnifyMessageResponse {
    pub response_message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveAccountResponse {
    pub response_body: Option<ReservedAccountBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedAccountBody {
    pub reservation_reference: String,
    pub created_on: String,
    #[serde(default)]
    pub accounts: Vec<ProviderBankAccount>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderBankAccount {
    pub account_number: String,
    pub bank_name: String,
    pub bank_code: String,
}

/// Fields extracted from a successful reservation, ready for persistence.
#[derive(Debug, Clone)]
pub struct ReservedAccount {
    pub reservation_reference: String,
    pub created_on: String,
    pub account_number: String,
    pub bank_name: String,
    pub bank_code: String,
}

/// Result of a document-match check. A rejection is a normal outcome the
/// caller inspects, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    Rejected(String),
}

impl VerificationOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified)
    }
}
