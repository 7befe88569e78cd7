use crate::error::ApiError;
use crate::models::app_config::MonnifyInfo;
use secrecy::SecretString;
use std::sync::RwLock;

/// Process-wide holder for the provider credentials and the short-lived
/// bearer token. The token cell is written by an explicit refresh
/// ([`crate::clients::MonnifyClient::refresh_token`]) and read when
/// requests are built; there is no automatic renewal. Callers that hit
/// `Unauthorized` re-invoke the refresh and retry.
pub struct MonnifyCredentials {
    api_key: String,
    secret_key: SecretString,
    contract_code: String,
    token: RwLock<Option<SecretString>>,
}

impl MonnifyCredentials {
    pub fn new(info: &MonnifyInfo) -> Self {
        Self {
            api_key: info.api_key.clone(),
            secret_key: info.secret_key.clone(),
            contract_code: info.contract_code.clone(),
            token: RwLock::new(info.cached_token.clone()),
        }
    }

    /// Key/secret pair for the Basic-authenticated login exchange.
    pub fn basic_credentials(&self) -> (&str, &SecretString) {
        (&self.api_key, &self.secret_key)
    }

    pub fn contract_code(&self) -> &str {
        &self.contract_code
    }

    /// Current bearer token, or `Unauthorized` when none has been obtained.
    pub fn bearer_token(&self) -> Result<SecretString, ApiError> {
        self.token
            .read()
            .map_err(|_| ApiError::Internal("credential store lock poisoned".into()))?
            .clone()
            .ok_or_else(|| {
                ApiError::Unauthorized("no provider access token; refresh the token first".into())
            })
    }

    pub fn store_token(&self, token: SecretString) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token);
        }
    }

    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }
}
