use crate::clients::credentials::MonnifyCredentials;
use crate::error::ApiError;
use crate::models::app_state::AppState;
use crate::models::dtos::monnify_dto::{
    BvnMatchRequest, MonnifyLoginResponse, MonnifyMessageResponse, NinLookupRequest,
    ReserveAccountRequest, ReserveAccountResponse, ReservedAccount, VerificationOutcome,
};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

const LOGIN_PATH: &str = "api/v1/auth/login";
const BVN_MATCH_PATH: &str = "api/v1/vas/bvn-details-match";
const NIN_LOOKUP_PATH: &str = "api/v1/vas/nin-details";
const RESERVED_ACCOUNTS_PATH: &str = "api/v2/bank-transfer/reserved-accounts";

#[derive(Clone)]
pub struct MonnifyClient {
    http: Client,
    base_url: Url,
    credentials: Arc<MonnifyCredentials>,
}

impl MonnifyClient {
    pub fn new(
        http: Client,
        base_url: &str,
        credentials: Arc<MonnifyCredentials>,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Internal("Invalid Monnify base URL".into()))?;

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    pub fn from_state(state: &AppState) -> Result<Self, ApiError> {
        Self::new(
            state.http_client.clone(),
            &state.config.monnify.base_url,
            state.credentials.clone(),
        )
    }

    /// Exchanges the API key/secret for a bearer token and stores it in the
    /// credential store. A 2xx response without a token leaves the store
    /// untouched and errors, so previously-working credentials keep working.
    pub async fn refresh_token(&self) -> Result<(), ApiError> {
        let url = self.endpoint(LOGIN_PATH);
        let (api_key, secret_key) = self.credentials.basic_credentials();

        let resp = self
            .http
            .post(url)
            .basic_auth(api_key, Some(secret_key.expose_secret()))
            .send()
            .await?;

        let status = resp.status();
        let body_text = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!(
                http_status = status.as_u16(),
                response = %truncate(&body_text),
                "Monnify login failed"
            );
            return Err(ApiError::Provider {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let body: MonnifyLoginResponse = serde_json::from_str(&body_text).map_err(|e| {
            warn!(error = %e, "Invalid JSON from Monnify login");
            ApiError::Provider {
                status: status.as_u16(),
                body: body_text.clone(),
            }
        })?;

        let token = body
            .response_body
            .and_then(|b| b.access_token)
            .ok_or_else(|| {
                warn!("Monnify login response did not include an access token");
                ApiError::Provider {
                    status: status.as_u16(),
                    body: "login response did not include an access token".into(),
                }
            })?;

        self.credentials.store_token(SecretString::from(token));
        Ok(())
    }

    /// Matches BVN details against the provider's records. A non-"success"
    /// `responseMessage` comes back as `Rejected`, not as an error.
    pub async fn verify_bvn(
        &self,
        request: &BvnMatchRequest<'_>,
    ) -> Result<VerificationOutcome, ApiError> {
        self.verification_call(BVN_MATCH_PATH, request).await
    }

    pub async fn verify_nin(&self, nin: &str) -> Result<VerificationOutcome, ApiError> {
        self.verification_call(NIN_LOOKUP_PATH, &NinLookupRequest { nin })
            .await
    }

    /// Reserves a virtual account and extracts the first entry of the
    /// returned accounts list. Persistence is the caller's job; nothing is
    /// mutated here on any failure path.
    pub async fn reserve_account(
        &self,
        request: &ReserveAccountRequest<'_>,
    ) -> Result<ReservedAccount, ApiError> {
        let token = self.credentials.bearer_token()?;

        let resp = self
            .http
            .post(self.endpoint(RESERVED_ACCOUNTS_PATH))
            .bearer_auth(token.expose_secret())
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let body_text = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!(
                http_status = status.as_u16(),
                account_reference = request.account_reference,
                response = %truncate(&body_text),
                "Monnify account reservation failed"
            );
            return Err(ApiError::Provider {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let body: ReserveAccountResponse = serde_json::from_str(&body_text).map_err(|e| {
            warn!(error = %e, "Invalid JSON from Monnify reservation");
            ApiError::Provider {
                status: status.as_u16(),
                body: body_text.clone(),
            }
        })?;

        let reserved = body.response_body.ok_or_else(|| ApiError::Provider {
            status: status.as_u16(),
            body: "reservation response did not include a responseBody".into(),
        })?;

        let account = reserved
            .accounts
            .into_iter()
            .next()
            .ok_or(ApiError::MissingAccountData)?;

        Ok(ReservedAccount {
            reservation_reference: reserved.reservation_reference,
            created_on: reserved.created_on,
            account_number: account.account_number,
            bank_name: account.bank_name,
            bank_code: account.bank_code,
        })
    }

    async fn verification_call<B: Serialize>(
        &self,
        path: &str,
        request: &B,
    ) -> Result<VerificationOutcome, ApiError> {
        let token = self.credentials.bearer_token()?;

        let resp = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(token.expose_secret())
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let body_text = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!(
                http_status = status.as_u16(),
                response = %truncate(&body_text),
                "Monnify verification call failed"
            );
            return Err(ApiError::Provider {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let body: MonnifyMessageResponse = serde_json::from_str(&body_text).map_err(|e| {
            warn!(error = %e, "Invalid JSON from Monnify verification");
            ApiError::Provider {
                status: status.as_u16(),
                body: body_text.clone(),
            }
        })?;

        match body.response_message {
            Some(message) if message == "success" => Ok(VerificationOutcome::Verified),
            Some(message) => Ok(VerificationOutcome::Rejected(message)),
            None => Err(ApiError::Provider {
                status: status.as_u16(),
                body: "response did not include a responseMessage".into(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(200).collect()
}
