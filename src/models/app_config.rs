use eyre::Report;
use secrecy::SecretString;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,

    pub monnify: MonnifyInfo,

    pub provisioning: ProvisioningInfo,

    pub login_identifier: LoginIdentifier,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "kudipay.db".into()),

            monnify: MonnifyInfo::new()?,

            provisioning: ProvisioningInfo::new(),

            login_identifier: LoginIdentifier::from_env(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct MonnifyInfo {
    pub api_key: String,
    pub secret_key: SecretString,
    pub contract_code: String,
    pub base_url: String,
    /// Bearer token cached from a previous run, if any. Refreshing is an
    /// explicit operation; this only seeds the credential store.
    pub cached_token: Option<SecretString>,
}

impl MonnifyInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            api_key: env::var("API_KEY").map_err(|_| eyre::eyre!("API_KEY must be set"))?,
            secret_key: SecretString::from(
                env::var("SECRET_KEY").map_err(|_| eyre::eyre!("SECRET_KEY must be set"))?,
            ),
            contract_code: env::var("CONTRACT_CODE")
                .map_err(|_| eyre::eyre!("CONTRACT_CODE must be set"))?,
            base_url: env::var("MONNIFY_BASE_URL")
                .unwrap_or_else(|_| "https://sandbox.monnify.com".into()),
            cached_token: env::var("JWT").ok().map(SecretString::from),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProvisioningInfo {
    pub currency_code: String,
    pub preferred_banks: Vec<String>,
}

impl ProvisioningInfo {
    pub fn new() -> Self {
        Self {
            currency_code: env::var("CURRENCY_CODE").unwrap_or_else(|_| "NGN".into()),
            preferred_banks: env::var("PREFERRED_BANKS")
                .unwrap_or_else(|_| "50515".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

/// Which user field a sign-in identifier is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginIdentifier {
    #[default]
    Mobile,
    Email,
}

impl LoginIdentifier {
    pub fn from_env() -> Self {
        match env::var("LOGIN_IDENTIFIER").as_deref() {
            Ok("email") => LoginIdentifier::Email,
            _ => LoginIdentifier::Mobile,
        }
    }
}
