use diesel::result::DatabaseErrorKind;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Database(diesel::result::Error),
    DatabaseConnection(String),
    Bcrypt(bcrypt::BcryptError),
    Validation(validator::ValidationErrors),
    DuplicateKey(String),
    NotFound(String),
    Unauthorized(String),
    VerificationFailed(String),
    Provider { status: u16, body: String },
    MissingAccountData,
    Transport(String),
    PartiallyProvisioned { wallet_id: i32, reason: String },
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::Bcrypt(e) => write!(f, "Password hashing error: {}", e),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::DuplicateKey(e) => write!(f, "Duplicate record: {}", e),
            ApiError::NotFound(e) => write!(f, "Not found: {}", e),
            ApiError::Unauthorized(e) => write!(f, "Unauthorized: {}", e),
            ApiError::VerificationFailed(e) => write!(f, "Identity verification failed: {}", e),
            ApiError::Provider { status, body } => {
                write!(f, "Provider error (status {}): {}", status, body)
            }
            ApiError::MissingAccountData => {
                write!(f, "Provider response did not contain account details")
            }
            ApiError::Transport(e) => write!(f, "Transport error: {}", e),
            ApiError::PartiallyProvisioned { wallet_id, reason } => write!(
                f,
                "Wallet {} created but virtual account reservation failed: {}",
                wallet_id, reason
            ),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            ApiError::Bcrypt(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => ApiError::NotFound("record not found".into()),
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                ApiError::DuplicateKey(info.message().to_string())
            }
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                ApiError::NotFound(info.message().to_string())
            }
            other => ApiError::Database(other),
        }
    }
}

impl From<diesel::r2d2::PoolError> for ApiError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::Bcrypt(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Transport("request to payment provider timed out".into())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
