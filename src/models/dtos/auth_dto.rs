use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Full name must not be empty"))]
    pub full_name: String,

    #[validate(email)]
    pub email: String,

    pub mobile_no: String,

    pub bvn: String,

    pub nin: String,

    /// Date of birth, YYYY-MM-DD.
    pub dob: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

impl RegisterRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self.full_name = self.full_name.trim().to_string();
        self
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: i32,
    pub email: String,
}

/// The identifier field is interpreted according to the configured
/// login identifier (mobile number by default, email when selected).
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: i32,
    pub full_name: String,
}
