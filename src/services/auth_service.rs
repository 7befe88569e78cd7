use crate::error::ApiError;
use crate::models::app_config::LoginIdentifier;
use crate::models::app_state::AppState;
use crate::models::dtos::auth_dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};
use crate::models::entities::user::{NewUser, User};
use crate::repositories::user_repository::UserRepository;
use tracing::{error, info, warn};
use validator::Validate;

pub struct AuthService;

impl AuthService {
    pub async fn register(
        state: &AppState,
        payload: RegisterRequest,
    ) -> Result<RegisterResponse, ApiError> {
        let payload = payload.normalize();
        payload.validate()?;

        let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)?;

        let mut conn = state.db.get().map_err(|_| {
            error!("auth.register: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let user = UserRepository::create(
            &mut conn,
            NewUser {
                full_name: &payload.full_name,
                email: &payload.email,
                mobile_no: &payload.mobile_no,
                bvn: &payload.bvn,
                nin: &payload.nin,
                dob: &payload.dob,
                password_hash: &password_hash,
            },
        )?;

        info!(user_id = user.id, email = %user.email, "User registered");

        Ok(RegisterResponse {
            user_id: user.id,
            email: user.email,
        })
    }

    pub async fn login(state: &AppState, payload: LoginRequest) -> Result<LoginResponse, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("auth.login: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let user = match state.config.login_identifier {
            LoginIdentifier::Mobile => {
                UserRepository::find_by_mobile(&mut conn, &payload.identifier)?
            }
            LoginIdentifier::Email => UserRepository::find_by_email(
                &mut conn,
                &payload.identifier.trim().to_lowercase(),
            )?,
        };

        Self::verify_password(&payload.password, user.as_ref())?;

        let user = user.ok_or_else(|| ApiError::Unauthorized("Invalid credentials".into()))?;

        info!(user_id = user.id, "User signed in");

        Ok(LoginResponse {
            user_id: user.id,
            full_name: user.full_name,
        })
    }

    fn verify_password(password: &str, user: Option<&User>) -> Result<(), ApiError> {
        let Some(user) = user else {
            // hash something so an unknown identifier costs as much as a mismatch
            let _ = bcrypt::hash(password, bcrypt::DEFAULT_COST);
            warn!("auth.login: unknown identifier");
            return Err(ApiError::Unauthorized("Invalid credentials".into()));
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            warn!("auth.login: invalid credentials");
            return Err(ApiError::Unauthorized("Invalid credentials".into()));
        }

        Ok(())
    }
}
