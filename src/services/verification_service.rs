use crate::clients::monnify::MonnifyClient;
use crate::error::ApiError;
use crate::models::app_state::AppState;
use crate::models::dtos::monnify_dto::{BvnMatchRequest, VerificationOutcome};
use crate::repositories::user_repository::UserRepository;
use tracing::{error, info, warn};

pub struct VerificationService;

impl VerificationService {
    /// Checks the user's BVN details and NIN against the provider. The
    /// first rejected document fails the whole check with the provider's
    /// message; nothing is written locally either way.
    pub async fn confirm_identity(state: &AppState, user_id: i32) -> Result<(), ApiError> {
        // connection is released before the remote round trips start
        let user = {
            let mut conn = state.db.get().map_err(|_| {
                error!("identity.confirm: failed to acquire db connection");
                ApiError::DatabaseConnection("Database unavailable".into())
            })?;
            UserRepository::find_by_id(&mut conn, user_id)?
        }
        .ok_or_else(|| ApiError::NotFound(format!("No user found with id {}", user_id)))?;

        let client = MonnifyClient::from_state(state)?;

        let bvn_request = BvnMatchRequest {
            bvn: &user.bvn,
            name: &user.full_name,
            date_of_birth: &user.dob,
            mobile_no: &user.mobile_no,
        };

        match client.verify_bvn(&bvn_request).await? {
            VerificationOutcome::Verified => {}
            VerificationOutcome::Rejected(message) => {
                warn!(user_id, %message, "identity.confirm: BVN mismatch");
                return Err(ApiError::VerificationFailed(message));
            }
        }

        match client.verify_nin(&user.nin).await? {
            VerificationOutcome::Verified => {}
            VerificationOutcome::Rejected(message) => {
                warn!(user_id, %message, "identity.confirm: NIN rejected");
                return Err(ApiError::VerificationFailed(message));
            }
        }

        info!(user_id, "Identity documents verified");
        Ok(())
    }
}
