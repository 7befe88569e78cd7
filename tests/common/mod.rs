use diesel_migrations::MigrationHarness;
use kudipay::models::app_config::{AppConfig, LoginIdentifier, MonnifyInfo, ProvisioningInfo};
use kudipay::models::app_state::AppState;
use kudipay::models::dtos::auth_dto::RegisterRequest;
use kudipay::services::auth_service::AuthService;
use kudipay::utility::db_pool::create_db_pool;
use secrecy::SecretString;
use std::sync::Arc;
use uuid::Uuid;

/// Path for a scratch SQLite database unique to one test.
#[allow(dead_code)]
pub fn scratch_database_url() -> String {
    std::env::temp_dir()
        .join(format!("kudipay_test_{}.db", Uuid::new_v4()))
        .to_string_lossy()
        .into_owned()
}

/// Configuration pointing at a scratch database and the given provider
/// base URL, with a bearer token already cached.
#[allow(dead_code)]
pub fn test_config(database_url: &str, provider_base_url: &str) -> AppConfig {
    AppConfig {
        database_url: database_url.to_string(),
        monnify: MonnifyInfo {
            api_key: "MK_TEST_KEY".into(),
            secret_key: SecretString::from("test_secret_key"),
            contract_code: "4934121693".into(),
            base_url: provider_base_url.to_string(),
            cached_token: Some(SecretString::from("test-bearer-token")),
        },
        provisioning: ProvisioningInfo {
            currency_code: "NGN".into(),
            preferred_banks: vec!["50515".into()],
        },
        login_identifier: LoginIdentifier::Mobile,
    }
}

/// Create a test AppState over a fresh database with migrations applied.
#[allow(dead_code)]
pub fn create_test_state(provider_base_url: &str) -> Arc<AppState> {
    create_test_state_with_config(test_config(&scratch_database_url(), provider_base_url))
}

#[allow(dead_code)]
pub fn create_test_state_with_config(config: AppConfig) -> Arc<AppState> {
    let pool = create_db_pool(&config.database_url).expect("test database pool");

    {
        let mut conn = pool.get().expect("connection for migrations");
        conn.run_pending_migrations(kudipay::MIGRATIONS)
            .expect("migrations");
    }

    AppState::new(pool, config).expect("test app state")
}

/// Register a user with sane defaults and return the new id.
#[allow(dead_code)]
pub async fn register_user(
    state: &AppState,
    full_name: &str,
    email: &str,
    mobile_no: &str,
    bvn: &str,
    nin: &str,
) -> i32 {
    AuthService::register(
        state,
        RegisterRequest {
            full_name: full_name.into(),
            email: email.into(),
            mobile_no: mobile_no.into(),
            bvn: bvn.into(),
            nin: nin.into(),
            dob: "1990-01-01".into(),
            password: "password123".into(),
        },
    )
    .await
    .expect("register user")
    .user_id
}
