mod common;

use common::{create_test_state, register_user, scratch_database_url, test_config};
use diesel::prelude::*;
use kudipay::error::ApiError;
use kudipay::models::app_config::LoginIdentifier;
use kudipay::models::dtos::auth_dto::{LoginRequest, RegisterRequest};
use kudipay::schema::users;
use kudipay::services::auth_service::AuthService;

fn request(email: &str, mobile: &str, bvn: &str, nin: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        full_name: "Alice Doe".into(),
        email: email.into(),
        mobile_no: mobile.into(),
        bvn: bvn.into(),
        nin: nin.into(),
        dob: "1990-01-01".into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn register_assigns_an_id_and_stores_no_plaintext_password() {
    let state = create_test_state("http://127.0.0.1:1");

    let user_id = register_user(&state, "Alice Doe", "a@x.com", "0800", "BVN1", "NIN1").await;
    assert_eq!(user_id, 1);

    let mut conn = state.db.get().unwrap();
    let stored_hash: String = users::table
        .find(user_id)
        .select(users::password_hash)
        .first(&mut conn)
        .unwrap();

    assert_ne!(stored_hash, "password123");
    assert!(bcrypt::verify("password123", &stored_hash).unwrap());
}

#[tokio::test]
async fn register_rejects_short_password_and_writes_no_row() {
    let state = create_test_state("http://127.0.0.1:1");

    let result = AuthService::register(
        &state,
        request("a@x.com", "0800", "BVN1", "NIN1", "short77"),
    )
    .await;

    assert!(matches!(result, Err(ApiError::Validation(_))));

    let mut conn = state.db.get().unwrap();
    let count: i64 = users::table.count().get_result(&mut conn).unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn register_rejects_duplicate_email_bvn_and_nin() {
    let state = create_test_state("http://127.0.0.1:1");

    register_user(&state, "Alice Doe", "a@x.com", "0800", "BVN1", "NIN1").await;

    let dup_email = AuthService::register(
        &state,
        request("a@x.com", "0801", "BVN2", "NIN2", "password123"),
    )
    .await;
    assert!(matches!(dup_email, Err(ApiError::DuplicateKey(_))));

    let dup_bvn = AuthService::register(
        &state,
        request("b@x.com", "0802", "BVN1", "NIN3", "password123"),
    )
    .await;
    assert!(matches!(dup_bvn, Err(ApiError::DuplicateKey(_))));

    let dup_nin = AuthService::register(
        &state,
        request("c@x.com", "0803", "BVN3", "NIN1", "password123"),
    )
    .await;
    assert!(matches!(dup_nin, Err(ApiError::DuplicateKey(_))));

    let mut conn = state.db.get().unwrap();
    let count: i64 = users::table.count().get_result(&mut conn).unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn login_by_mobile_returns_id_and_name() {
    let state = create_test_state("http://127.0.0.1:1");
    let user_id = register_user(&state, "Alice Doe", "a@x.com", "0800", "BVN1", "NIN1").await;

    let response = AuthService::login(
        &state,
        LoginRequest {
            identifier: "0800".into(),
            password: "password123".into(),
        },
    )
    .await
    .expect("login");

    assert_eq!(response.user_id, user_id);
    assert_eq!(response.full_name, "Alice Doe");
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let state = create_test_state("http://127.0.0.1:1");
    register_user(&state, "Alice Doe", "a@x.com", "0800", "BVN1", "NIN1").await;

    let result = AuthService::login(
        &state,
        LoginRequest {
            identifier: "0800".into(),
            password: "wrong-password".into(),
        },
    )
    .await;

    assert!(matches!(result, Err(ApiError::Unauthorized(_))));
}

#[tokio::test]
async fn login_with_unknown_mobile_is_unauthorized() {
    let state = create_test_state("http://127.0.0.1:1");

    let result = AuthService::login(
        &state,
        LoginRequest {
            identifier: "0999".into(),
            password: "password123".into(),
        },
    )
    .await;

    assert!(matches!(result, Err(ApiError::Unauthorized(_))));
}

#[tokio::test]
async fn login_identifier_can_be_switched_to_email() {
    let mut config = test_config(&scratch_database_url(), "http://127.0.0.1:1");
    config.login_identifier = LoginIdentifier::Email;
    let state = common::create_test_state_with_config(config);

    let user_id = register_user(&state, "Alice Doe", "a@x.com", "0800", "BVN1", "NIN1").await;

    let response = AuthService::login(
        &state,
        LoginRequest {
            identifier: "A@X.com ".into(),
            password: "password123".into(),
        },
    )
    .await
    .expect("login by email");

    assert_eq!(response.user_id, user_id);
}

#[test]
fn password_hashing_round_trip() {
    let password = "SecurePassword123!";
    let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST).unwrap();

    assert!(bcrypt::verify(password, &hash).unwrap());
    assert!(!bcrypt::verify("WrongPassword", &hash).unwrap());
}
