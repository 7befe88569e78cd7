mod common;

use common::{create_test_state, register_user};
use diesel::prelude::*;
use kudipay::error::ApiError;
use kudipay::models::dtos::provisioning_dto::ProvisioningStatus;
use kudipay::schema::{virtual_accounts, wallets};
use kudipay::services::provisioning_service::ProvisioningService;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESERVED_ACCOUNTS_PATH: &str = "/api/v2/bank-transfer/reserved-accounts";

fn reservation_response() -> serde_json::Value {
    json!({
        "requestSuccessful": true,
        "responseMessage": "success",
        "responseCode": "0",
        "responseBody": {
            "contractCode": "4934121693",
            "accountReference": "Alice Doe_1",
            "accountName": "Alice Doe",
            "currencyCode": "NGN",
            "customerEmail": "a@x.com",
            "customerName": "Alice Doe",
            "accounts": [
                {
                    "bankCode": "50515",
                    "bankName": "Moniepoint Microfinance Bank",
                    "accountNumber": "8012345678"
                }
            ],
            "collectionChannel": "RESERVED_ACCOUNT",
            "reservationReference": "LXQPQK2DW6GPMYB2BA2X",
            "reservedAccountType": "GENERAL",
            "status": "ACTIVE",
            "createdOn": "2026-08-05 10:22:53.0"
        }
    })
}

#[tokio::test]
async fn full_onboarding_scenario() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RESERVED_ACCOUNTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reservation_response()))
        .mount(&mock_server)
        .await;

    let state = create_test_state(&mock_server.uri());
    let user_id = register_user(&state, "Alice Doe", "a@x.com", "0800", "BVN1", "NIN1").await;
    assert_eq!(user_id, 1);

    let status = ProvisioningService::status(&state, user_id)
        .await
        .expect("status");
    assert_eq!(status, ProvisioningStatus::Registered);

    let account = ProvisioningService::provision(&state, user_id)
        .await
        .expect("provision");

    assert_eq!(account.user_id, 1);
    assert_eq!(account.wallet_id, 1);
    assert_eq!(account.account_number, "8012345678");
    assert_eq!(account.bank_name, "Moniepoint Microfinance Bank");
    assert_eq!(account.bank_code, "50515");
    assert_eq!(account.reservation_reference, "LXQPQK2DW6GPMYB2BA2X");
    assert_eq!(account.created_on, "2026-08-05 10:22:53.0");

    let mut conn = state.db.get().unwrap();

    let reference: String = wallets::table
        .find(account.wallet_id)
        .select(wallets::account_reference)
        .first(&mut conn)
        .unwrap();
    assert_eq!(reference, "Alice Doe_1");

    let linked: (i32, i32) = virtual_accounts::table
        .find(account.virtual_account_id)
        .select((virtual_accounts::user_id, virtual_accounts::wallet_id))
        .first(&mut conn)
        .unwrap();
    assert_eq!(linked, (1, 1));
    drop(conn);

    let status = ProvisioningService::status(&state, user_id)
        .await
        .expect("status");
    assert_eq!(
        status,
        ProvisioningStatus::AccountReserved {
            wallet_id: 1,
            virtual_account_id: 1
        }
    );
}

#[tokio::test]
async fn provision_is_idempotent_once_reserved() {
    let mock_server = MockServer::start().await;
    // the reservation endpoint must only ever be hit once
    Mock::given(method("POST"))
        .and(path(RESERVED_ACCOUNTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reservation_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = create_test_state(&mock_server.uri());
    let user_id = register_user(&state, "Alice Doe", "a@x.com", "0800", "BVN1", "NIN1").await;

    let first = ProvisioningService::provision(&state, user_id)
        .await
        .expect("first provision");
    let second = ProvisioningService::provision(&state, user_id)
        .await
        .expect("second provision");

    assert_eq!(first.virtual_account_id, second.virtual_account_id);
    assert_eq!(first.account_number, second.account_number);

    let mut conn = state.db.get().unwrap();
    let count: i64 = wallets::table.count().get_result(&mut conn).unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn empty_accounts_list_yields_missing_account_data_and_persists_nothing() {
    let mut body = reservation_response();
    body["responseBody"]["accounts"] = json!([]);

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RESERVED_ACCOUNTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let state = create_test_state(&mock_server.uri());
    let user_id = register_user(&state, "Alice Doe", "a@x.com", "0800", "BVN1", "NIN1").await;

    let result = ProvisioningService::provision(&state, user_id).await;
    assert!(matches!(result, Err(ApiError::MissingAccountData)));

    let mut conn = state.db.get().unwrap();
    let count: i64 = virtual_accounts::table.count().get_result(&mut conn).unwrap();
    assert_eq!(count, 0);
    drop(conn);

    // the wallet survives; provisioning can be retried from here
    let status = ProvisioningService::status(&state, user_id)
        .await
        .expect("status");
    assert_eq!(status, ProvisioningStatus::WalletCreated { wallet_id: 1 });
}

#[tokio::test]
async fn failed_reservation_is_partial_and_resumable() {
    let mock_server = MockServer::start().await;

    // first call fails at the provider, the retry succeeds
    Mock::given(method("POST"))
        .and(path(RESERVED_ACCOUNTS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(RESERVED_ACCOUNTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reservation_response()))
        .mount(&mock_server)
        .await;

    let state = create_test_state(&mock_server.uri());
    let user_id = register_user(&state, "Alice Doe", "a@x.com", "0800", "BVN1", "NIN1").await;

    let first = ProvisioningService::provision(&state, user_id).await;
    match first {
        Err(ApiError::PartiallyProvisioned { wallet_id, .. }) => assert_eq!(wallet_id, 1),
        other => panic!("expected PartiallyProvisioned, got {:?}", other),
    }

    let second = ProvisioningService::provision(&state, user_id)
        .await
        .expect("resumed provision");
    assert_eq!(second.wallet_id, 1);

    // the retry reused the wallet from the failed run
    let mut conn = state.db.get().unwrap();
    let count: i64 = wallets::table.count().get_result(&mut conn).unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn provision_for_unknown_user_is_not_found() {
    let state = create_test_state("http://127.0.0.1:1");

    let result = ProvisioningService::provision(&state, 42).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn duplicate_account_number_from_provider_is_a_duplicate_key() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RESERVED_ACCOUNTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reservation_response()))
        .mount(&mock_server)
        .await;

    let state = create_test_state(&mock_server.uri());

    let alice = register_user(&state, "Alice Doe", "a@x.com", "0800", "BVN1", "NIN1").await;
    ProvisioningService::provision(&state, alice)
        .await
        .expect("first reservation");

    // the mock hands the same account number to the next user
    let bob = register_user(&state, "Bob Roe", "b@x.com", "0801", "BVN2", "NIN2").await;
    let result = ProvisioningService::provision(&state, bob).await;

    assert!(matches!(result, Err(ApiError::DuplicateKey(_))));
}
