use api_client::session::{self, MemoryStorage, SessionState, SessionStorage};
use api_client::ApiClient;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, BloodType, RegisterRequest, Role, GENERIC_ERROR_MESSAGE};

use crate::common::{self, FakeState, PASSWORD, TOKEN};

fn donor_profile(email: &str) -> RegisterRequest {
    RegisterRequest {
        name: "Grace".into(),
        email: email.into(),
        password: PASSWORD.into(),
        role: Role::Donor,
        blood_type: Some(BloodType::BNeg),
        hospital_name: None,
        location: None,
        phone: Some("  ".into()),
    }
}

#[tokio::test]
async fn test_login_persists_session_until_logout() {
    let api = common::spawn_api(FakeState::default()).await;
    let client = ApiClient::new(&api.base_url);
    let storage = MemoryStorage::default();

    let mut state = session::restore(&storage).await;
    assert_eq!(state, SessionState::Anonymous);

    let signed_in = session::login(&client, &storage, "ada@example.com", PASSWORD)
        .await
        .expect("login should succeed");
    assert_eq!(signed_in.token, TOKEN);
    assert_eq!(signed_in.user.role, "donor");
    state.sign_in(signed_in.clone());
    assert!(state.is_authenticated());

    // A reload reads the same session back.
    assert_eq!(
        session::restore(&storage).await,
        SessionState::Authenticated(signed_in)
    );

    session::logout(&storage).await;
    state.sign_out();
    assert!(!state.is_authenticated());
    assert_eq!(storage.load().await, None);
    assert_eq!(session::restore(&storage).await, SessionState::Anonymous);
}

#[tokio::test]
async fn test_login_wrong_password_shows_server_message() {
    let api = common::spawn_api(FakeState::default()).await;
    let client = ApiClient::new(&api.base_url);
    let storage = MemoryStorage::default();

    let err = session::login(&client, &storage, "ada@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err, "Invalid email or password");
    assert_eq!(storage.load().await, None);
}

#[tokio::test]
async fn test_register_acknowledgement_follows_up_with_login() {
    let api = common::spawn_api(FakeState::default()).await;
    let client = ApiClient::new(&api.base_url);
    let storage = MemoryStorage::default();

    let session = session::register(&client, &storage, donor_profile("grace@example.com"))
        .await
        .expect("registration should succeed");

    assert_eq!(session.user.email, "grace@example.com");
    assert_eq!(session.user.blood_type, Some(BloodType::BNeg));
    assert_eq!(api.hits("POST /auth/register").await, 1);
    assert_eq!(api.hits("POST /auth/login").await, 1);
    assert!(storage.load().await.is_some());
}

#[tokio::test]
async fn test_register_with_session_skips_login() {
    let api = common::spawn_api(FakeState {
        register_returns_session: true,
        ..FakeState::default()
    })
    .await;
    let client = ApiClient::new(&api.base_url);
    let storage = MemoryStorage::default();

    let session = session::register(&client, &storage, donor_profile("grace@example.com"))
        .await
        .expect("registration should succeed");

    assert_eq!(session.token, TOKEN);
    assert_eq!(api.hits("POST /auth/login").await, 0);
}

#[tokio::test]
async fn test_register_duplicate_email_is_rejected() {
    let api = common::spawn_api(FakeState::default()).await;
    let client = ApiClient::new(&api.base_url);
    let storage = MemoryStorage::default();

    let err = session::register(&client, &storage, donor_profile("ada@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err, "User with this email already exists");
    assert_eq!(storage.load().await, None);
}

#[tokio::test]
async fn test_register_donor_without_blood_type_makes_no_call() {
    let api = common::spawn_api(FakeState::default()).await;
    let client = ApiClient::new(&api.base_url);
    let storage = MemoryStorage::default();

    let profile = RegisterRequest {
        blood_type: None,
        ..donor_profile("grace@example.com")
    };
    assert!(session::register(&client, &storage, profile).await.is_err());
    assert_eq!(api.total_hits().await, 0);
}

#[tokio::test]
async fn test_authenticated_calls_carry_bearer_token() {
    let api = common::spawn_api(FakeState::default()).await;
    let anonymous = ApiClient::new(&api.base_url);

    let err = anonymous.list_requests().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid or expired token");
    assert_eq!(api.state.lock().await.last_authorization, None);

    let authed = anonymous.with_token(TOKEN);
    assert!(authed.list_requests().await.is_ok());
    assert_eq!(
        api.state.lock().await.last_authorization.as_deref(),
        Some("Bearer test-token")
    );
}

#[tokio::test]
async fn test_unreachable_api_yields_generic_message() {
    let client = ApiClient::new("http://127.0.0.1:9/api");
    let storage = MemoryStorage::default();

    let err = session::login(&client, &storage, "ada@example.com", PASSWORD)
        .await
        .unwrap_err();
    assert_eq!(err, GENERIC_ERROR_MESSAGE);
}
