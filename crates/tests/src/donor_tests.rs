use api_client::ApiClient;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, INELIGIBLE_MESSAGE};

use crate::common::{self, blood_request, FakeApi, FakeState, TOKEN};

async fn donor_api(eligible: bool) -> FakeApi {
    let days_until_eligible = if eligible { 0 } else { 12 };
    common::spawn_api(FakeState {
        eligibility: json!({
            "eligible": eligible,
            "last_donation": "2026-01-05T09:00:00",
            "next_eligible_date": "2026-03-02T09:00:00",
            "days_until_eligible": days_until_eligible,
        }),
        requests: vec![
            blood_request("r1", "high", "open", "h1"),
            blood_request("r2", "normal", "open", "h1"),
            blood_request("r3", "high", "fulfilled", "h2"),
        ],
        ..FakeState::default()
    })
    .await
}

#[tokio::test]
async fn test_overview_joins_eligibility_and_matches() {
    let api = donor_api(true).await;
    let client = ApiClient::new(&api.base_url).with_token(TOKEN);

    let overview = client.donor_overview().await;

    assert!(overview.is_eligible());
    assert_eq!(overview.matching_requests.len(), 2);
    assert_eq!(overview.emergency_count(), 1);
    assert_eq!(api.hits("GET /donor/eligibility").await, 1);
    assert_eq!(api.hits("GET /donor/matching-requests").await, 1);
}

#[tokio::test]
async fn test_overview_survives_failed_fetches() {
    let api = donor_api(true).await;
    let client = ApiClient::new(&api.base_url).with_token("expired");

    let overview = client.donor_overview().await;

    assert_eq!(overview.eligibility, None);
    assert!(overview.matching_requests.is_empty());
    assert!(!overview.is_eligible());
}

#[tokio::test]
async fn test_ineligible_donor_schedule_makes_no_call() {
    let api = donor_api(false).await;
    let client = ApiClient::new(&api.base_url).with_token(TOKEN);

    let overview = client.donor_overview().await;
    assert!(!overview.is_eligible());

    let err = client
        .schedule_donation(overview.eligibility.as_ref(), "r1")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Ineligible);
    assert_eq!(err.message, INELIGIBLE_MESSAGE);
    assert_eq!(api.hits("POST /donor/schedule").await, 0);
}

#[tokio::test]
async fn test_unknown_eligibility_blocks_schedule() {
    let api = donor_api(true).await;
    let client = ApiClient::new(&api.base_url).with_token(TOKEN);

    let err = client.schedule_donation(None, "r1").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Ineligible);
    assert_eq!(api.total_hits().await, 0);
}

#[tokio::test]
async fn test_eligible_donor_schedules_with_current_time() {
    let api = donor_api(true).await;
    let client = ApiClient::new(&api.base_url).with_token(TOKEN);

    let overview = client.donor_overview().await;
    let resp = client
        .schedule_donation(overview.eligibility.as_ref(), "r2")
        .await
        .expect("schedule should succeed");
    assert_eq!(resp.request_id, "r2");

    let state = api.state.lock().await;
    assert_eq!(state.scheduled.len(), 1);
    let sent = &state.scheduled[0];
    assert_eq!(sent["request_id"], "r2");
    let date = sent["scheduled_date"].as_str().unwrap_or_default();
    assert!(date.starts_with("20"), "unexpected date {date}");
    assert!(date.ends_with('Z'), "unexpected date {date}");
}

#[tokio::test]
async fn test_schedule_failure_carries_server_message() {
    let api = common::spawn_api(FakeState {
        eligibility: json!({ "eligible": true }),
        schedule_failure: Some((
            StatusCode::BAD_REQUEST,
            json!({ "error": "Request is no longer open" }),
        )),
        ..FakeState::default()
    })
    .await;
    let client = ApiClient::new(&api.base_url).with_token(TOKEN);

    let eligibility = client.eligibility().await.expect("eligibility");
    let err = client
        .schedule_donation(Some(&eligibility), "r9")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.friendly_message(), "Request is no longer open");
}
