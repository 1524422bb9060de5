use api_client::ApiClient;
use pretty_assertions::assert_eq;
use shared_types::{
    created_by, AppErrorKind, CreateRequestForm, RequestFilter, SessionUser, Urgency, ALL_FILTERS,
};

use crate::common::{self, blood_request, FakeState, TOKEN};

fn ids(list: &[shared_types::BloodRequest]) -> Vec<&str> {
    list.iter().map(|r| r.request_id.as_str()).collect()
}

fn seeded() -> FakeState {
    FakeState {
        requests: vec![
            blood_request("r1", "high", "open", "h1"),
            blood_request("r2", "normal", "open", "h2"),
            blood_request("r3", "high", "fulfilled", "h1"),
            blood_request("r4", "normal", "cancelled", "h2"),
        ],
        ..FakeState::default()
    }
}

#[tokio::test]
async fn test_listing_filters_are_client_side() {
    let api = common::spawn_api(seeded()).await;
    let client = ApiClient::new(&api.base_url).with_token(TOKEN);

    let all = client.list_requests().await.expect("list");
    assert_eq!(ids(&all), vec!["r1", "r2", "r3", "r4"]);

    assert_eq!(ids(&RequestFilter::All.apply(&all)), vec!["r1", "r2", "r3", "r4"]);
    assert_eq!(ids(&RequestFilter::Emergency.apply(&all)), vec!["r1", "r3"]);
    assert_eq!(ids(&RequestFilter::Open.apply(&all)), vec!["r1", "r2"]);
    for filter in ALL_FILTERS {
        let once = filter.apply(&all);
        assert_eq!(filter.apply(&once), once);
    }

    // Filtering never goes back to the server.
    assert_eq!(api.hits("GET /requests").await, 1);
}

#[tokio::test]
async fn test_malformed_row_does_not_hide_the_rest() {
    let mut state = seeded();
    let mut broken = blood_request("bad", "high", "open", "h1");
    broken["quantity"] = serde_json::json!(-1);
    state.requests.insert(1, broken);
    let api = common::spawn_api(state).await;
    let client = ApiClient::new(&api.base_url).with_token(TOKEN);

    let all = client.list_requests().await.expect("list");
    assert_eq!(ids(&all), vec!["r1", "r2", "r3", "r4"]);

    let matching = client.matching_requests().await.expect("matching");
    assert_eq!(ids(&matching), vec!["r1", "r2"]);
}

#[tokio::test]
async fn test_hospital_sees_only_own_requests() {
    let api = common::spawn_api(seeded()).await;
    let client = ApiClient::new(&api.base_url).with_token(TOKEN);

    let all = client.list_requests().await.expect("list");
    assert_eq!(ids(&created_by(&all, "h1")), vec!["r1", "r3"]);
}

#[tokio::test]
async fn test_create_request_then_refetch() {
    let api = common::spawn_api(seeded()).await;
    let client = ApiClient::new(&api.base_url).with_token(TOKEN);

    let hospital = SessionUser {
        user_id: "donor-1".into(),
        role: "hospital".into(),
        hospital_name: Some("St. Mary".into()),
        location: Some("Leeds".into()),
        ..SessionUser::default()
    };
    let form = CreateRequestForm {
        blood_type: "AB+".into(),
        quantity: "4".into(),
        urgency: "high".into(),
        notes: "Theatre 2".into(),
        ..CreateRequestForm::for_user(Some(&hospital))
    };

    let resp = client.create_request(&form).await.expect("create");
    assert_eq!(resp.request_id, "req-5");

    let all = client.list_requests().await.expect("list");
    let created = all
        .iter()
        .find(|r| r.request_id == "req-5")
        .expect("new request listed");
    assert_eq!(created.quantity, 4);
    assert_eq!(created.urgency, Urgency::High);
    assert_eq!(created.hospital_display(), "St. Mary");
    assert_eq!(created.location_display(), "Leeds");
}

#[tokio::test]
async fn test_blank_required_fields_block_create() {
    let api = common::spawn_api(seeded()).await;
    let client = ApiClient::new(&api.base_url).with_token(TOKEN);

    for (blood_type, quantity, urgency) in [("", "2", "normal"), ("A+", " ", "normal"), ("A+", "2", "")] {
        let form = CreateRequestForm {
            blood_type: blood_type.into(),
            quantity: quantity.into(),
            urgency: urgency.into(),
            ..CreateRequestForm::for_user(None)
        };
        let err = client.create_request(&form).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
    }
    assert_eq!(api.hits("POST /requests").await, 0);
}
