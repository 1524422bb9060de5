use api_client::ApiClient;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, BloodType, InventorySummary, StockStatus, StockThresholds};

use crate::common::{self, FakeState, TOKEN};

fn stocked() -> FakeState {
    FakeState {
        inventory: vec![
            json!({ "blood_type": "O+", "units_available": 20, "last_updated": "2026-03-01T08:00:00" }),
            json!({ "blood_type": "A+", "units_available": 2 }),
            json!({ "blood_type": "B-", "units_available": 8, "stock_status": "low" }),
            json!({ "blood_type": "AB-", "units_available": 3, "stock_status": "good" }),
        ],
        ..FakeState::default()
    }
}

#[tokio::test]
async fn test_inventory_is_sorted_and_classified() {
    let api = common::spawn_api(stocked()).await;
    let client = ApiClient::new(&api.base_url).with_token(TOKEN);
    let thresholds = StockThresholds::default();

    let entries = client.list_inventory().await.expect("inventory");
    let rows: Vec<(BloodType, StockStatus)> = entries
        .iter()
        .map(|e| (e.blood_type, e.status(&thresholds)))
        .collect();

    assert_eq!(
        rows,
        vec![
            (BloodType::APos, StockStatus::Critical),
            (BloodType::BNeg, StockStatus::Low),
            (BloodType::OPos, StockStatus::Ok),
            (BloodType::AbNeg, StockStatus::Ok),
        ]
    );

    let summary = InventorySummary::from_entries(&entries, &thresholds);
    assert_eq!(summary.tracked, 4);
    assert_eq!(summary.needs_attention, 2);
    assert_eq!(summary.critical, 1);
}

#[tokio::test]
async fn test_update_then_refetch_shows_new_units() {
    let api = common::spawn_api(stocked()).await;
    let client = ApiClient::new(&api.base_url).with_token(TOKEN);

    let resp = client
        .update_inventory(BloodType::APos, " 15 ")
        .await
        .expect("update");
    assert_eq!(resp.message, "Inventory updated successfully");

    let entries = client.list_inventory().await.expect("inventory");
    let a_pos = entries
        .iter()
        .find(|e| e.blood_type == BloodType::APos)
        .expect("A+ listed");
    assert_eq!(a_pos.units_available, 15);
    assert_eq!(a_pos.status(&StockThresholds::default()), StockStatus::Ok);

    let state = api.state.lock().await;
    assert_eq!(
        state.inventory_updates,
        vec![json!({ "blood_type": "A+", "units_available": 15 })]
    );
}

#[tokio::test]
async fn test_invalid_units_make_no_call() {
    let api = common::spawn_api(stocked()).await;
    let client = ApiClient::new(&api.base_url).with_token(TOKEN);

    for raw in ["", "-1", "lots"] {
        let err = client
            .update_inventory(BloodType::OPos, raw)
            .await
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest, "input {raw:?}");
    }
    assert_eq!(api.hits("PUT /inventory").await, 0);
}
