use dioxus::prelude::*;
use shared_types::{InventoryEntry, StockStatus, StockThresholds};
use shared_ui::components::{Card, CardAccent, CardContent, CardHeader, CardTitle};

use crate::auth::use_auth;
use crate::components::{StockBadge, StockMeter};
use crate::format::format_optional_date;

#[component]
pub fn Inventory() -> Element {
    let auth = use_auth();
    let thresholds = api_client::app_config().inventory;

    let inventory = use_resource(move || async move {
        auth.client()
            .list_inventory()
            .await
            .map_err(|e| tracing::error!(error = %e, "Failed to load inventory"))
            .ok()
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./listing.css") }

        div { class: "listing-page container",
            div { class: "listing-header",
                h1 { "Blood Inventory" }
                p { "Current stock for every blood type." }
            }

            match &*inventory.read() {
                Some(Some(entries)) if entries.is_empty() => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-state", "No inventory records yet." }
                        }
                    }
                },
                Some(Some(entries)) => rsx! {
                    div { class: "stock-grid",
                        for entry in entries.clone() {
                            StockCard { key: "{entry.blood_type}", entry: entry.clone(), thresholds: thresholds }
                        }
                    }
                },
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-state", "Could not load inventory. Please refresh the page." }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading",
                        div { class: "spinner" }
                        p { "Loading inventory..." }
                    }
                },
            }
        }
    }
}

#[component]
fn StockCard(entry: InventoryEntry, thresholds: StockThresholds) -> Element {
    let status = entry.status(&thresholds);
    let accent = match status {
        StockStatus::Critical => CardAccent::Emergency,
        StockStatus::Low => CardAccent::Warning,
        StockStatus::Ok => CardAccent::Success,
    };
    let blood_type = entry.blood_type;
    let units = entry.units_available;
    let updated = format_optional_date(entry.last_updated.as_deref());

    rsx! {
        Card { accent: accent, class: "stock-card",
            CardHeader {
                div { class: "stock-card-heading",
                    CardTitle { "{blood_type}" }
                    StockBadge { status: status }
                }
            }
            CardContent {
                p { class: "stock-units", "{units} units" }
                StockMeter { units: units, status: status, thresholds: thresholds }
                p { class: "stock-updated", "Last updated {updated}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::BloodType;

    fn entry(units: u32, status: Option<StockStatus>) -> InventoryEntry {
        InventoryEntry {
            blood_type: BloodType::AbNeg,
            units_available: units,
            stock_status: status,
            last_updated: Some("2026-02-01T08:30:00".into()),
            is_low_stock: None,
        }
    }

    #[test]
    fn card_derives_status_without_server_label() {
        let html = dioxus_ssr::render_element(rsx! {
            StockCard { entry: entry(8, None), thresholds: StockThresholds::default() }
        });
        assert!(html.contains("AB-"));
        assert!(html.contains("8 units"));
        assert!(html.contains(r#"data-level="low""#));
        assert!(html.contains("Feb 1, 2026"));
    }

    #[test]
    fn server_good_label_renders_ok() {
        let parsed: InventoryEntry = serde_json::from_str(
            r#"{"blood_type":"AB-","units_available":3,"stock_status":"good"}"#,
        )
        .unwrap();
        let html = dioxus_ssr::render_element(rsx! {
            StockCard { entry: parsed, thresholds: StockThresholds::default() }
        });
        assert!(html.contains(r#"data-level="ok""#));
    }
}
