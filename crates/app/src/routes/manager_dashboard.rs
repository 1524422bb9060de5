use std::collections::{HashMap, HashSet};

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdClock, LdPackage};
use dioxus_free_icons::Icon;
use shared_types::{BloodType, InventoryEntry, InventorySummary, StockStatus, StockThresholds};
use shared_ui::components::{
    Button, ButtonSize, Card, CardAccent, CardContent, CardHeader, CardTitle, Input,
};
use shared_ui::{use_toast, ToastOptions};

use crate::auth::use_auth;
use crate::components::{Notice, NoticeDialog, StockBadge, StockMeter, Widget, WidgetStat};
use crate::format::format_optional_date;

const UPDATE_FAILED: &str = "Failed to update inventory. Please try again.";

/// Entries that need restocking, with their status.
pub fn low_stock(
    entries: &[InventoryEntry],
    thresholds: &StockThresholds,
) -> Vec<(InventoryEntry, StockStatus)> {
    entries
        .iter()
        .map(|e| (e.clone(), e.status(thresholds)))
        .filter(|(_, status)| status.needs_attention())
        .collect()
}

/// Blood types with an update in flight. Rows lock independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InFlight(HashSet<BloodType>);

impl InFlight {
    /// Mark a row busy. Returns false when that row is already updating.
    pub fn begin(&mut self, blood_type: BloodType) -> bool {
        self.0.insert(blood_type)
    }

    pub fn finish(&mut self, blood_type: BloodType) {
        self.0.remove(&blood_type);
    }

    pub fn contains(&self, blood_type: BloodType) -> bool {
        self.0.contains(&blood_type)
    }
}

#[component]
pub fn ManagerDashboard() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let thresholds = api_client::app_config().inventory;

    let mut drafts = use_signal(HashMap::<BloodType, String>::new);
    let mut updating = use_signal(InFlight::default);
    let mut notice = use_signal(|| None::<Notice>);

    let mut inventory = use_resource(move || async move {
        auth.client()
            .list_inventory()
            .await
            .map_err(|e| tracing::error!(error = %e, "Failed to load inventory"))
            .ok()
    });

    let mut handle_update = move |blood_type: BloodType| {
        if !updating.write().begin(blood_type) {
            return;
        }
        let raw = drafts.read().get(&blood_type).cloned().unwrap_or_default();

        spawn(async move {
            match auth.client().update_inventory(blood_type, &raw).await {
                Ok(resp) => {
                    drafts.write().remove(&blood_type);
                    inventory.restart();
                    let message = if resp.message.trim().is_empty() {
                        format!("{blood_type} inventory updated")
                    } else {
                        resp.message
                    };
                    toast.success(message, ToastOptions::new());
                }
                Err(e) => {
                    tracing::error!(error = %e, blood_type = %blood_type, "Failed to update inventory");
                    notice.set(Some(Notice::failure(&e, UPDATE_FAILED)));
                }
            }
            updating.write().finish(blood_type);
        });
    };

    let busy = updating.read().clone();
    let current_drafts = drafts.read().clone();

    rsx! {
        div { class: "dashboard-header",
            h1 { "Blood Bank Dashboard" }
            p { "Monitor stock levels and record new units." }
        }

        match &*inventory.read() {
            Some(Some(entries)) => {
                let summary = InventorySummary::from_entries(entries, &thresholds);
                let alerts: Vec<(BloodType, String, &'static str, CardAccent)> =
                    low_stock(entries, &thresholds)
                        .into_iter()
                        .map(|(e, status)| {
                            let accent = if status == StockStatus::Critical {
                                CardAccent::Emergency
                            } else {
                                CardAccent::Warning
                            };
                            let heading = format!("{}: {} units", e.blood_type, e.units_available);
                            (e.blood_type, heading, status.detail(), accent)
                        })
                        .collect();
                let critical_note = format!("{} critical", summary.critical);
                let rows: Vec<(BloodType, InventoryEntry, StockStatus)> = entries
                    .iter()
                    .map(|e| (e.blood_type, e.clone(), e.status(&thresholds)))
                    .collect();

                rsx! {
                    div { class: "widget-grid",
                        Widget {
                            title: "Blood Types Tracked",
                            icon: rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
                            WidgetStat { value: summary.tracked, label: "in inventory" }
                        }
                        Widget {
                            title: "Low Stock Alerts",
                            icon: rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
                            WidgetStat {
                                value: summary.needs_attention,
                                label: "types need restocking",
                                tone: if summary.critical > 0 { "emergency" } else { "warning" },
                            }
                            if summary.critical > 0 {
                                p { class: "widget-critical", "{critical_note}" }
                            }
                        }
                        Widget {
                            title: "Recent Activity",
                            icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
                            p { class: "widget-placeholder", "Donation and transfer history will appear here." }
                        }
                    }

                    section { class: "dashboard-section",
                        h2 { "Inventory Levels" }
                        div { class: "inventory-table",
                            for (blood_type, entry, status) in rows {
                                InventoryRow {
                                    key: "{blood_type}",
                                    draft: current_drafts.get(&blood_type).cloned().unwrap_or_default(),
                                    busy: busy.contains(blood_type),
                                    entry: entry,
                                    status: status,
                                    thresholds: thresholds,
                                    on_draft: move |(blood_type, value): (BloodType, String)| {
                                        drafts.write().insert(blood_type, value);
                                    },
                                    on_update: move |blood_type: BloodType| handle_update(blood_type),
                                }
                            }
                        }
                    }

                    if !alerts.is_empty() {
                        section { class: "dashboard-section",
                            h2 { "Low Stock Details" }
                            div { class: "low-stock-list",
                                for (key, heading, detail, accent) in alerts {
                                    Card { key: "{key}", accent: accent,
                                        CardHeader {
                                            CardTitle { "{heading}" }
                                        }
                                        CardContent {
                                            p { "{detail}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
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

        NoticeDialog { notice: notice }
    }
}

/// One blood type: meter, label, and the units update control.
#[component]
fn InventoryRow(
    entry: InventoryEntry,
    status: StockStatus,
    thresholds: StockThresholds,
    draft: String,
    busy: bool,
    on_draft: EventHandler<(BloodType, String)>,
    on_update: EventHandler<BloodType>,
) -> Element {
    let blood_type = entry.blood_type;
    let units = entry.units_available;
    let updated = format_optional_date(entry.last_updated.as_deref());

    rsx! {
        div { class: "inventory-row",
            span { class: "inventory-type", "{blood_type}" }
            StockMeter { units: units, status: status, thresholds: thresholds }
            span { class: "inventory-units", "{units} units" }
            StockBadge { status: status }
            span { class: "inventory-updated", "Updated {updated}" }
            div { class: "inventory-update",
                Input {
                    input_type: "number",
                    placeholder: "Units",
                    value: draft,
                    disabled: busy,
                    on_input: move |evt: FormEvent| on_draft.call((blood_type, evt.value())),
                }
                Button {
                    size: ButtonSize::Small,
                    disabled: busy,
                    onclick: move |_| on_update.call(blood_type),
                    if busy { "Updating..." } else { "Update" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(bt: BloodType, units: u32) -> InventoryEntry {
        InventoryEntry {
            blood_type: bt,
            units_available: units,
            stock_status: None,
            last_updated: None,
            is_low_stock: None,
        }
    }

    #[test]
    fn low_stock_lists_low_and_critical() {
        let entries = vec![
            entry(BloodType::APos, 2),
            entry(BloodType::ANeg, 8),
            entry(BloodType::OPos, 20),
        ];
        let alerts = low_stock(&entries, &StockThresholds::default());
        let got: Vec<(BloodType, StockStatus)> =
            alerts.iter().map(|(e, s)| (e.blood_type, *s)).collect();
        assert_eq!(
            got,
            vec![
                (BloodType::APos, StockStatus::Critical),
                (BloodType::ANeg, StockStatus::Low),
            ]
        );
    }

    #[test]
    fn server_label_overrides_thresholds() {
        let mut healthy = entry(BloodType::BPos, 1);
        healthy.stock_status = Some(StockStatus::Ok);
        assert!(low_stock(&[healthy], &StockThresholds::default()).is_empty());
    }

    #[test]
    fn busy_row_disables_its_controls() {
        let html = dioxus_ssr::render_element(rsx! {
            InventoryRow {
                entry: entry(BloodType::ONeg, 8),
                status: StockStatus::Low,
                thresholds: StockThresholds::default(),
                draft: "12",
                busy: true,
                on_draft: |_| {},
                on_update: |_| {},
            }
        });
        assert!(html.contains("Updating..."));
        assert!(html.contains("O-"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn updates_lock_rows_independently() {
        let mut in_flight = InFlight::default();
        assert!(in_flight.begin(BloodType::APos));
        assert!(in_flight.begin(BloodType::BPos));
        assert!(!in_flight.begin(BloodType::APos));
        assert!(in_flight.contains(BloodType::BPos));

        in_flight.finish(BloodType::APos);
        assert!(!in_flight.contains(BloodType::APos));
        assert!(in_flight.begin(BloodType::APos));
    }

    #[test]
    fn idle_row_offers_update() {
        let html = dioxus_ssr::render_element(rsx! {
            InventoryRow {
                entry: entry(BloodType::BPos, 3),
                status: StockStatus::Critical,
                thresholds: StockThresholds::default(),
                draft: "",
                busy: false,
                on_draft: |_| {},
                on_update: |_| {},
            }
        });
        assert!(html.contains("Update"));
        assert!(!html.contains("Updating..."));
    }
}
