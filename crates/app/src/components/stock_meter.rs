use dioxus::prelude::*;
use shared_types::{StockStatus, StockThresholds};
use shared_ui::components::{Badge, BadgeVariant, Progress, ProgressIndicator};

pub fn stock_variant(status: StockStatus) -> BadgeVariant {
    match status {
        StockStatus::Critical => BadgeVariant::Destructive,
        StockStatus::Low => BadgeVariant::Warning,
        StockStatus::Ok => BadgeVariant::Success,
    }
}

#[component]
pub fn StockBadge(status: StockStatus) -> Element {
    let label = status.as_str();
    rsx! {
        Badge { variant: stock_variant(status), "{label}" }
    }
}

/// Fill bar for one blood type, coloured by `status`.
#[component]
pub fn StockMeter(units: u32, status: StockStatus, thresholds: StockThresholds) -> Element {
    let pct = thresholds.fill_percent(units);
    let level = status.as_str();

    rsx! {
        div { class: "stock-meter", "data-level": level,
            Progress {
                value: Some(pct),
                ProgressIndicator { style: "width: {pct}%" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_width_is_capped() {
        let html = dioxus_ssr::render_element(rsx! {
            StockMeter { units: 45, status: StockStatus::Ok, thresholds: StockThresholds::default() }
        });
        assert!(html.contains("width: 100%"));
        assert!(html.contains(r#"data-level="ok""#));
    }

    #[test]
    fn badges_for_two_eight_twenty_units() {
        let t = StockThresholds::default();
        let expected = [
            (2, "critical", BadgeVariant::Destructive),
            (8, "low", BadgeVariant::Warning),
            (20, "ok", BadgeVariant::Success),
        ];
        for (units, label, variant) in expected {
            let status = t.classify(units);
            assert_eq!(status.as_str(), label);
            assert_eq!(stock_variant(status), variant);
            let html = dioxus_ssr::render_element(rsx! { StockBadge { status: status } });
            assert!(html.contains(label));
        }
    }

    #[test]
    fn critical_meter_is_partially_filled() {
        let html = dioxus_ssr::render_element(rsx! {
            StockMeter { units: 2, status: StockStatus::Critical, thresholds: StockThresholds::default() }
        });
        assert!(html.contains("width: 10%"));
        assert!(html.contains(r#"data-level="critical""#));
    }
}
