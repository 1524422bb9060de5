use dioxus::prelude::*;
use shared_types::{BloodRequest, RequestFilter, ALL_FILTERS};
use shared_ui::components::{Button, ButtonVariant};

/// Button caption with the number of matching requests.
pub fn filter_caption(filter: RequestFilter, requests: &[BloodRequest]) -> String {
    format!("{} ({})", filter.label(), filter.count(requests))
}

/// Filter buttons for the requests listing.
///
/// ```rust,ignore
/// let mut filter = use_signal(|| RequestFilter::All);
/// rsx! {
///     RequestFilterBar { filter: filter, requests: rows.clone() }
/// }
/// ```
#[component]
pub fn RequestFilterBar(mut filter: Signal<RequestFilter>, requests: Vec<BloodRequest>) -> Element {
    let active = *filter.read();
    let options: Vec<(RequestFilter, &str, String)> = ALL_FILTERS
        .iter()
        .map(|f| (*f, f.as_str(), filter_caption(*f, &requests)))
        .collect();

    rsx! {
        div { class: "filter-bar",
            for (option, key, caption) in options {
                Button {
                    key: "{key}",
                    variant: if option == active { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                    onclick: move |_| filter.set(option),
                    "{caption}"
                }
            }
        }
    }
}
