use dioxus::prelude::*;
use shared_types::{BloodRequest, RequestFilter};
use shared_ui::components::{Button, ButtonSize, Card, CardContent};

use crate::auth::use_auth;
use crate::components::{RequestCard, RequestFilterBar};
use crate::routes::Route;

/// All blood requests, filtered on the client.
#[component]
pub fn Requests() -> Element {
    let auth = use_auth();
    let filter = use_signal(|| RequestFilter::All);

    let requests = use_resource(move || async move {
        auth.client()
            .list_requests()
            .await
            .map_err(|e| tracing::error!(error = %e, "Failed to load requests"))
            .ok()
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./listing.css") }

        div { class: "listing-page container",
            div { class: "listing-header",
                h1 { "Blood Requests" }
                p { "Every request posted by connected hospitals." }
            }

            match &*requests.read() {
                Some(Some(all)) => {
                    let active = *filter.read();
                    let visible: Vec<(String, bool, BloodRequest)> = active
                        .apply(all)
                        .into_iter()
                        .map(|r| (r.request_id.clone(), r.status.is_open(), r))
                        .collect();

                    rsx! {
                        RequestFilterBar { filter: filter, requests: all.clone() }

                        if visible.is_empty() {
                            Card {
                                CardContent {
                                    p { class: "empty-state", "No requests match this filter." }
                                }
                            }
                        }
                        div { class: "request-list",
                            for (key, open, request) in visible {
                                RequestCard {
                                    key: "{key}",
                                    request: request,
                                    actions: if open {
                                        Some(rsx! {
                                            Button {
                                                size: ButtonSize::Small,
                                                onclick: move |_| {
                                                    navigator().push(Route::Dashboard {});
                                                },
                                                "Respond to Request"
                                            }
                                        })
                                    } else {
                                        None
                                    },
                                }
                            }
                        }
                    }
                }
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-state", "Could not load requests. Please refresh the page." }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading",
                        div { class: "spinner" }
                        p { "Loading requests..." }
                    }
                },
            }
        }
    }
}
