use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdCalendar, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::{BloodRequest, Eligibility, SessionUser, INELIGIBLE_MESSAGE};
use shared_ui::components::{Button, ButtonSize, ButtonVariant, Card, CardContent};
use shared_ui::{use_toast, ToastOptions};

use crate::auth::use_auth;
use crate::components::{ConfirmDialog, Notice, NoticeDialog, RequestCard, Widget, WidgetStat};
use crate::format::format_optional_date;
use crate::routes::Route;

const SCHEDULED: &str = "Donation scheduled successfully! The hospital will contact you soon.";
const SCHEDULE_FAILED: &str = "Failed to schedule donation. Please try again.";

/// Header lines for the signed-in donor.
pub fn donor_greeting(user: Option<&SessionUser>) -> (String, String) {
    let name = user.map(|u| u.name.trim()).filter(|n| !n.is_empty());
    let welcome = match name {
        Some(name) => format!("Welcome back, {name}"),
        None => "Welcome back".to_string(),
    };
    let blood_type = match user.and_then(|u| u.blood_type) {
        Some(bt) => format!("Blood Type: {bt}"),
        None => "Blood Type: not set".to_string(),
    };
    (welcome, blood_type)
}

#[component]
pub fn DonorDashboard() -> Element {
    let auth = use_auth();
    let toast = use_toast();

    let mut pending = use_signal(|| None::<String>);
    let mut confirm_open = use_signal(|| false);
    let mut notice = use_signal(|| None::<Notice>);

    let (welcome, blood_type_line) = donor_greeting(auth.user().as_ref());

    let mut overview = use_resource(move || async move { auth.client().donor_overview().await });

    let handle_confirm = move |_| {
        let Some(request_id) = pending.write().take() else {
            return;
        };
        let eligibility = overview
            .read()
            .as_ref()
            .and_then(|o| o.eligibility.clone());

        spawn(async move {
            match auth
                .client()
                .schedule_donation(eligibility.as_ref(), &request_id)
                .await
            {
                Ok(_) => {
                    toast.success(SCHEDULED.to_string(), ToastOptions::new());
                    overview.restart();
                }
                Err(e) => {
                    tracing::error!(error = %e, request_id = %request_id, "Failed to schedule donation");
                    notice.set(Some(Notice::failure(&e, SCHEDULE_FAILED)));
                }
            }
        });
    };

    let mut handle_respond = move |request_id: String| {
        let eligible = overview.read().as_ref().map(|o| o.is_eligible()).unwrap_or(false);
        if eligible {
            pending.set(Some(request_id));
            confirm_open.set(true);
        } else {
            tracing::info!(request_id = %request_id, "Respond blocked, donor not eligible");
            notice.set(Some(Notice::info("Not eligible", INELIGIBLE_MESSAGE)));
        }
    };

    rsx! {
        div { class: "dashboard-header",
            h1 { "{welcome}" }
            p { "{blood_type_line}" }
        }

        match &*overview.read() {
            Some(data) => {
                let emergencies = data.emergency_count();
                let rows: Vec<(String, BloodRequest)> = data
                    .matching_requests
                    .iter()
                    .map(|r| (r.request_id.clone(), r.clone()))
                    .collect();

                rsx! {
                    div { class: "widget-grid",
                        EligibilityWidget { eligibility: data.eligibility.clone() }

                        Widget {
                            title: "Emergency Requests",
                            icon: rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
                            action: rsx! {
                                Button {
                                    size: ButtonSize::Small,
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| {
                                        navigator().push(Route::Requests {});
                                    },
                                    "View Requests"
                                }
                            },
                            WidgetStat { value: emergencies, label: "urgent matches for your blood type", tone: "emergency" }
                        }

                        Widget {
                            title: "Your Impact",
                            icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
                            p { class: "widget-placeholder", "Every donation can help save up to three lives." }
                        }
                    }

                    section { id: "matching-requests", class: "dashboard-section",
                        h2 { "Matching Requests" }
                        if rows.is_empty() {
                            Card {
                                CardContent {
                                    p { class: "empty-state", "No matching requests right now." }
                                }
                            }
                        }
                        div { class: "request-list",
                            for (key, request) in rows {
                                MatchingRow {
                                    key: "{key}",
                                    request: request,
                                    on_respond: move |request_id: String| handle_respond(request_id),
                                }
                            }
                        }
                    }
                }
            }
            None => rsx! {
                div { class: "loading",
                    div { class: "spinner" }
                    p { "Loading your dashboard..." }
                }
            },
        }

        ConfirmDialog {
            open: confirm_open,
            title: "Schedule donation",
            message: "Are you sure you want to schedule a donation for this request?",
            confirm_label: "Schedule",
            on_confirm: handle_confirm,
        }
        NoticeDialog { notice: notice }
    }
}

#[component]
fn MatchingRow(request: BloodRequest, on_respond: EventHandler<String>) -> Element {
    let request_id = request.request_id.clone();

    rsx! {
        RequestCard {
            request: request,
            show_status: false,
            actions: rsx! {
                Button {
                    size: ButtonSize::Small,
                    onclick: move |_| on_respond.call(request_id.clone()),
                    "Respond"
                }
            },
        }
    }
}

#[component]
fn EligibilityWidget(#[props(!optional)] eligibility: Option<Eligibility>) -> Element {
    let eligible = eligibility.as_ref().map(|e| e.eligible).unwrap_or(false);
    let (headline, tone) = if eligible {
        ("Eligible to Donate", "success")
    } else {
        ("Not Eligible Yet", "warning")
    };
    let last = format_optional_date(eligibility.as_ref().and_then(|e| e.last_donation.as_deref()));
    let next = format_optional_date(
        eligibility
            .as_ref()
            .and_then(|e| e.next_eligible_date.as_deref()),
    );
    let server_note = eligibility
        .as_ref()
        .and_then(|e| e.message.clone())
        .filter(|m| !m.trim().is_empty());

    rsx! {
        Widget {
            title: "Eligibility",
            icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
            action: if eligible {
                Some(rsx! {
                    Button {
                        size: ButtonSize::Small,
                        onclick: move |_| {
                            let _ = document::eval(
                                "document.getElementById('matching-requests')?.scrollIntoView({ behavior: 'smooth' });",
                            );
                        },
                        "Schedule Donation"
                    }
                })
            } else {
                None
            },
            p { class: "eligibility-status", "data-tone": tone, "{headline}" }
            dl { class: "eligibility-dates",
                dt { "Last donation" }
                dd { "{last}" }
                dt { "Next eligible" }
                dd { "{next}" }
            }
            if eligible {
                p { class: "widget-label", "You can donate blood now!" }
            }
            if let Some(note) = server_note {
                p { class: "widget-label", "{note}" }
            }
        }
    }
}
