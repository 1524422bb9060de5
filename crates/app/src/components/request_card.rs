use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdMapPin};
use dioxus_free_icons::Icon;
use shared_types::{BloodRequest, RequestStatus, Urgency};
use shared_ui::components::{Badge, BadgeVariant, Card, CardAccent, CardContent, CardFooter};

use crate::format::format_date_time;

/// What the card's headline shows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RequestHeading {
    /// Requesting hospital, for donors and the shared listing.
    #[default]
    Hospital,
    /// Units needed, for the hospital's own list.
    Quantity,
}

pub fn urgency_variant(urgency: Urgency) -> BadgeVariant {
    match urgency {
        Urgency::High => BadgeVariant::Destructive,
        Urgency::Normal => BadgeVariant::Warning,
    }
}

pub fn status_variant(status: RequestStatus) -> BadgeVariant {
    match status {
        RequestStatus::Open => BadgeVariant::Warning,
        RequestStatus::Fulfilled => BadgeVariant::Success,
        RequestStatus::Cancelled => BadgeVariant::Secondary,
    }
}

/// One blood request, with optional footer `actions`.
#[component]
pub fn RequestCard(
    request: BloodRequest,
    #[props(default)] heading: RequestHeading,
    #[props(default = true)] show_status: bool,
    actions: Option<Element>,
) -> Element {
    let emergency = request.urgency.is_emergency();
    let accent = if emergency {
        CardAccent::Emergency
    } else {
        CardAccent::None
    };
    let headline = match heading {
        RequestHeading::Hospital => request.hospital_display().to_string(),
        RequestHeading::Quantity => format!("{} units needed", request.quantity),
    };
    let created = format_date_time(&request.timestamp);
    let urgency_label = request.urgency.label();
    let status_label = request.status.as_str();
    let location = request.location_display().to_string();
    let notes = request.notes_display().map(str::to_string);
    let quantity = request.quantity;
    let blood_type = request.blood_type;

    rsx! {
        Card { accent: accent, class: "request-card",
            CardContent {
                div { class: "request-card-top",
                    div { class: "request-badges",
                        Badge {
                            variant: urgency_variant(request.urgency),
                            class: if emergency { "emergency-pulse" } else { "" },
                            "{urgency_label}"
                        }
                        Badge { variant: BadgeVariant::Primary, "{blood_type}" }
                        if show_status {
                            Badge { variant: status_variant(request.status), "{status_label}" }
                        }
                    }
                    if heading == RequestHeading::Hospital {
                        span { class: "request-quantity", "{quantity} units" }
                    }
                }
                h3 { class: "request-headline", "{headline}" }
                div { class: "request-details",
                    if heading == RequestHeading::Hospital {
                        span { class: "request-detail",
                            Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                            "{location}"
                        }
                    }
                    span { class: "request-detail",
                        Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                        "{created}"
                    }
                }
                if let Some(notes) = notes {
                    p { class: "request-notes", "{notes}" }
                }
            }
            if let Some(actions) = actions {
                CardFooter { {actions} }
            }
        }
    }
}
