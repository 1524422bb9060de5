use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdFileText, LdShield};
use dioxus_free_icons::Icon;
use shared_types::{
    created_by, AppErrorKind, BloodRequest, CreateRequestForm, RequestStatus, ALL_BLOOD_TYPES,
};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, FormSelect,
    Input, Textarea,
};
use shared_ui::{use_toast, ToastOptions};

use crate::auth::use_auth;
use crate::components::{
    Notice, NoticeDialog, RequestCard, RequestHeading, Widget, WidgetStat,
};

const CREATE_FAILED: &str = "Failed to create request. Please try again.";

/// Active and fulfilled counts for the widgets.
pub fn status_counts(requests: &[BloodRequest]) -> (usize, usize) {
    let active = requests.iter().filter(|r| r.status.is_open()).count();
    let fulfilled = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Fulfilled)
        .count();
    (active, fulfilled)
}

#[component]
pub fn HospitalDashboard() -> Element {
    let auth = use_auth();
    let toast = use_toast();

    let mut show_form = use_signal(|| false);
    let mut form = use_signal(|| CreateRequestForm::for_user(auth.user().as_ref()));
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitting = use_signal(|| false);
    let mut notice = use_signal(|| None::<Notice>);

    let mut requests = use_resource(move || async move {
        let user_id = auth.user().map(|u| u.user_id).unwrap_or_default();
        match auth.client().list_requests().await {
            Ok(all) => Some(created_by(&all, &user_id)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load hospital requests");
                None
            }
        }
    });

    let mut reset_form = move || {
        form.set(CreateRequestForm::for_user(auth.user().as_ref()));
        field_errors.set(HashMap::new());
    };

    let toggle_form = move |_| {
        if show_form() {
            show_form.set(false);
        } else {
            reset_form();
            show_form.set(true);
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let values = form.read().clone();
        if let Err(e) = values.to_request() {
            tracing::info!(fields = ?e.field_errors.keys().collect::<Vec<_>>(), "Request form incomplete");
            field_errors.set(e.field_errors);
            return;
        }
        field_errors.set(HashMap::new());
        submitting.set(true);

        spawn(async move {
            match auth.client().create_request(&values).await {
                Ok(_) => {
                    show_form.set(false);
                    reset_form();
                    requests.restart();
                    toast.success(
                        "Blood request created successfully".to_string(),
                        ToastOptions::new(),
                    );
                }
                Err(e) if e.kind == AppErrorKind::ValidationError => {
                    field_errors.set(e.field_errors);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create blood request");
                    notice.set(Some(Notice::failure(&e, CREATE_FAILED)));
                }
            }
            submitting.set(false);
        });
    };

    let current = form.read().clone();
    let errors = field_errors.read().clone();
    let blood_type_error = errors.get("blood_type").cloned();
    let quantity_error = errors.get("quantity").cloned();
    let urgency_error = errors.get("urgency").cloned();

    rsx! {
        div { class: "dashboard-header",
            h1 { "Hospital Dashboard" }
            p { "Create blood requests and track their progress." }
        }

        match &*requests.read() {
            Some(Some(list)) => {
                let (active, fulfilled) = status_counts(list);
                let rows = list.clone();

                rsx! {
                    div { class: "widget-grid",
                        Widget {
                            title: "Need Blood?",
                            icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
                            action: rsx! {
                                Button {
                                    full_width: true,
                                    variant: if show_form() { ButtonVariant::Secondary } else { ButtonVariant::Primary },
                                    onclick: toggle_form,
                                    if show_form() { "Cancel" } else { "Create Request" }
                                }
                            },
                            p { class: "widget-placeholder", "Post a request and matching donors are notified." }
                        }
                        Widget {
                            title: "Active Requests",
                            icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
                            WidgetStat { value: active, label: "awaiting donors", tone: "warning" }
                        }
                        Widget {
                            title: "Fulfilled",
                            icon: rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
                            WidgetStat { value: fulfilled, label: "requests completed", tone: "success" }
                        }
                    }

                    section { class: "dashboard-section",
                        h2 { "Your Requests" }
                        if rows.is_empty() {
                            Card {
                                CardContent {
                                    p { class: "empty-state", "You have not created any requests yet." }
                                }
                            }
                        }
                        div { class: "request-list",
                            for request in rows {
                                RequestCard {
                                    key: "{request.request_id}",
                                    request: request.clone(),
                                    heading: RequestHeading::Quantity,
                                }
                            }
                        }
                    }
                }
            }
            Some(None) => rsx! {
                Card {
                    CardContent {
                        p { class: "empty-state", "Could not load your requests. Please refresh the page." }
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

        if show_form() {
            Card { class: "request-form-card",
                CardHeader {
                    CardTitle { "Create Blood Request" }
                    CardDescription { "Blood type, quantity and urgency are required." }
                }
                CardContent {
                    form { class: "request-form", onsubmit: handle_submit,
                        div { class: "form-row",
                            FormSelect {
                                label: "Blood Type",
                                required: true,
                                value: current.blood_type.clone(),
                                onchange: move |evt: FormEvent| form.write().blood_type = evt.value(),
                                option { value: "", "Select blood type" }
                                for bt in ALL_BLOOD_TYPES.iter() {
                                    option {
                                        key: "{bt}",
                                        value: bt.as_str(),
                                        selected: current.blood_type == bt.as_str(),
                                        "{bt}"
                                    }
                                }
                            }
                            if let Some(msg) = blood_type_error {
                                span { class: "bb-field-error", "{msg}" }
                            }
                            Input {
                                label: "Quantity (units)",
                                input_type: "number",
                                required: true,
                                value: current.quantity.clone(),
                                error: quantity_error,
                                on_input: move |evt: FormEvent| form.write().quantity = evt.value(),
                            }
                            FormSelect {
                                label: "Urgency",
                                required: true,
                                value: current.urgency.clone(),
                                onchange: move |evt: FormEvent| form.write().urgency = evt.value(),
                                option { value: "", "Select urgency" }
                                option { value: "normal", selected: current.urgency == "normal", "Normal" }
                                option { value: "high", selected: current.urgency == "high", "High (Emergency)" }
                            }
                            if let Some(msg) = urgency_error {
                                span { class: "bb-field-error", "{msg}" }
                            }
                        }
                        div { class: "form-row",
                            Input {
                                label: "Hospital Name",
                                value: current.hospital_name.clone(),
                                on_input: move |evt: FormEvent| form.write().hospital_name = evt.value(),
                            }
                            Input {
                                label: "Location",
                                value: current.location.clone(),
                                on_input: move |evt: FormEvent| form.write().location = evt.value(),
                            }
                        }
                        Textarea {
                            label: "Notes",
                            placeholder: "Anything donors should know (optional)",
                            value: current.notes.clone(),
                            on_input: move |evt: FormEvent| form.write().notes = evt.value(),
                        }
                        div { class: "form-actions",
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| show_form.set(false),
                                "Cancel"
                            }
                            Button {
                                button_type: "submit",
                                disabled: submitting(),
                                if submitting() { "Creating..." } else { "Create Request" }
                            }
                        }
                    }
                }
            }
        }

        NoticeDialog { notice: notice }
    }
}
