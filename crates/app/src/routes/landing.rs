use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdFileText, LdShield};
use dioxus_free_icons::Icon;
use shared_types::{BloodType, RegisterRequest, Role, ALL_BLOOD_TYPES};
use shared_ui::components::{Button, ButtonSize, ButtonVariant, FormSelect, Input};

use crate::auth::use_auth;
use crate::routes::Route;

const SIGNUP_ROLES: [Role; 3] = [Role::Donor, Role::Hospital, Role::Manager];

const IMPACT_STATS: [(&str, &str); 4] = [
    ("1,247", "Donors Active"),
    ("342", "Requests Fulfilled"),
    ("89", "Hospitals Connected"),
    ("24", "Emergency Alerts"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn submit_label(&self, loading: bool) -> &'static str {
        match (loading, self) {
            (true, _) => "Please wait...",
            (false, AuthMode::SignIn) => "Sign In",
            (false, AuthMode::SignUp) => "Create Account",
        }
    }
}

/// Everything typed into the auth modal. Both tabs share the fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub blood_type: String,
    pub hospital_name: String,
    pub location: String,
    pub phone: String,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Donor,
            blood_type: BloodType::default().as_str().to_string(),
            hospital_name: String::new(),
            location: String::new(),
            phone: String::new(),
        }
    }
}

impl AuthForm {
    /// Registration profile for the selected role.
    pub fn to_profile(&self) -> RegisterRequest {
        let optional = |v: &str| Some(v.trim().to_string()).filter(|v| !v.is_empty());
        RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
            blood_type: BloodType::parse(&self.blood_type),
            hospital_name: optional(&self.hospital_name),
            location: optional(&self.location),
            phone: optional(&self.phone),
        }
        .normalized()
    }
}

/// Public landing page with the sign-in / sign-up modal.
#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let mut show_auth = use_signal(|| false);
    let mut mode = use_signal(AuthMode::default);
    let mut form = use_signal(AuthForm::default);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().push(Route::Dashboard {});
    }

    let mut switch_mode = move |next: AuthMode| {
        mode.set(next);
        error_msg.set(None);
    };

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        let values = form.read().clone();
        let result = match mode() {
            AuthMode::SignIn => auth.login(values.email.trim().to_string(), values.password).await,
            AuthMode::SignUp => auth.register(values.to_profile()).await,
        };
        loading.set(false);

        match result {
            Ok(()) => {
                show_auth.set(false);
                navigator().push(Route::Dashboard {});
            }
            Err(message) => error_msg.set(Some(message)),
        }
    };

    let scroll_to_steps = move |_: MouseEvent| {
        let _ = document::eval(
            "document.getElementById('how-it-works')?.scrollIntoView({ behavior: 'smooth' });",
        );
    };

    let current = form.read().clone();
    let active_mode = mode();
    let signing_up = active_mode == AuthMode::SignUp;
    let submit_label = active_mode.submit_label(loading());
    let role_options: Vec<(Role, &str, &str)> = SIGNUP_ROLES
        .iter()
        .map(|r| (*r, r.as_str(), r.signup_label()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing",
            section { class: "hero",
                div { class: "hero-content container",
                    h1 { class: "hero-title", "One Click Can Save a Life" }
                    p { class: "hero-subtitle",
                        "Connect donors, hospitals, and blood banks in real-time to ensure no emergency goes unanswered"
                    }
                    div { class: "hero-buttons",
                        Button {
                            size: ButtonSize::Large,
                            onclick: move |_| show_auth.set(true),
                            "Open App"
                        }
                        Button {
                            size: ButtonSize::Large,
                            variant: ButtonVariant::Ghost,
                            onclick: scroll_to_steps,
                            "How It Works"
                        }
                    }
                }
            }

            section { id: "how-it-works", class: "how-it-works",
                div { class: "container",
                    h2 { class: "section-title", "How BloodBridge Works" }
                    div { class: "steps",
                        Step {
                            number: 1,
                            title: "Request Created",
                            text: "Hospital creates emergency blood request with urgency level",
                            Icon::<LdFileText> { icon: LdFileText, width: 28, height: 28 }
                        }
                        Step {
                            number: 2,
                            title: "Donors Notified",
                            text: "Matching donors get instant alert based on blood type",
                            Icon::<LdBell> { icon: LdBell, width: 28, height: 28 }
                        }
                        Step {
                            number: 3,
                            title: "Blood Delivered",
                            text: "Blood reaches patient in time, saving lives",
                            Icon::<LdShield> { icon: LdShield, width: 28, height: 28 }
                        }
                    }
                }
            }

            section { class: "impact-stats",
                div { class: "container",
                    h2 { class: "section-title", "Lives Saved Today" }
                    div { class: "stats-grid",
                        for (number, label) in IMPACT_STATS {
                            div { key: "{label}", class: "stat-card",
                                div { class: "stat-number", "{number}" }
                                div { class: "stat-label", "{label}" }
                            }
                        }
                    }
                }
            }

            if show_auth() {
                div { class: "modal-backdrop", onclick: move |_| show_auth.set(false),
                    div {
                        class: "modal-content",
                        onclick: move |evt: MouseEvent| evt.stop_propagation(),
                        button {
                            class: "modal-close",
                            "aria-label": "Close",
                            onclick: move |_| show_auth.set(false),
                            "×"
                        }
                        h2 { class: "modal-title", "BloodBridge" }

                        div { class: "auth-tabs",
                            button {
                                class: if signing_up { "auth-tab" } else { "auth-tab active" },
                                onclick: move |_| switch_mode(AuthMode::SignIn),
                                "Sign In"
                            }
                            button {
                                class: if signing_up { "auth-tab active" } else { "auth-tab" },
                                onclick: move |_| switch_mode(AuthMode::SignUp),
                                "Sign Up"
                            }
                        }

                        form { class: "auth-form", onsubmit: handle_submit,
                            if let Some(err) = error_msg() {
                                div { class: "auth-error", "{err}" }
                            }

                            if signing_up {
                                Input {
                                    label: "Name",
                                    required: true,
                                    value: current.name.clone(),
                                    on_input: move |evt: FormEvent| form.write().name = evt.value(),
                                }
                            }
                            Input {
                                label: "Email",
                                input_type: "email",
                                required: true,
                                value: current.email.clone(),
                                on_input: move |evt: FormEvent| form.write().email = evt.value(),
                            }
                            Input {
                                label: "Password",
                                input_type: "password",
                                required: true,
                                value: current.password.clone(),
                                on_input: move |evt: FormEvent| form.write().password = evt.value(),
                            }

                            if signing_up {
                                fieldset { class: "role-group",
                                    legend { "I am a:" }
                                    for (role, key, caption) in role_options {
                                        label { key: "{key}", class: "radio-label",
                                            input {
                                                r#type: "radio",
                                                name: "role",
                                                value: key,
                                                checked: current.role == role,
                                                onchange: move |_| form.write().role = role,
                                            }
                                            span { "{caption}" }
                                        }
                                    }
                                }

                                if current.role == Role::Donor {
                                    FormSelect {
                                        label: "Blood Type",
                                        required: true,
                                        value: current.blood_type.clone(),
                                        onchange: move |evt: FormEvent| form.write().blood_type = evt.value(),
                                        for bt in ALL_BLOOD_TYPES.iter() {
                                            option {
                                                key: "{bt}",
                                                value: bt.as_str(),
                                                selected: current.blood_type == bt.as_str(),
                                                "{bt}"
                                            }
                                        }
                                    }
                                }

                                if current.role == Role::Hospital {
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

                                Input {
                                    label: "Phone (optional)",
                                    input_type: "tel",
                                    value: current.phone.clone(),
                                    on_input: move |evt: FormEvent| form.write().phone = evt.value(),
                                }
                            }

                            Button {
                                button_type: "submit",
                                full_width: true,
                                disabled: loading(),
                                "{submit_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Step(number: u8, title: String, text: String, children: Element) -> Element {
    rsx! {
        div { class: "step-card",
            div { class: "step-number", "{number}" }
            div { class: "step-icon", {children} }
            h3 { "{title}" }
            p { "{text}" }
        }
    }
}
