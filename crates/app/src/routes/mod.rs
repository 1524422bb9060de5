pub mod dashboard;
pub mod donor_dashboard;
pub mod hospital_dashboard;
pub mod inventory;
pub mod landing;
pub mod manager_dashboard;
pub mod not_found;
pub mod requests;

use api_client::SessionState;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdLayoutDashboard, LdPackage};
use dioxus_free_icons::Icon;
use shared_types::{Role, SessionUser};
use shared_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant};

use crate::auth::use_auth;

use dashboard::Dashboard;
use inventory::Inventory;
use landing::Landing;
use not_found::NotFound;
use requests::Requests;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/requests")]
    Requests {},
    #[route("/inventory")]
    Inventory {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// What the guard does for a given session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Stored session not read back yet.
    Wait,
    Redirect,
    Render,
}

pub fn guard_decision(restored: bool, session: &SessionState) -> GuardDecision {
    if !restored {
        GuardDecision::Wait
    } else if session.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect
    }
}

/// Auth guard layout: anonymous visitors are sent back to the landing page.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let decision = guard_decision(*auth.restored.read(), &auth.session.read());

    match decision {
        GuardDecision::Render => rsx! { Outlet::<Route> {} },
        GuardDecision::Redirect => {
            navigator().replace(Route::Landing {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        GuardDecision::Wait => rsx! {
            div { class: "auth-guard-loading",
                div { class: "spinner" }
                p { "Loading..." }
            }
        },
    }
}

/// Navbar badge for a user's role. Unknown roles fall back to the donor badge.
pub fn role_badge(user: &SessionUser) -> (&'static str, BadgeVariant) {
    match user.role().unwrap_or_default() {
        Role::Donor => (Role::Donor.display_name(), BadgeVariant::Success),
        Role::Hospital => (Role::Hospital.display_name(), BadgeVariant::Primary),
        Role::Manager => (Role::Manager.display_name(), BadgeVariant::Warning),
    }
}

/// Top navigation shared by every protected view.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();

    let user = auth.user().unwrap_or_default();
    let (role_label, role_variant) = role_badge(&user);

    let handle_logout = move |_: MouseEvent| async move {
        auth.logout().await;
        navigator().push(Route::Landing {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        nav { class: "navbar",
            div { class: "container navbar-content",
                Link { to: Route::Dashboard {}, class: "navbar-brand",
                    span { class: "navbar-drop" }
                    "BloodBridge"
                }

                div { class: "navbar-links",
                    Link {
                        to: Route::Dashboard {},
                        class: if matches!(route, Route::Dashboard {}) { "nav-link active" } else { "nav-link" },
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                        "Dashboard"
                    }
                    Link {
                        to: Route::Requests {},
                        class: if matches!(route, Route::Requests {}) { "nav-link active" } else { "nav-link" },
                        Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                        "Requests"
                    }
                    Link {
                        to: Route::Inventory {},
                        class: if matches!(route, Route::Inventory {}) { "nav-link active" } else { "nav-link" },
                        Icon::<LdPackage> { icon: LdPackage, width: 16, height: 16 }
                        "Inventory"
                    }
                }

                div { class: "navbar-user",
                    span { class: "user-name", "{user.name}" }
                    Badge { variant: role_variant, "{role_label}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }
        }

        main { class: "page-body",
            Outlet::<Route> {}
        }
    }
}
