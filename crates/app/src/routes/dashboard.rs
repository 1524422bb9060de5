use dioxus::prelude::*;
use shared_types::Role;

use super::donor_dashboard::DonorDashboard;
use super::hospital_dashboard::HospitalDashboard;
use super::manager_dashboard::ManagerDashboard;
use crate::auth::use_auth;

/// The dashboard shown for a role value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardVariant {
    Donor,
    Hospital,
    Manager,
    InvalidRole,
}

impl DashboardVariant {
    pub fn for_role(role: &str) -> Self {
        match Role::parse(role) {
            Some(Role::Donor) => DashboardVariant::Donor,
            Some(Role::Hospital) => DashboardVariant::Hospital,
            Some(Role::Manager) => DashboardVariant::Manager,
            None => DashboardVariant::InvalidRole,
        }
    }
}

/// Role dispatcher. Each variant loads its own data on mount; the invalid
/// role view loads nothing.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    // The guard redirects anonymous visitors; render nothing while signing out.
    let Some(role) = auth.user().map(|u| u.role) else {
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page container",
            match DashboardVariant::for_role(&role) {
                DashboardVariant::Donor => rsx! { DonorDashboard {} },
                DashboardVariant::Hospital => rsx! { HospitalDashboard {} },
                DashboardVariant::Manager => rsx! { ManagerDashboard {} },
                DashboardVariant::InvalidRole => rsx! { InvalidRole { role: role.clone() } },
            }
        }
    }
}

#[component]
fn InvalidRole(role: String) -> Element {
    use_hook(|| tracing::error!(role = %role, "Session carries an unrecognized role"));

    rsx! {
        div { class: "empty-state",
            h2 { "Invalid role" }
            p { "This account has no dashboard. Please contact support." }
        }
    }
}
