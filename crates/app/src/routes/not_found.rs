use dioxus::prelude::*;

use crate::routes::Route;

/// Any unknown path goes back to the landing page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    tracing::info!(path = %format!("/{}", route.join("/")), "Unknown route, redirecting home");
    navigator().replace(Route::Landing {});

    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting..." }
        }
    }
}
