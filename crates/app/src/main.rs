use dioxus::prelude::*;

mod auth;
mod components;
mod format;
mod routes;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let auth = use_context_provider(AuthState::new);

    // Parse config.toml before any view asks for the API base URL.
    use_hook(|| {
        api_client::load_config();
    });

    // Read the persisted session back; the route guard waits on this.
    use_hook(move || {
        spawn(async move {
            auth.restore().await;
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
