use dioxus::prelude::*;

mod components;
mod format_helpers;
mod routes;
mod session;

use routes::Route;
use session::SessionState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut session = use_context_provider(SessionState::new);

    // Cookie probe on first load. An OAuth redirect can leave a
    // "session_id=" fragment in the URL; the backend finishes that exchange
    // itself, so skip the probe and stay logged out until the next load.
    use_future(move || async move {
        let oauth_fragment = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|h| h.contains("session_id="))
            .unwrap_or(false);
        if oauth_fragment {
            session.clear();
            return;
        }

        match api_client::auth::me().await {
            Ok(user) => {
                tracing::info!("restored session for {}", user.email);
                session.set_user(user);
            }
            Err(err) => {
                tracing::debug!("no active session: {}", err);
                session.clear();
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
