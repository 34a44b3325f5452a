use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;
use crate::session::use_session;

/// Public landing page with the sign-in calls to action.
#[component]
pub fn Landing() -> Element {
    let session = use_session();

    // Liveness ping, logged only.
    use_future(|| async {
        match api_client::auth::ping().await {
            Ok(body) => tracing::info!("backend up: {}", body),
            Err(err) => tracing::warn!("backend ping failed: {}", err),
        }
    });

    rsx! {
        div { class: "landing",
            header { class: "landing-nav",
                span { class: "landing-brand", "ClassHub" }
                nav {
                    if session.is_authenticated() {
                        Link { class: "landing-link", to: Route::Dashboard {}, "Dashboard" }
                    } else {
                        Link { class: "landing-link", to: Route::Login {}, "Sign in" }
                    }
                }
            }
            section { class: "landing-hero",
                h1 { "Live classes, one roof" }
                p { class: "landing-tagline",
                    "Schedule lessons, track attendance and homework, and meet your class over video."
                }
                div { class: "landing-actions",
                    if session.is_authenticated() {
                        Button {
                            onclick: move |_| { navigator().push(Route::Dashboard {}); },
                            "Go to dashboard"
                        }
                    } else {
                        Button {
                            onclick: move |_| { navigator().push(Route::Register {}); },
                            "Get started"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| { navigator().push(Route::Login {}); },
                            "Sign in"
                        }
                    }
                }
            }
        }
    }
}
