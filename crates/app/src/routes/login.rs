use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

use crate::routes::Route;
use crate::session::use_session;

/// Email/password sign-in. The backend takes OAuth2 form fields and sets a
/// session cookie; the response body carries the user for immediate use.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // Already signed in, nothing to do here.
    if session.is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);

        match api_client::auth::login(&email(), &password()).await {
            Ok(resp) => {
                session.set_user(resp.user);
                navigator().push(Route::Dashboard {});
            }
            Err(err) => {
                tracing::warn!("login failed: {}", err);
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Login failed. Check your email and password.");
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign in" }
                    CardDescription { "Welcome back to ClassHub." }
                }
                CardContent {
                    form { onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            required: true,
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            required: true,
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button { disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }
                    p { class: "auth-switch",
                        "New here? "
                        Link { to: Route::Register {}, "Create an account" }
                    }
                }
            }
        }
    }
}
