use dioxus::prelude::*;
use shared_types::RegisterRequest;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

use crate::routes::Route;
use crate::session::use_session;

const MIN_PASSWORD_LEN: usize = 6;

/// Local checks before the request goes out. Returns the first problem.
fn validate(password: &str, confirm: &str) -> Option<&'static str> {
    if password.len() < MIN_PASSWORD_LEN {
        return Some("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Some("Passwords do not match.");
    }
    None
}

/// Account creation. On success, signs straight in and lands on the
/// dashboard as a student.
#[component]
pub fn Register() -> Element {
    let mut session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if session.is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);

        if let Some(problem) = validate(&password(), &confirm()) {
            error_msg.set(Some(problem.to_string()));
            return;
        }

        loading.set(true);
        let req = RegisterRequest {
            email: email(),
            name: name(),
            password: password(),
        };

        match api_client::auth::register(&req).await {
            Ok(_) => match api_client::auth::login(&email(), &password()).await {
                Ok(resp) => {
                    session.set_user(resp.user);
                    navigator().push(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::warn!("auto-login after register failed: {}", err);
                    error_msg.set(Some("Account created. Please sign in.".to_string()));
                    navigator().push(Route::Login {});
                }
            },
            Err(err) => {
                error_msg.set(Some(err.detail()));
            }
        }
        loading.set(false);
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Create your account" }
                    CardDescription { "Students can enroll as soon as they join." }
                }
                CardContent {
                    form { onsubmit: handle_register,
                        Input {
                            label: "Full name",
                            value: name(),
                            required: true,
                            on_input: move |evt: FormEvent| name.set(evt.value()),
                        }
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
                        Input {
                            label: "Confirm password",
                            input_type: "password",
                            value: confirm(),
                            required: true,
                            on_input: move |evt: FormEvent| confirm.set(evt.value()),
                        }
                        if let Some(msg) = error_msg() {
                            p { class: "form-error", "{msg}" }
                        }
                        Button { disabled: loading(),
                            if loading() { "Creating..." } else { "Create account" }
                        }
                    }
                    p { class: "auth-switch",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_password_rejected() {
        assert_eq!(
            validate("abc", "abc"),
            Some("Password must be at least 6 characters.")
        );
    }

    #[test]
    fn mismatch_rejected_after_length() {
        assert_eq!(
            validate("secret1", "secret2"),
            Some("Passwords do not match.")
        );
    }

    #[test]
    fn good_input_passes() {
        assert_eq!(validate("secret1", "secret1"), None);
    }
}
