use dioxus::prelude::*;
use shared_types::{UserRole, UserUpdate};
use shared_ui::{use_toasts, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, FormSelect, Skeleton};

use super::AdminData;
use crate::routes::dashboard::loaded;
use crate::session::use_session;

#[component]
pub fn AdminUsers() -> Element {
    let data: AdminData = use_context();
    let session = use_session();
    let toasts = use_toasts();
    let self_id = session.user().map(|u| u.user_id).unwrap_or_default();

    let user_list = match loaded(data.users) {
        Some(list) => list,
        None => {
            return rsx! {
                Card { CardContent { Skeleton { style: "height: 12rem; width: 100%;" } } }
            };
        }
    };

    let set_role = move |user_id: String, raw: String| {
        let patch = UserUpdate {
            role: Some(UserRole::from_str_or_default(&raw)),
            meet_link: None,
        };
        spawn(async move {
            let mut users = data.users;
            match api_client::users::update(&user_id, &patch).await {
                Ok(_) => {
                    toasts.success("Role updated");
                    users.restart();
                }
                Err(err) => {
                    tracing::error!("role update failed: {}", err);
                    toasts.error("Failed to update role");
                }
            }
        });
    };

    let set_meet_link = move |user_id: String, current: String| {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let link = match window
            .prompt_with_message_and_default("Meeting link for this teacher:", &current)
        {
            Ok(Some(link)) => link,
            _ => return,
        };
        let patch = UserUpdate {
            role: None,
            meet_link: Some(link),
        };
        spawn(async move {
            let mut users = data.users;
            match api_client::users::update(&user_id, &patch).await {
                Ok(_) => {
                    toasts.success("Meet link saved");
                    users.restart();
                }
                Err(err) => {
                    tracing::error!("meet link update failed: {}", err);
                    toasts.error("Failed to save meet link");
                }
            }
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Users" }
            }
            CardContent {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "" }
                        }
                    }
                    tbody {
                        for user in user_list {
                            tr { key: "{user.user_id}",
                                td { "{user.name}" }
                                td { "{user.email}" }
                                td {
                                    if user.user_id == self_id {
                                        span { {user.role.label()} }
                                    } else {
                                        FormSelect {
                                            value: user.role.as_str().to_string(),
                                            onchange: {
                                                let user_id = user.user_id.clone();
                                                move |evt: Event<FormData>| set_role(user_id.clone(), evt.value())
                                            },
                                            option { value: "student", "Student" }
                                            option { value: "teacher", "Teacher" }
                                            option { value: "admin", "Administrator" }
                                        }
                                    }
                                }
                                td {
                                    if user.role == UserRole::Teacher {
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: {
                                                let user_id = user.user_id.clone();
                                                let current = user.meet_link.clone().unwrap_or_default();
                                                move |_| set_meet_link(user_id.clone(), current.clone())
                                            },
                                            "Meet link"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
