use dioxus::prelude::*;
use shared_types::ClassCreate;
use shared_ui::{
    use_toasts, Button, ButtonVariant, Card, CardAction, CardContent, CardHeader, CardTitle,
    Dialog, DialogActions, Input, Skeleton, Textarea,
};

use super::AdminData;
use crate::format_helpers::format_datetime_human;
use crate::routes::dashboard::loaded;

/// All classes with create, delete, and meet-link minting.
#[component]
pub fn AdminClasses() -> Element {
    let data: AdminData = use_context();
    let toasts = use_toasts();

    let mut show_create = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut start_time = use_signal(String::new);
    let mut end_time = use_signal(String::new);
    let mut max_students = use_signal(|| "30".to_string());

    let class_list = match loaded(data.classes) {
        Some(list) => list,
        None => {
            return rsx! {
                Card { CardContent { Skeleton { style: "height: 12rem; width: 100%;" } } }
            };
        }
    };

    let create_class = move |_| {
        if title().trim().is_empty() || start_time().is_empty() || end_time().is_empty() {
            toasts.error("Title and times are required");
            return;
        }
        let req = ClassCreate {
            title: title().trim().to_string(),
            description: {
                let d = description();
                if d.trim().is_empty() { None } else { Some(d) }
            },
            start_time: start_time(),
            end_time: end_time(),
            max_students: max_students().parse().unwrap_or(30),
        };
        spawn(async move {
            let mut classes = data.classes;
            match api_client::classes::create(&req).await {
                Ok(_) => {
                    toasts.success("Class created");
                    show_create.set(false);
                    title.set(String::new());
                    description.set(String::new());
                    start_time.set(String::new());
                    end_time.set(String::new());
                    max_students.set("30".to_string());
                    classes.restart();
                }
                Err(err) => {
                    tracing::error!("class create failed: {}", err);
                    toasts.error("Failed to create class");
                }
            }
        });
    };

    let delete_class = move |class_id: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this class?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn(async move {
            let mut classes = data.classes;
            match api_client::classes::remove(&class_id).await {
                Ok(_) => {
                    toasts.success("Class deleted");
                    classes.restart();
                }
                Err(err) => {
                    tracing::error!("class delete failed: {}", err);
                    toasts.error("Failed to delete class");
                }
            }
        });
    };

    let mint_meet_link = move |class_id: String| {
        spawn(async move {
            let mut classes = data.classes;
            match api_client::classes::create_meet_link(&class_id).await {
                Ok(_) => {
                    toasts.success("Meeting link created");
                    classes.restart();
                }
                Err(err) => {
                    tracing::error!("meet link creation failed: {}", err);
                    toasts.error("Failed to create meeting link");
                }
            }
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Classes" }
                CardAction {
                    Button { onclick: move |_| show_create.set(true), "New class" }
                }
            }
            CardContent {
                if class_list.is_empty() {
                    p { class: "empty-note", "No classes yet." }
                } else {
                    div { class: "class-list",
                        for class in class_list {
                            div { key: "{class.class_id}", class: "class-row",
                                div { class: "class-row-main",
                                    span { class: "class-row-title", "{class.title}" }
                                    span { class: "class-row-meta",
                                        "{class.teacher_name} \u{00b7} "
                                        {format_datetime_human(&class.start_time)}
                                        " \u{00b7} "
                                        {class.capacity_label()}
                                    }
                                }
                                div { class: "class-row-actions",
                                    if let Some(link) = class.meet_link.clone() {
                                        a { class: "meet-link", href: "{link}", target: "_blank", "Join" }
                                    } else {
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: {
                                                let id = class.class_id.clone();
                                                move |_| mint_meet_link(id.clone())
                                            },
                                            "Create meet link"
                                        }
                                    }
                                    Button {
                                        variant: ButtonVariant::Destructive,
                                        onclick: {
                                            let id = class.class_id.clone();
                                            move |_| delete_class(id.clone())
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Dialog {
            open: show_create(),
            title: "New class",
            on_close: move |_| show_create.set(false),
            Input {
                label: "Title",
                value: title(),
                on_input: move |evt: FormEvent| title.set(evt.value()),
            }
            Textarea {
                label: "Description",
                value: description(),
                on_input: move |evt: FormEvent| description.set(evt.value()),
            }
            Input {
                label: "Starts",
                input_type: "datetime-local",
                value: start_time(),
                on_input: move |evt: FormEvent| start_time.set(evt.value()),
            }
            Input {
                label: "Ends",
                input_type: "datetime-local",
                value: end_time(),
                on_input: move |evt: FormEvent| end_time.set(evt.value()),
            }
            Input {
                label: "Max students",
                input_type: "number",
                value: max_students(),
                on_input: move |evt: FormEvent| max_students.set(evt.value()),
            }
            DialogActions {
                Button { variant: ButtonVariant::Ghost, onclick: move |_| show_create.set(false), "Cancel" }
                Button { onclick: create_class, "Create" }
            }
        }
    }
}
