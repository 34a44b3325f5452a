use dioxus::prelude::*;
use shared_types::available_classes;
use shared_ui::{use_toasts, Button, Card, CardContent, CardHeader, CardTitle, Skeleton};

use super::StudentData;
use crate::format_helpers::format_datetime_human;
use crate::routes::dashboard::loaded;

/// Enrolled classes plus everything still open for enrollment.
/// Enrolling refreshes both lists.
#[component]
pub fn StudentClasses() -> Element {
    let data: StudentData = use_context();
    let toasts = use_toasts();

    let (all, enrolled) = match (loaded(data.classes), data.enrolled()) {
        (Some(all), Some(enrolled)) => (all, enrolled),
        _ => {
            return rsx! {
                Card { CardContent { Skeleton { style: "height: 12rem; width: 100%;" } } }
            };
        }
    };

    let available = available_classes(&all, &enrolled);

    let enroll = move |class_id: String| {
        spawn(async move {
            let mut classes = data.classes;
            let mut enrollments = data.enrollments;
            match api_client::enrollments::enroll(&class_id).await {
                Ok(_) => {
                    toasts.success("Enrolled");
                    classes.restart();
                    enrollments.restart();
                }
                Err(err) => {
                    tracing::warn!("enroll failed: {}", err);
                    toasts.error(err.detail());
                }
            }
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "My classes" }
            }
            CardContent {
                if enrolled.is_empty() {
                    p { class: "empty-note", "You are not enrolled in any class yet." }
                } else {
                    div { class: "class-list",
                        for class in enrolled {
                            div { key: "{class.class_id}", class: "class-row",
                                div { class: "class-row-main",
                                    span { class: "class-row-title", "{class.title}" }
                                    span { class: "class-row-meta",
                                        "{class.teacher_name} \u{00b7} "
                                        {format_datetime_human(&class.start_time)}
                                    }
                                }
                                if let Some(link) = class.meet_link.clone() {
                                    a { class: "meet-link", href: "{link}", target: "_blank", "Join" }
                                }
                            }
                        }
                    }
                }
            }
        }
        Card {
            CardHeader {
                CardTitle { "Available classes" }
            }
            CardContent {
                if available.is_empty() {
                    p { class: "empty-note", "Nothing new to enroll in." }
                } else {
                    div { class: "class-list",
                        for class in available {
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
                                Button {
                                    onclick: {
                                        let id = class.class_id.clone();
                                        move |_| enroll(id.clone())
                                    },
                                    "Enroll"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
