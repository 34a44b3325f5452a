use dioxus::prelude::*;
use shared_types::AssignmentCreate;
use shared_ui::{
    use_toasts, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, Skeleton,
    Textarea,
};

use super::{NeedsClassNotice, TeacherData};
use crate::format_helpers::format_date_human;
use crate::routes::dashboard::{fetch_list, loaded};

/// Assignments for the selected class. Without a selection only the
/// creation form renders, disabled.
#[component]
pub fn TeacherHomework() -> Element {
    let data: TeacherData = use_context();
    let toasts = use_toasts();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut due_date = use_signal(String::new);

    let selected = data.selected_class;
    let mut assignments = use_resource(move || {
        let class_id = selected();
        fetch_list("assignments", async move {
            match class_id {
                Some(id) => api_client::classwork::list_assignments(&id).await,
                None => Ok(Vec::new()),
            }
        })
    });

    let create_assignment = move |_| {
        let class_id = match selected.peek().clone() {
            Some(id) => id,
            None => return,
        };
        if title().trim().is_empty() || due_date().is_empty() {
            toasts.error("Title and due date are required");
            return;
        }
        let req = AssignmentCreate {
            title: title().trim().to_string(),
            description: description(),
            due_date: due_date(),
        };
        spawn(async move {
            match api_client::classwork::create_assignment(&class_id, &req).await {
                Ok(_) => {
                    toasts.success("Assignment posted");
                    title.set(String::new());
                    description.set(String::new());
                    due_date.set(String::new());
                    assignments.restart();
                }
                Err(err) => {
                    tracing::error!("assignment create failed: {}", err);
                    toasts.error("Failed to post assignment");
                }
            }
        });
    };

    let delete_assignment = move |assignment_id: String| {
        let class_id = match selected.peek().clone() {
            Some(id) => id,
            None => return,
        };
        spawn(async move {
            match api_client::classwork::delete_assignment(&class_id, &assignment_id).await {
                Ok(_) => {
                    toasts.success("Assignment removed");
                    assignments.restart();
                }
                Err(err) => {
                    tracing::error!("assignment delete failed: {}", err);
                    toasts.error("Failed to remove assignment");
                }
            }
        });
    };

    let has_class = selected().is_some();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Post homework" }
            }
            CardContent {
                Input {
                    label: "Title",
                    value: title(),
                    disabled: !has_class,
                    on_input: move |evt: FormEvent| title.set(evt.value()),
                }
                Textarea {
                    label: "Instructions",
                    value: description(),
                    disabled: !has_class,
                    on_input: move |evt: FormEvent| description.set(evt.value()),
                }
                Input {
                    label: "Due",
                    input_type: "date",
                    value: due_date(),
                    disabled: !has_class,
                    on_input: move |evt: FormEvent| due_date.set(evt.value()),
                }
                Button { disabled: !has_class, onclick: create_assignment, "Post" }
            }
        }
        if !has_class {
            NeedsClassNotice {}
        } else {
            Card {
                CardHeader {
                    CardTitle { "Assignments" }
                }
                CardContent {
                    match loaded(assignments) {
                        None => rsx! { Skeleton { style: "height: 8rem; width: 100%;" } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "empty-note", "No assignments yet." }
                        },
                        Some(list) => rsx! {
                            ul { class: "assignment-list",
                                for assignment in list {
                                    li { key: "{assignment.assignment_id}",
                                        div { class: "assignment-main",
                                            span { class: "assignment-title", "{assignment.title}" }
                                            span { class: "assignment-meta",
                                                "Due "
                                                {format_date_human(&assignment.due_date)}
                                            }
                                            if !assignment.description.is_empty() {
                                                p { class: "assignment-desc", "{assignment.description}" }
                                            }
                                        }
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let id = assignment.assignment_id.clone();
                                                move |_| delete_assignment(id.clone())
                                            },
                                            "Remove"
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
