use dioxus::prelude::*;
use shared_types::ProgressCreate;
use shared_ui::{
    use_toasts, Button, Card, CardContent, CardHeader, CardTitle, FormSelect, Input, Skeleton,
    Textarea,
};

use super::{NeedsClassNotice, TeacherData};
use crate::routes::dashboard::{fetch_list, loaded};

/// Per-student grades for the selected class.
#[component]
pub fn TeacherProgress() -> Element {
    let data: TeacherData = use_context();
    let toasts = use_toasts();

    let mut student_id = use_signal(String::new);
    let mut grade = use_signal(String::new);
    let mut comment = use_signal(String::new);

    let selected = data.selected_class;
    let mut entries = use_resource(move || {
        let class_id = selected();
        fetch_list("progress entries", async move {
            match class_id {
                Some(id) => api_client::classwork::list_progress(&id).await,
                None => Ok(Vec::new()),
            }
        })
    });

    let has_class = selected().is_some();

    let roster: Vec<String> = match (selected(), loaded(data.enrollments)) {
        (Some(class_id), Some(enrollments)) => enrollments
            .iter()
            .filter(|e| e.class_id == class_id)
            .filter_map(|e| e.student_id.clone())
            .collect(),
        _ => Vec::new(),
    };

    let create_entry = move |_| {
        let class_id = match selected.peek().clone() {
            Some(id) => id,
            None => return,
        };
        if student_id().is_empty() || grade().trim().is_empty() {
            toasts.error("Pick a student and a grade");
            return;
        }
        let req = ProgressCreate {
            student_id: student_id(),
            grade: grade().trim().to_string(),
            comment: comment(),
        };
        spawn(async move {
            match api_client::classwork::create_progress(&class_id, &req).await {
                Ok(_) => {
                    toasts.success("Progress recorded");
                    grade.set(String::new());
                    comment.set(String::new());
                    entries.restart();
                }
                Err(err) => {
                    tracing::error!("progress create failed: {}", err);
                    toasts.error("Failed to record progress");
                }
            }
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Record progress" }
            }
            CardContent {
                FormSelect {
                    label: "Student",
                    value: student_id(),
                    disabled: !has_class,
                    onchange: move |evt: Event<FormData>| student_id.set(evt.value()),
                    option { value: "", "Select a student" }
                    for id in roster.iter() {
                        option { key: "{id}", value: "{id}", "{id}" }
                    }
                }
                Input {
                    label: "Grade",
                    value: grade(),
                    disabled: !has_class,
                    on_input: move |evt: FormEvent| grade.set(evt.value()),
                }
                Textarea {
                    label: "Comment",
                    value: comment(),
                    disabled: !has_class,
                    on_input: move |evt: FormEvent| comment.set(evt.value()),
                }
                Button { disabled: !has_class, onclick: create_entry, "Record" }
            }
        }
        if !has_class {
            NeedsClassNotice {}
        } else {
            Card {
                CardHeader {
                    CardTitle { "Entries" }
                }
                CardContent {
                    match loaded(entries) {
                        None => rsx! { Skeleton { style: "height: 8rem; width: 100%;" } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "empty-note", "No progress recorded yet." }
                        },
                        Some(list) => rsx! {
                            table { class: "data-table",
                                thead {
                                    tr {
                                        th { "Student" }
                                        th { "Grade" }
                                        th { "Comment" }
                                    }
                                }
                                tbody {
                                    for entry in list {
                                        tr { key: "{entry.progress_id}",
                                            td { "{entry.student_id}" }
                                            td { "{entry.grade}" }
                                            td { "{entry.comment}" }
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
