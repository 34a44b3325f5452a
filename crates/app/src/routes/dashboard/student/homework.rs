use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Skeleton};

use super::{EnrolledClassPicker, StudentData};
use crate::format_helpers::format_date_human;
use crate::routes::dashboard::{fetch_list, loaded};

/// Assignments for a chosen enrolled class.
#[component]
pub fn StudentHomework() -> Element {
    let data: StudentData = use_context();

    let selected = data.selected_class;
    let assignments = use_resource(move || {
        let class_id = selected();
        fetch_list("assignments", async move {
            match class_id {
                Some(id) => api_client::classwork::list_assignments(&id).await,
                None => Ok(Vec::new()),
            }
        })
    });

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Homework" }
            }
            CardContent {
                EnrolledClassPicker {}
                if selected().is_some() {
                    match loaded(assignments) {
                        None => rsx! { Skeleton { style: "height: 8rem; width: 100%;" } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "empty-note", "No assignments for this class." }
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
