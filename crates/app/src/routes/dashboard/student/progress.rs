use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Skeleton};

use super::{EnrolledClassPicker, StudentData};
use crate::routes::dashboard::{fetch_list, loaded};

/// The student's own grades for a chosen enrolled class.
#[component]
pub fn StudentProgress() -> Element {
    let data: StudentData = use_context();
    let me = data.student_id.read().clone();

    let selected = data.selected_class;
    let entries = use_resource(move || {
        let class_id = selected();
        fetch_list("progress entries", async move {
            match class_id {
                Some(id) => api_client::classwork::list_progress(&id).await,
                None => Ok(Vec::new()),
            }
        })
    });

    rsx! {
        Card {
            CardHeader {
                CardTitle { "My progress" }
            }
            CardContent {
                EnrolledClassPicker {}
                if selected().is_some() {
                    match loaded(entries) {
                        None => rsx! { Skeleton { style: "height: 8rem; width: 100%;" } },
                        Some(list) => {
                            let own: Vec<_> = list.into_iter().filter(|e| e.student_id == me).collect();
                            if own.is_empty() {
                                rsx! { p { class: "empty-note", "No grades yet." } }
                            } else {
                                rsx! {
                                    ul { class: "progress-list",
                                        for entry in own {
                                            li { key: "{entry.progress_id}",
                                                span { class: "progress-grade", "{entry.grade}" }
                                                if !entry.comment.is_empty() {
                                                    span { class: "progress-comment", "{entry.comment}" }
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
    }
}
