use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Skeleton};

use super::{EnrolledClassPicker, StudentData};
use crate::format_helpers::format_datetime_human;
use crate::routes::dashboard::{fetch_list, loaded};

/// Announcements posted to a chosen enrolled class.
#[component]
pub fn StudentAnnouncements() -> Element {
    let data: StudentData = use_context();

    let selected = data.selected_class;
    let announcements = use_resource(move || {
        let class_id = selected();
        fetch_list("announcements", async move {
            match class_id {
                Some(id) => api_client::classwork::list_announcements(&id).await,
                None => Ok(Vec::new()),
            }
        })
    });

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Announcements" }
            }
            CardContent {
                EnrolledClassPicker {}
                if selected().is_some() {
                    match loaded(announcements) {
                        None => rsx! { Skeleton { style: "height: 8rem; width: 100%;" } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "empty-note", "No announcements for this class." }
                        },
                        Some(list) => rsx! {
                            ul { class: "announcement-list",
                                for item in list {
                                    li { key: "{item.announcement_id}",
                                        span { class: "announcement-title", "{item.title}" }
                                        p { class: "announcement-body", "{item.content}" }
                                        span { class: "announcement-meta",
                                            "{item.posted_by_name} \u{00b7} "
                                            {format_datetime_human(&item.created_at)}
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
