use dioxus::prelude::*;
use shared_types::AnnouncementCreate;
use shared_ui::{
    use_toasts, Button, Card, CardContent, CardHeader, CardTitle, Input, Skeleton, Textarea,
};

use super::{NeedsClassNotice, TeacherData};
use crate::format_helpers::format_datetime_human;
use crate::routes::dashboard::{fetch_list, loaded};

/// Announcements for the selected class.
#[component]
pub fn TeacherAnnouncements() -> Element {
    let data: TeacherData = use_context();
    let toasts = use_toasts();

    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);

    let selected = data.selected_class;
    let mut announcements = use_resource(move || {
        let class_id = selected();
        fetch_list("announcements", async move {
            match class_id {
                Some(id) => api_client::classwork::list_announcements(&id).await,
                None => Ok(Vec::new()),
            }
        })
    });

    let has_class = selected().is_some();

    let post_announcement = move |_| {
        let class_id = match selected.peek().clone() {
            Some(id) => id,
            None => return,
        };
        if title().trim().is_empty() || content().trim().is_empty() {
            toasts.error("Title and announcement text are required");
            return;
        }
        let req = AnnouncementCreate {
            title: title().trim().to_string(),
            content: content().trim().to_string(),
        };
        spawn(async move {
            match api_client::classwork::create_announcement(&class_id, &req).await {
                Ok(_) => {
                    toasts.success("Announcement posted");
                    title.set(String::new());
                    content.set(String::new());
                    announcements.restart();
                }
                Err(err) => {
                    tracing::error!("announcement post failed: {}", err);
                    toasts.error("Failed to post announcement");
                }
            }
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "New announcement" }
            }
            CardContent {
                Input {
                    label: "Title",
                    value: title(),
                    disabled: !has_class,
                    on_input: move |evt: FormEvent| title.set(evt.value()),
                }
                Textarea {
                    label: "Announcement",
                    value: content(),
                    disabled: !has_class,
                    on_input: move |evt: FormEvent| content.set(evt.value()),
                }
                Button { disabled: !has_class, onclick: post_announcement, "Post" }
            }
        }
        if !has_class {
            NeedsClassNotice {}
        } else {
            Card {
                CardHeader {
                    CardTitle { "Posted" }
                }
                CardContent {
                    match loaded(announcements) {
                        None => rsx! { Skeleton { style: "height: 8rem; width: 100%;" } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "empty-note", "Nothing posted for this class yet." }
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
