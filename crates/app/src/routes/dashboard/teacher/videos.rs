use dioxus::prelude::*;
use shared_types::VideoCreate;
use shared_ui::{
    use_toasts, Button, ButtonVariant, Card, CardAction, CardContent, CardHeader, CardTitle,
    Dialog, DialogActions, FormSelect, Input, Skeleton, Textarea,
};

use super::TeacherData;
use crate::routes::dashboard::loaded;

/// Recordings and materials for the teacher's classes.
#[component]
pub fn TeacherVideos() -> Element {
    let data: TeacherData = use_context();
    let toasts = use_toasts();

    let mut show_add = use_signal(|| false);
    let mut class_id = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut video_url = use_signal(String::new);
    let mut description = use_signal(String::new);

    let (video_list, all_classes) = match (loaded(data.videos), loaded(data.classes)) {
        (Some(v), Some(c)) => (v, c),
        _ => {
            return rsx! {
                Card { CardContent { Skeleton { style: "height: 12rem; width: 100%;" } } }
            };
        }
    };

    let mine = data.my_classes(&all_classes);
    let my_videos: Vec<_> = video_list
        .into_iter()
        .filter(|v| mine.iter().any(|c| c.class_id == v.class_id))
        .collect();

    let add_video = move |_| {
        if title().trim().is_empty() || class_id().is_empty() {
            toasts.error("Pick a class and a title");
            return;
        }
        let req = VideoCreate {
            class_id: class_id(),
            title: title().trim().to_string(),
            video_url: {
                let u = video_url();
                if u.trim().is_empty() { None } else { Some(u) }
            },
            description: {
                let d = description();
                if d.trim().is_empty() { None } else { Some(d) }
            },
        };
        spawn(async move {
            let mut videos = data.videos;
            match api_client::videos::create(&req).await {
                Ok(_) => {
                    toasts.success("Video added");
                    show_add.set(false);
                    title.set(String::new());
                    video_url.set(String::new());
                    description.set(String::new());
                    videos.restart();
                }
                Err(err) => {
                    tracing::error!("video create failed: {}", err);
                    toasts.error("Failed to add video");
                }
            }
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Video library" }
                CardAction {
                    Button { onclick: move |_| show_add.set(true), "Add video" }
                }
            }
            CardContent {
                if my_videos.is_empty() {
                    p { class: "empty-note", "No videos for your classes yet." }
                } else {
                    div { class: "video-grid",
                        for video in my_videos {
                            div { key: "{video.video_id}", class: "video-card",
                                span { class: "video-title", "{video.title}" }
                                if let Some(desc) = video.description.clone() {
                                    p { class: "video-desc", "{desc}" }
                                }
                                if let Some(url) = video.video_url.clone() {
                                    a { class: "video-link", href: "{url}", target: "_blank", "Watch" }
                                }
                            }
                        }
                    }
                }
            }
        }
        Dialog {
            open: show_add(),
            title: "Add video",
            on_close: move |_| show_add.set(false),
            FormSelect {
                label: "Class",
                value: class_id(),
                onchange: move |evt: Event<FormData>| class_id.set(evt.value()),
                option { value: "", "Select a class" }
                for class in mine.iter() {
                    option { key: "{class.class_id}", value: "{class.class_id}", "{class.title}" }
                }
            }
            Input {
                label: "Title",
                value: title(),
                on_input: move |evt: FormEvent| title.set(evt.value()),
            }
            Input {
                label: "Video URL",
                value: video_url(),
                on_input: move |evt: FormEvent| video_url.set(evt.value()),
            }
            Textarea {
                label: "Description",
                value: description(),
                on_input: move |evt: FormEvent| description.set(evt.value()),
            }
            DialogActions {
                Button { variant: ButtonVariant::Ghost, onclick: move |_| show_add.set(false), "Cancel" }
                Button { onclick: add_video, "Add" }
            }
        }
    }
}
