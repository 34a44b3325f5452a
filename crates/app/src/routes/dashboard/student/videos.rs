use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Skeleton};

use super::StudentData;
use crate::routes::dashboard::loaded;

/// Recordings for the student's enrolled classes.
#[component]
pub fn StudentVideos() -> Element {
    let data: StudentData = use_context();

    let (video_list, enrolled) = match (loaded(data.videos), data.enrolled()) {
        (Some(v), Some(e)) => (v, e),
        _ => {
            return rsx! {
                Card { CardContent { Skeleton { style: "height: 12rem; width: 100%;" } } }
            };
        }
    };

    let my_videos: Vec<_> = video_list
        .into_iter()
        .filter(|v| enrolled.iter().any(|c| c.class_id == v.class_id))
        .collect();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Videos" }
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
    }
}
