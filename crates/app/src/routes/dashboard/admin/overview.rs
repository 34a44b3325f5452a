use chrono::Utc;
use dioxus::prelude::*;
use shared_types::{total_enrolled, upcoming_classes, UserRole};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Skeleton};

use super::AdminData;
use crate::format_helpers::format_datetime_human;
use crate::routes::dashboard::loaded;

#[component]
fn StatCard(label: &'static str, value: usize) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardContent {
                span { class: "stat-value", "{value}" }
                span { class: "stat-label", "{label}" }
            }
        }
    }
}

#[component]
pub fn AdminOverview() -> Element {
    let data: AdminData = use_context();
    let users = loaded(data.users);
    let classes = loaded(data.classes);
    let videos = loaded(data.videos);

    let (user_list, class_list, video_list) = match (users, classes, videos) {
        (Some(u), Some(c), Some(v)) => (u, c, v),
        _ => {
            return rsx! {
                div { class: "stat-grid",
                    for _ in 0..4 {
                        Card { CardContent { Skeleton { style: "height: 2.5rem; width: 100%;" } } }
                    }
                }
            };
        }
    };

    let students = user_list.iter().filter(|u| u.role == UserRole::Student).count();
    let teachers = user_list.iter().filter(|u| u.role == UserRole::Teacher).count();
    let upcoming = upcoming_classes(&class_list, Utc::now());

    rsx! {
        div { class: "stat-grid",
            StatCard { label: "Users", value: user_list.len() }
            StatCard { label: "Students", value: students }
            StatCard { label: "Teachers", value: teachers }
            StatCard { label: "Classes", value: class_list.len() }
            StatCard { label: "Enrollments", value: total_enrolled(&class_list) as usize }
            StatCard { label: "Videos", value: video_list.len() }
        }
        Card {
            CardHeader {
                CardTitle { "Upcoming classes" }
                CardDescription { "The next sessions across the whole school." }
            }
            CardContent {
                if upcoming.is_empty() {
                    p { class: "empty-note", "Nothing scheduled." }
                } else {
                    ul { class: "upcoming-list",
                        for class in upcoming {
                            li { key: "{class.class_id}",
                                span { class: "upcoming-title", "{class.title}" }
                                span { class: "upcoming-meta",
                                    {format_datetime_human(&class.start_time)}
                                    " \u{00b7} "
                                    {class.capacity_label()}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
