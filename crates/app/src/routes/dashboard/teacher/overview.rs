use chrono::Utc;
use dioxus::prelude::*;
use shared_types::{upcoming_classes, User};
use shared_ui::{Button, Card, CardAction, CardContent, CardHeader, CardTitle, Skeleton};

use super::classes::CreateClassDialog;
use super::TeacherData;
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
pub fn TeacherOverview(user: User) -> Element {
    let data: TeacherData = use_context();
    let mut show_create = use_signal(|| false);

    let (all_classes, video_list) = match (loaded(data.classes), loaded(data.videos)) {
        (Some(c), Some(v)) => (c, v),
        _ => {
            return rsx! {
                div { class: "stat-grid",
                    for _ in 0..3 {
                        Card { CardContent { Skeleton { style: "height: 2.5rem; width: 100%;" } } }
                    }
                }
            };
        }
    };

    let mine = data.my_classes(&all_classes);
    let student_count: u32 = mine.iter().map(|c| c.enrolled_count).sum();
    let my_video_count = video_list
        .iter()
        .filter(|v| mine.iter().any(|c| c.class_id == v.class_id))
        .count();
    let upcoming = upcoming_classes(&mine, Utc::now());

    rsx! {
        h2 { class: "dashboard-greeting", "Welcome back, {user.first_name()}" }
        div { class: "stat-grid",
            StatCard { label: "My classes", value: mine.len() }
            StatCard { label: "Students", value: student_count as usize }
            StatCard { label: "Videos", value: my_video_count }
        }
        Card {
            CardHeader {
                CardTitle { "Upcoming classes" }
                CardAction {
                    Button { onclick: move |_| show_create.set(true), "New class" }
                }
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
        CreateClassDialog { open: show_create }
    }
}
