use chrono::Utc;
use dioxus::prelude::*;
use shared_types::{upcoming_classes, User};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Skeleton};

use super::StudentData;
use crate::format_helpers::format_datetime_human;

#[component]
pub fn StudentOverview(user: User) -> Element {
    let data: StudentData = use_context();

    let enrolled = match data.enrolled() {
        Some(list) => list,
        None => {
            return rsx! {
                Card { CardContent { Skeleton { style: "height: 8rem; width: 100%;" } } }
            };
        }
    };

    let upcoming = upcoming_classes(&enrolled, Utc::now());

    rsx! {
        h2 { class: "dashboard-greeting", "Welcome back, {user.first_name()}" }
        Card { class: "stat-card",
            CardContent {
                span { class: "stat-value", "{enrolled.len()}" }
                span { class: "stat-label", "Enrolled classes" }
            }
        }
        Card {
            CardHeader {
                CardTitle { "Coming up" }
            }
            CardContent {
                if upcoming.is_empty() {
                    p { class: "empty-note", "No upcoming classes." }
                } else {
                    ul { class: "upcoming-list",
                        for class in upcoming {
                            li { key: "{class.class_id}",
                                span { class: "upcoming-title", "{class.title}" }
                                span { class: "upcoming-meta",
                                    "{class.teacher_name} \u{00b7} "
                                    {format_datetime_human(&class.start_time)}
                                }
                                if let Some(link) = class.meet_link.clone() {
                                    a { class: "meet-link", href: "{link}", target: "_blank", "Join meeting" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
