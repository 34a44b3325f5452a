use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use shared_types::ScheduleEventCreate;
use shared_ui::Skeleton;

use crate::components::{CalendarItem, CalendarTone, MonthCalendar};
use crate::format_helpers::format_datetime_human;
use crate::routes::dashboard::fetch_list;
use crate::session::use_session;

fn tone_for(status: shared_types::EventStatus) -> CalendarTone {
    match status {
        shared_types::EventStatus::Live => CalendarTone::Live,
        shared_types::EventStatus::Completed => CalendarTone::Done,
        shared_types::EventStatus::Upcoming => CalendarTone::Neutral,
    }
}

/// Full-page class schedule. Clicking an empty day prompts for a new event
/// title; clicking an event shows its window.
#[component]
pub fn Schedule() -> Element {
    let session = use_session();
    let mut events = use_resource(|| fetch_list("schedule", api_client::schedule::list()));

    let loaded = match &*events.read() {
        Some(Ok(list)) => Some(list.clone()),
        Some(Err(_)) => Some(Vec::new()),
        None => None,
    };

    let now = Utc::now();
    let items: Vec<CalendarItem> = loaded
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .filter_map(|ev| {
            ev.starts_at().map(|start| CalendarItem {
                date: start.date_naive(),
                label: ev.annotated_title(now),
                tone: tone_for(ev.status(now)),
            })
        })
        .collect();

    let events_for_click = loaded.clone().unwrap_or_default();
    let can_create = session
        .role()
        .map(|r| r != shared_types::UserRole::Student)
        .unwrap_or(false);

    let on_day_click = move |date: NaiveDate| {
        if !can_create {
            return;
        }
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let title = match window.prompt_with_message("Enter class title:") {
            Ok(Some(t)) if !t.trim().is_empty() => t.trim().to_string(),
            _ => return,
        };

        // One-hour slot in the morning of the picked day.
        let req = ScheduleEventCreate {
            title,
            description: String::new(),
            start_time: format!("{}T09:00:00", date),
            end_time: format!("{}T10:00:00", date),
            meeting_link: String::new(),
        };

        spawn(async move {
            match api_client::schedule::create(&req).await {
                Ok(_) => events.restart(),
                Err(err) => tracing::warn!("create schedule event failed: {}", err),
            }
        });
    };

    let on_item_click = move |idx: usize| {
        if let Some(ev) = events_for_click.get(idx) {
            let details = format!(
                "Title: {}\nStart: {}\nEnd: {}",
                ev.title,
                format_datetime_human(&ev.start_time),
                format_datetime_human(&ev.end_time),
            );
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&details);
            }
        }
    };

    rsx! {
        div { class: "schedule-page",
            h1 { class: "schedule-title", "Class Schedule" }
            if loaded.is_none() {
                Skeleton { style: "height: 24rem; width: 100%;" }
            } else {
                MonthCalendar {
                    items,
                    on_day_click,
                    on_item_click,
                }
            }
        }
    }
}
