use dioxus::prelude::*;
use shared_ui::Skeleton;

use super::StudentData;
use crate::components::{CalendarItem, CalendarTone, MonthCalendar};

/// Month grid of the student's enrolled classes.
#[component]
pub fn StudentCalendar() -> Element {
    let data: StudentData = use_context();

    let enrolled = match data.enrolled() {
        Some(list) => list,
        None => return rsx! { Skeleton { style: "height: 24rem; width: 100%;" } },
    };

    let items: Vec<CalendarItem> = enrolled
        .iter()
        .filter_map(|class| {
            class.starts_at().map(|start| CalendarItem {
                date: start.date_naive(),
                label: class.title.clone(),
                tone: CalendarTone::Neutral,
            })
        })
        .collect();

    rsx! {
        MonthCalendar { items }
    }
}
