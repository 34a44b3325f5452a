use dioxus::prelude::*;
use shared_ui::Skeleton;

use super::AdminData;
use crate::components::{CalendarItem, CalendarTone, MonthCalendar};
use crate::routes::dashboard::loaded;

/// Month grid of every scheduled class.
#[component]
pub fn AdminCalendar() -> Element {
    let data: AdminData = use_context();

    let class_list = match loaded(data.classes) {
        Some(list) => list,
        None => return rsx! { Skeleton { style: "height: 24rem; width: 100%;" } },
    };

    let items: Vec<CalendarItem> = class_list
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
