use dioxus::prelude::*;
use shared_ui::Skeleton;

use super::TeacherData;
use crate::components::{CalendarItem, CalendarTone, MonthCalendar};
use crate::routes::dashboard::loaded;

/// Month grid of the teacher's own classes.
#[component]
pub fn TeacherCalendar() -> Element {
    let data: TeacherData = use_context();

    let mine = match loaded(data.classes) {
        Some(all) => data.my_classes(&all),
        None => return rsx! { Skeleton { style: "height: 24rem; width: 100%;" } },
    };

    let items: Vec<CalendarItem> = mine
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
