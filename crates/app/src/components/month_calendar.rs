use chrono::{Datelike, NaiveDate, Utc};
use dioxus::prelude::*;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Color tone for a calendar item chip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CalendarTone {
    #[default]
    Neutral,
    Live,
    Done,
}

impl CalendarTone {
    fn class(&self) -> &'static str {
        match self {
            CalendarTone::Neutral => "neutral",
            CalendarTone::Live => "live",
            CalendarTone::Done => "done",
        }
    }
}

/// One entry rendered inside a day cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarItem {
    pub date: NaiveDate,
    pub label: String,
    pub tone: CalendarTone,
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_y, next_m) = shift_month(year, month, 1);
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Offset of the month's first day within a Sunday-first week row.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Move a (year, month) cursor by a signed number of months.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let zero_based = year * 12 + month as i32 - 1 + delta;
    (zero_based.div_euclid(12), (zero_based.rem_euclid(12) + 1) as u32)
}

pub fn month_title(year: i32, month: u32) -> String {
    let name = MONTH_NAMES
        .get(month as usize - 1)
        .copied()
        .unwrap_or("Unknown");
    format!("{name} {year}")
}

/// Month grid with prev/next navigation.
///
/// `on_day_click` fires for empty space in a cell, `on_item_click` with the
/// index of the clicked entry in `items`.
#[component]
pub fn MonthCalendar(
    items: Vec<CalendarItem>,
    #[props(default)] on_day_click: Option<EventHandler<NaiveDate>>,
    #[props(default)] on_item_click: Option<EventHandler<usize>>,
) -> Element {
    let today = Utc::now().date_naive();
    let mut cursor = use_signal(|| (today.year(), today.month()));

    let (year, month) = *cursor.read();
    let offset = first_weekday_offset(year, month);
    let day_count = days_in_month(year, month);

    rsx! {
        div { class: "month-calendar",
            div { class: "month-calendar-nav",
                button {
                    class: "month-calendar-arrow",
                    aria_label: "Previous month",
                    onclick: move |_| {
                        let (y, m) = *cursor.peek();
                        cursor.set(shift_month(y, m, -1));
                    },
                    "\u{2039}"
                }
                span { class: "month-calendar-title", {month_title(year, month)} }
                button {
                    class: "month-calendar-arrow",
                    aria_label: "Next month",
                    onclick: move |_| {
                        let (y, m) = *cursor.peek();
                        cursor.set(shift_month(y, m, 1));
                    },
                    "\u{203a}"
                }
            }
            div { class: "month-calendar-grid",
                for name in WEEKDAYS {
                    div { class: "month-calendar-weekday", "{name}" }
                }
                for _ in 0..offset {
                    div { class: "month-calendar-cell empty" }
                }
                for day in 1..=day_count {
                    {
                        let date = NaiveDate::from_ymd_opt(year, month, day);
                        let is_today = date == Some(today);
                        rsx! {
                            div {
                                key: "{year}-{month}-{day}",
                                class: if is_today { "month-calendar-cell today" } else { "month-calendar-cell" },
                                onclick: move |_| {
                                    if let (Some(handler), Some(date)) = (&on_day_click, date) {
                                        handler.call(date);
                                    }
                                },
                                span { class: "month-calendar-daynum", "{day}" }
                                for (idx, item) in items.iter().enumerate() {
                                    if Some(item.date) == date {
                                        span {
                                            class: "month-calendar-item",
                                            "data-tone": item.tone.class(),
                                            onclick: move |evt| {
                                                evt.stop_propagation();
                                                if let Some(handler) = &on_item_click {
                                                    handler.call(idx);
                                                }
                                            },
                                            "{item.label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2028, 2), 29);
        assert_eq!(days_in_month(2026, 4), 30);
    }

    #[test]
    fn shift_wraps_across_years() {
        assert_eq!(shift_month(2026, 1, -1), (2025, 12));
        assert_eq!(shift_month(2026, 12, 1), (2027, 1));
        assert_eq!(shift_month(2026, 6, 1), (2026, 7));
        assert_eq!(shift_month(2026, 6, -18), (2024, 12));
    }

    #[test]
    fn sunday_first_offset() {
        // 2026-08-01 is a Saturday
        assert_eq!(first_weekday_offset(2026, 8), 6);
        // 2026-03-01 is a Sunday
        assert_eq!(first_weekday_offset(2026, 3), 0);
    }

    #[test]
    fn titles() {
        assert_eq!(month_title(2026, 8), "August 2026");
    }
}
