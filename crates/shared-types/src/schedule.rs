use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::parse_timestamp;

/// A calendar event from `GET /schedule`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    #[serde(default)]
    pub schedule_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub meeting_link: String,
}

impl ScheduleEvent {
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.start_time)
    }

    pub fn status(&self, now: DateTime<Utc>) -> EventStatus {
        EventStatus::derive(now, self.starts_at(), parse_timestamp(&self.end_time))
    }

    /// The annotated label rendered on calendar cells, like "Title (Live)".
    pub fn annotated_title(&self, now: DateTime<Utc>) -> String {
        format!("{} ({})", self.title, self.status(now).label())
    }
}

/// Display status of a schedule event, computed client-side at fetch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Live,
    Completed,
}

impl EventStatus {
    /// Live when now falls within [start, end] inclusive, Completed when
    /// past end, otherwise Upcoming. Unparseable bounds fall back to
    /// Upcoming rather than guessing.
    pub fn derive(
        now: DateTime<Utc>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> EventStatus {
        match (start, end) {
            (Some(start), Some(end)) => {
                if now >= start && now <= end {
                    EventStatus::Live
                } else if now > end {
                    EventStatus::Completed
                } else {
                    EventStatus::Upcoming
                }
            }
            _ => EventStatus::Upcoming,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Live => "Live",
            EventStatus::Completed => "Completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(start: &str, end: &str) -> ScheduleEvent {
        ScheduleEvent {
            schedule_id: "ev1".into(),
            title: "Algebra".into(),
            description: String::new(),
            start_time: start.into(),
            end_time: end.into(),
            meeting_link: String::new(),
        }
    }

    fn at(raw: &str) -> DateTime<Utc> {
        parse_timestamp(raw).unwrap()
    }

    #[test]
    fn live_within_window_inclusive() {
        let ev = event("2025-01-01T10:00", "2025-01-01T11:00");
        assert_eq!(ev.status(at("2025-01-01T10:00")), EventStatus::Live);
        assert_eq!(ev.status(at("2025-01-01T10:30")), EventStatus::Live);
        assert_eq!(ev.status(at("2025-01-01T11:00")), EventStatus::Live);
    }

    #[test]
    fn completed_after_end() {
        let ev = event("2025-01-01T10:00", "2025-01-01T11:00");
        assert_eq!(ev.status(at("2025-01-01T11:01")), EventStatus::Completed);
    }

    #[test]
    fn upcoming_before_start() {
        let ev = event("2025-01-01T10:00", "2025-01-01T11:00");
        assert_eq!(ev.status(at("2025-01-01T09:59")), EventStatus::Upcoming);
    }

    #[test]
    fn unparseable_bounds_stay_upcoming() {
        let ev = event("later", "eventually");
        assert_eq!(ev.status(at("2025-01-01T10:00")), EventStatus::Upcoming);
    }

    #[test]
    fn annotated_title_appends_status() {
        let ev = event("2025-01-01T10:00", "2025-01-01T11:00");
        assert_eq!(ev.annotated_title(at("2025-01-01T10:30")), "Algebra (Live)");
    }
}
