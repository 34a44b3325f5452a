use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Attendance mark for one student in one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "absent" => AttendanceStatus::Absent,
            "late" => AttendanceStatus::Late,
            _ => AttendanceStatus::Present,
        }
    }
}

/// One student's mark within a submitted sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub student_id: String,
    pub status: AttendanceStatus,
}

/// A recorded attendance sheet for one session date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSheet {
    pub attendance_id: String,
    pub session_date: String,
    pub records: Vec<AttendanceEntry>,
}

/// Turn per-student selections into the full batch to submit.
///
/// Every student on the roster gets an entry; students with no explicit
/// selection are recorded as present (the marking form preselects nobody).
pub fn finalize_roster(
    roster: &[String],
    marks: &HashMap<String, AttendanceStatus>,
) -> Vec<AttendanceEntry> {
    roster
        .iter()
        .map(|student_id| AttendanceEntry {
            student_id: student_id.clone(),
            status: marks.get(student_id).copied().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unmarked_students_default_to_present() {
        let roster = vec!["s1".to_string(), "s2".to_string(), "s3".to_string()];
        let mut marks = HashMap::new();
        marks.insert("s2".to_string(), AttendanceStatus::Absent);

        let entries = finalize_roster(&roster, &marks);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].status, AttendanceStatus::Present);
        assert_eq!(entries[1].status, AttendanceStatus::Absent);
        assert_eq!(entries[2].status, AttendanceStatus::Present);
    }

    #[test]
    fn selections_for_unknown_students_are_ignored() {
        let roster = vec!["s1".to_string()];
        let mut marks = HashMap::new();
        marks.insert("ghost".to_string(), AttendanceStatus::Late);

        let entries = finalize_roster(&roster, &marks);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].student_id, "s1");
    }

    #[test]
    fn status_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Late).unwrap(),
            "\"late\""
        );
        let back: AttendanceStatus = serde_json::from_str("\"absent\"").unwrap();
        assert_eq!(back, AttendanceStatus::Absent);
    }
}
