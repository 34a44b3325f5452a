//! Per-role dashboard tabs.
//!
//! Each role owns its own tab enum, so a role can never select a tab its
//! menu does not contain: the sidebar renders from `ALL` and the content
//! dispatch matches on the same enum.

/// Tabs available to administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Users,
    Classes,
    Calendar,
    Videos,
    Billing,
}

impl AdminTab {
    pub const ALL: [AdminTab; 6] = [
        AdminTab::Overview,
        AdminTab::Users,
        AdminTab::Classes,
        AdminTab::Calendar,
        AdminTab::Videos,
        AdminTab::Billing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Users => "Users",
            AdminTab::Classes => "Classes",
            AdminTab::Calendar => "Calendar",
            AdminTab::Videos => "Videos",
            AdminTab::Billing => "Billing",
        }
    }
}

/// Tabs available to teachers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeacherTab {
    #[default]
    Overview,
    Calendar,
    Classes,
    Homework,
    Attendance,
    Notes,
    Progress,
    Announcements,
    Videos,
}

impl TeacherTab {
    pub const ALL: [TeacherTab; 9] = [
        TeacherTab::Overview,
        TeacherTab::Calendar,
        TeacherTab::Classes,
        TeacherTab::Homework,
        TeacherTab::Attendance,
        TeacherTab::Notes,
        TeacherTab::Progress,
        TeacherTab::Announcements,
        TeacherTab::Videos,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TeacherTab::Overview => "Overview",
            TeacherTab::Calendar => "Calendar",
            TeacherTab::Classes => "My Classes",
            TeacherTab::Homework => "Homework",
            TeacherTab::Attendance => "Attendance",
            TeacherTab::Notes => "Lesson Notes",
            TeacherTab::Progress => "Progress",
            TeacherTab::Announcements => "Announcements",
            TeacherTab::Videos => "Video Library",
        }
    }

    /// Tabs that require a selected class before they can fetch or submit.
    pub fn is_class_scoped(&self) -> bool {
        matches!(
            self,
            TeacherTab::Homework
                | TeacherTab::Attendance
                | TeacherTab::Notes
                | TeacherTab::Progress
                | TeacherTab::Announcements
        )
    }
}

/// Tabs available to students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentTab {
    #[default]
    Overview,
    Calendar,
    Classes,
    Homework,
    Progress,
    Announcements,
    Billing,
    Videos,
}

impl StudentTab {
    pub const ALL: [StudentTab; 8] = [
        StudentTab::Overview,
        StudentTab::Calendar,
        StudentTab::Classes,
        StudentTab::Homework,
        StudentTab::Progress,
        StudentTab::Announcements,
        StudentTab::Billing,
        StudentTab::Videos,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StudentTab::Overview => "Overview",
            StudentTab::Calendar => "Calendar",
            StudentTab::Classes => "My Classes",
            StudentTab::Homework => "Homework",
            StudentTab::Progress => "Progress",
            StudentTab::Announcements => "Announcements",
            StudentTab::Billing => "Billing",
            StudentTab::Videos => "Videos",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_starts_at_overview() {
        assert_eq!(AdminTab::ALL[0], AdminTab::default());
        assert_eq!(TeacherTab::ALL[0], TeacherTab::default());
        assert_eq!(StudentTab::ALL[0], StudentTab::default());
    }

    #[test]
    fn menu_entries_are_unique() {
        for (i, a) in TeacherTab::ALL.iter().enumerate() {
            for b in &TeacherTab::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn class_scoped_tabs_match_the_teacher_workflows() {
        let scoped: Vec<TeacherTab> = TeacherTab::ALL
            .iter()
            .copied()
            .filter(TeacherTab::is_class_scoped)
            .collect();
        assert_eq!(
            scoped,
            vec![
                TeacherTab::Homework,
                TeacherTab::Attendance,
                TeacherTab::Notes,
                TeacherTab::Progress,
                TeacherTab::Announcements
            ]
        );
    }
}
