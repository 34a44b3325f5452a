//! Every sidebar renders from its role's `ALL` list and the content
//! dispatch matches on the same enum, so a role can never land on a tab
//! outside its menu. These checks keep the lists themselves honest.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use shared_types::{AdminTab, StudentTab, TeacherTab};

#[test]
fn admin_menu_is_complete_and_distinct() {
    let labels: HashSet<_> = AdminTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels.len(), AdminTab::ALL.len());
    assert_eq!(AdminTab::ALL[0], AdminTab::Overview);
}

#[test]
fn teacher_menu_is_complete_and_distinct() {
    let labels: HashSet<_> = TeacherTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels.len(), TeacherTab::ALL.len());
    assert_eq!(TeacherTab::ALL[0], TeacherTab::Overview);
}

#[test]
fn student_menu_is_complete_and_distinct() {
    let labels: HashSet<_> = StudentTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels.len(), StudentTab::ALL.len());
    assert_eq!(StudentTab::ALL[0], StudentTab::Overview);
}

#[test]
fn default_tab_is_always_in_the_menu() {
    assert!(AdminTab::ALL.contains(&AdminTab::default()));
    assert!(TeacherTab::ALL.contains(&TeacherTab::default()));
    assert!(StudentTab::ALL.contains(&StudentTab::default()));
}

#[test]
fn exactly_the_per_class_tools_need_a_selected_class() {
    let scoped: Vec<_> = TeacherTab::ALL
        .iter()
        .filter(|t| t.is_class_scoped())
        .collect();
    assert_eq!(
        scoped,
        vec![
            &TeacherTab::Homework,
            &TeacherTab::Attendance,
            &TeacherTab::Notes,
            &TeacherTab::Progress,
            &TeacherTab::Announcements,
        ]
    );
}
