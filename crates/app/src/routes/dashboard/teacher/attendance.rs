use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{finalize_roster, AttendanceStatus, AttendanceSubmit};
use shared_ui::{
    use_toasts, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, FormSelect,
    Input, Skeleton,
};

use super::{NeedsClassNotice, TeacherData};
use crate::format_helpers::format_date_human;
use crate::routes::dashboard::{fetch_list, loaded};

/// Roster marking for the selected class. Students left unmarked are
/// submitted as present.
#[component]
pub fn TeacherAttendance() -> Element {
    let data: TeacherData = use_context();
    let toasts = use_toasts();

    let mut session_date = use_signal(String::new);
    let mut marks = use_signal(HashMap::<String, AttendanceStatus>::new);

    let selected = data.selected_class;
    let mut sheets = use_resource(move || {
        let class_id = selected();
        fetch_list("attendance sheets", async move {
            match class_id {
                Some(id) => api_client::classwork::list_attendance(&id).await,
                None => Ok(Vec::new()),
            }
        })
    });

    let has_class = selected().is_some();

    // Roster = students enrolled in the selected class.
    let roster: Vec<String> = match (selected(), loaded(data.enrollments)) {
        (Some(class_id), Some(enrollments)) => enrollments
            .iter()
            .filter(|e| e.class_id == class_id)
            .filter_map(|e| e.student_id.clone())
            .collect(),
        _ => Vec::new(),
    };

    let submit = {
        let roster = roster.clone();
        move |_| {
            let class_id = match selected.peek().clone() {
                Some(id) => id,
                None => return,
            };
            if session_date().is_empty() {
                toasts.error("Pick a session date");
                return;
            }
            let req = AttendanceSubmit {
                session_date: session_date(),
                records: finalize_roster(&roster, &marks()),
            };
            spawn(async move {
                match api_client::classwork::submit_attendance(&class_id, &req).await {
                    Ok(_) => {
                        toasts.success("Attendance recorded");
                        marks.set(HashMap::new());
                        sheets.restart();
                    }
                    Err(err) => {
                        tracing::error!("attendance submit failed: {}", err);
                        toasts.error("Failed to record attendance");
                    }
                }
            });
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Take attendance" }
                CardDescription { "Unmarked students count as present." }
            }
            CardContent {
                Input {
                    label: "Session date",
                    input_type: "date",
                    value: session_date(),
                    disabled: !has_class,
                    on_input: move |evt: FormEvent| session_date.set(evt.value()),
                }
                if has_class {
                    if roster.is_empty() {
                        p { class: "empty-note", "Nobody is enrolled in this class." }
                    } else {
                        div { class: "roster",
                            for student_id in roster.iter().cloned() {
                                div { key: "{student_id}", class: "roster-row",
                                    span { class: "roster-student", "{student_id}" }
                                    FormSelect {
                                        value: marks()
                                            .get(&student_id)
                                            .copied()
                                            .unwrap_or_default()
                                            .as_str()
                                            .to_string(),
                                        onchange: {
                                            let student_id = student_id.clone();
                                            move |evt: Event<FormData>| {
                                                marks.write().insert(
                                                    student_id.clone(),
                                                    AttendanceStatus::from_str_or_default(&evt.value()),
                                                );
                                            }
                                        },
                                        for status in AttendanceStatus::ALL {
                                            option { value: status.as_str(), {status.label()} }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Button { disabled: !has_class, onclick: submit, "Submit" }
            }
        }
        if !has_class {
            NeedsClassNotice {}
        } else {
            Card {
                CardHeader {
                    CardTitle { "Past sessions" }
                }
                CardContent {
                    match loaded(sheets) {
                        None => rsx! { Skeleton { style: "height: 8rem; width: 100%;" } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "empty-note", "No attendance recorded yet." }
                        },
                        Some(list) => rsx! {
                            ul { class: "sheet-list",
                                for sheet in list {
                                    li { key: "{sheet.attendance_id}",
                                        span { class: "sheet-date",
                                            {format_date_human(&sheet.session_date)}
                                        }
                                        span { class: "sheet-summary",
                                            {summarize(&sheet.records)}
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

/// "5 present, 1 absent, 2 late" with zero-count groups dropped.
fn summarize(records: &[shared_types::AttendanceEntry]) -> String {
    let mut parts = Vec::new();
    for status in AttendanceStatus::ALL {
        let count = records.iter().filter(|r| r.status == status).count();
        if count > 0 {
            parts.push(format!("{} {}", count, status.as_str()));
        }
    }
    if parts.is_empty() {
        "empty".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::AttendanceEntry;

    fn entry(id: &str, status: AttendanceStatus) -> AttendanceEntry {
        AttendanceEntry {
            student_id: id.into(),
            status,
        }
    }

    #[test]
    fn summary_skips_zero_counts() {
        let records = vec![
            entry("a", AttendanceStatus::Present),
            entry("b", AttendanceStatus::Present),
            entry("c", AttendanceStatus::Late),
        ];
        assert_eq!(summarize(&records), "2 present, 1 late");
    }

    #[test]
    fn summary_of_empty_sheet() {
        assert_eq!(summarize(&[]), "empty");
    }
}
