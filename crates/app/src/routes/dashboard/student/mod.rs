pub mod announcements;
pub mod billing;
pub mod calendar;
pub mod classes;
pub mod homework;
pub mod overview;
pub mod progress;
pub mod videos;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdCalendar, LdCreditCard, LdFileText, LdLayoutDashboard, LdMegaphone,
    LdTrendingUp, LdVideo,
};
use dioxus_free_icons::Icon;
use shared_types::{enrolled_classes, Class, StudentTab, User};
use shared_ui::FormSelect;

use api_client::ApiResult;

use crate::routes::dashboard::{fetch_list, loaded};

/// Student-wide collections plus the class picked for the class-scoped
/// tabs (homework, progress, announcements).
#[derive(Clone, Copy)]
pub struct StudentData {
    pub student_id: Signal<String>,
    pub classes: Resource<ApiResult<Vec<shared_types::Class>>>,
    pub enrollments: Resource<ApiResult<Vec<shared_types::Enrollment>>>,
    pub videos: Resource<ApiResult<Vec<shared_types::Video>>>,
    pub invoices: Resource<ApiResult<Vec<shared_types::Invoice>>>,
    pub credits: Resource<ApiResult<Vec<shared_types::CreditTransaction>>>,
    pub selected_class: Signal<Option<String>>,
}

impl StudentData {
    /// Classes the student is enrolled in, when both fetches are in.
    pub fn enrolled(&self) -> Option<Vec<Class>> {
        let all = loaded(self.classes)?;
        let enrollments = loaded(self.enrollments)?;
        Some(enrolled_classes(&all, &enrollments))
    }
}

fn tab_icon(tab: StudentTab) -> Element {
    match tab {
        StudentTab::Overview => rsx! { Icon { icon: LdLayoutDashboard, width: 16, height: 16 } },
        StudentTab::Calendar => rsx! { Icon { icon: LdCalendar, width: 16, height: 16 } },
        StudentTab::Classes => rsx! { Icon { icon: LdBookOpen, width: 16, height: 16 } },
        StudentTab::Homework => rsx! { Icon { icon: LdFileText, width: 16, height: 16 } },
        StudentTab::Progress => rsx! { Icon { icon: LdTrendingUp, width: 16, height: 16 } },
        StudentTab::Announcements => rsx! { Icon { icon: LdMegaphone, width: 16, height: 16 } },
        StudentTab::Billing => rsx! { Icon { icon: LdCreditCard, width: 16, height: 16 } },
        StudentTab::Videos => rsx! { Icon { icon: LdVideo, width: 16, height: 16 } },
    }
}

#[component]
pub fn StudentDashboard(user: User) -> Element {
    let classes = use_resource(|| fetch_list("classes", api_client::classes::list()));
    let enrollments = use_resource(|| fetch_list("enrollments", api_client::enrollments::list()));
    let videos = use_resource(|| fetch_list("videos", api_client::videos::list()));
    let invoices = use_resource(|| fetch_list("invoices", api_client::billing::list_invoices()));
    let credits = use_resource(|| fetch_list("credits", api_client::billing::my_credits()));

    use_context_provider(|| StudentData {
        student_id: Signal::new(user.user_id.clone()),
        classes,
        enrollments,
        videos,
        invoices,
        credits,
        selected_class: Signal::new(None),
    });

    let mut tab = use_signal(StudentTab::default);

    rsx! {
        div { class: "dashboard-grid",
            aside { class: "dashboard-sidebar",
                for t in StudentTab::ALL {
                    button {
                        key: "{t.label()}",
                        class: "sidebar-tab",
                        "data-active": tab() == t,
                        onclick: move |_| tab.set(t),
                        {tab_icon(t)}
                        span { {t.label()} }
                    }
                }
            }
            section { class: "dashboard-content",
                match tab() {
                    StudentTab::Overview => rsx! { overview::StudentOverview { user: user.clone() } },
                    StudentTab::Calendar => rsx! { calendar::StudentCalendar {} },
                    StudentTab::Classes => rsx! { classes::StudentClasses {} },
                    StudentTab::Homework => rsx! { homework::StudentHomework {} },
                    StudentTab::Progress => rsx! { progress::StudentProgress {} },
                    StudentTab::Announcements => rsx! { announcements::StudentAnnouncements {} },
                    StudentTab::Billing => rsx! { billing::StudentBilling {} },
                    StudentTab::Videos => rsx! { videos::StudentVideos {} },
                }
            }
        }
    }
}

/// Enrolled-class picker used by the class-scoped tabs.
#[component]
pub fn EnrolledClassPicker() -> Element {
    let data: StudentData = use_context();
    let mut selected = data.selected_class;

    let enrolled = data.enrolled().unwrap_or_default();

    rsx! {
        FormSelect {
            label: "Class",
            value: selected().unwrap_or_default(),
            onchange: move |evt: Event<FormData>| {
                let value = evt.value();
                selected.set(if value.is_empty() { None } else { Some(value) });
            },
            option { value: "", "Select a class" }
            for class in enrolled.iter() {
                option { key: "{class.class_id}", value: "{class.class_id}", "{class.title}" }
            }
        }
    }
}
