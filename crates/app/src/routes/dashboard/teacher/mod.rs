pub mod announcements;
pub mod attendance;
pub mod calendar;
pub mod classes;
pub mod homework;
pub mod notes;
pub mod overview;
pub mod progress;
pub mod videos;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdCalendar, LdClipboardCheck, LdFileText, LdLayoutDashboard, LdMegaphone,
    LdStickyNote, LdTrendingUp, LdVideo,
};
use dioxus_free_icons::Icon;
use shared_types::{Class, TeacherTab, User};

use api_client::ApiResult;

use super::fetch_list;

/// Teacher-wide state. `selected_class` scopes the homework, attendance,
/// notes, progress, and announcements tabs.
#[derive(Clone, Copy)]
pub struct TeacherData {
    pub teacher_id: Signal<String>,
    pub classes: Resource<ApiResult<Vec<shared_types::Class>>>,
    pub videos: Resource<ApiResult<Vec<shared_types::Video>>>,
    pub enrollments: Resource<ApiResult<Vec<shared_types::Enrollment>>>,
    pub selected_class: Signal<Option<String>>,
}

impl TeacherData {
    /// Classes this teacher owns, out of the full listing.
    pub fn my_classes(&self, all: &[Class]) -> Vec<Class> {
        let me = self.teacher_id.read().clone();
        all.iter().filter(|c| c.teacher_id == me).cloned().collect()
    }
}

fn tab_icon(tab: TeacherTab) -> Element {
    match tab {
        TeacherTab::Overview => rsx! { Icon { icon: LdLayoutDashboard, width: 16, height: 16 } },
        TeacherTab::Calendar => rsx! { Icon { icon: LdCalendar, width: 16, height: 16 } },
        TeacherTab::Classes => rsx! { Icon { icon: LdBookOpen, width: 16, height: 16 } },
        TeacherTab::Homework => rsx! { Icon { icon: LdFileText, width: 16, height: 16 } },
        TeacherTab::Attendance => rsx! { Icon { icon: LdClipboardCheck, width: 16, height: 16 } },
        TeacherTab::Notes => rsx! { Icon { icon: LdStickyNote, width: 16, height: 16 } },
        TeacherTab::Progress => rsx! { Icon { icon: LdTrendingUp, width: 16, height: 16 } },
        TeacherTab::Announcements => rsx! { Icon { icon: LdMegaphone, width: 16, height: 16 } },
        TeacherTab::Videos => rsx! { Icon { icon: LdVideo, width: 16, height: 16 } },
    }
}

#[component]
pub fn TeacherDashboard(user: User) -> Element {
    let classes = use_resource(|| fetch_list("classes", api_client::classes::list()));
    let videos = use_resource(|| fetch_list("videos", api_client::videos::list()));
    let enrollments = use_resource(|| fetch_list("enrollments", api_client::enrollments::list()));

    use_context_provider(|| TeacherData {
        teacher_id: Signal::new(user.user_id.clone()),
        classes,
        videos,
        enrollments,
        selected_class: Signal::new(None),
    });

    let mut tab = use_signal(TeacherTab::default);

    rsx! {
        div { class: "dashboard-grid",
            aside { class: "dashboard-sidebar",
                for t in TeacherTab::ALL {
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
                    TeacherTab::Overview => rsx! { overview::TeacherOverview { user: user.clone() } },
                    TeacherTab::Calendar => rsx! { calendar::TeacherCalendar {} },
                    TeacherTab::Classes => rsx! { classes::TeacherClasses {} },
                    TeacherTab::Homework => rsx! { homework::TeacherHomework {} },
                    TeacherTab::Attendance => rsx! { attendance::TeacherAttendance {} },
                    TeacherTab::Notes => rsx! { notes::TeacherNotes {} },
                    TeacherTab::Progress => rsx! { progress::TeacherProgress {} },
                    TeacherTab::Announcements => rsx! { announcements::TeacherAnnouncements {} },
                    TeacherTab::Videos => rsx! { videos::TeacherVideos {} },
                }
            }
        }
    }
}

/// Shown by the class-scoped tabs until a class is picked on My Classes.
#[component]
pub fn NeedsClassNotice() -> Element {
    rsx! {
        div { class: "needs-class",
            p { "Select one of your classes on the My Classes tab first." }
        }
    }
}
