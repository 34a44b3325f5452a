pub mod billing;
pub mod calendar;
pub mod classes;
pub mod overview;
pub mod users;
pub mod videos;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdCalendar, LdCreditCard, LdLayoutDashboard, LdUsers, LdVideo,
};
use dioxus_free_icons::Icon;
use shared_types::AdminTab;

use api_client::ApiResult;

use super::fetch_list;

/// Admin-wide collections, fetched once and shared by every tab. Each
/// mutation restarts only the resource it touched.
#[derive(Clone, Copy)]
pub struct AdminData {
    pub users: Resource<ApiResult<Vec<shared_types::User>>>,
    pub classes: Resource<ApiResult<Vec<shared_types::Class>>>,
    pub videos: Resource<ApiResult<Vec<shared_types::Video>>>,
    pub invoices: Resource<ApiResult<Vec<shared_types::Invoice>>>,
}

fn tab_icon(tab: AdminTab) -> Element {
    match tab {
        AdminTab::Overview => rsx! { Icon { icon: LdLayoutDashboard, width: 16, height: 16 } },
        AdminTab::Users => rsx! { Icon { icon: LdUsers, width: 16, height: 16 } },
        AdminTab::Classes => rsx! { Icon { icon: LdBookOpen, width: 16, height: 16 } },
        AdminTab::Calendar => rsx! { Icon { icon: LdCalendar, width: 16, height: 16 } },
        AdminTab::Videos => rsx! { Icon { icon: LdVideo, width: 16, height: 16 } },
        AdminTab::Billing => rsx! { Icon { icon: LdCreditCard, width: 16, height: 16 } },
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let users = use_resource(|| fetch_list("users", api_client::users::list()));
    let classes = use_resource(|| fetch_list("classes", api_client::classes::list()));
    let videos = use_resource(|| fetch_list("videos", api_client::videos::list()));
    let invoices = use_resource(|| fetch_list("invoices", api_client::billing::list_invoices()));

    use_context_provider(|| AdminData {
        users,
        classes,
        videos,
        invoices,
    });

    let mut tab = use_signal(AdminTab::default);

    rsx! {
        div { class: "dashboard-grid",
            aside { class: "dashboard-sidebar",
                for t in AdminTab::ALL {
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
                    AdminTab::Overview => rsx! { overview::AdminOverview {} },
                    AdminTab::Users => rsx! { users::AdminUsers {} },
                    AdminTab::Classes => rsx! { classes::AdminClasses {} },
                    AdminTab::Calendar => rsx! { calendar::AdminCalendar {} },
                    AdminTab::Videos => rsx! { videos::AdminVideos {} },
                    AdminTab::Billing => rsx! { billing::AdminBilling {} },
                }
            }
        }
    }
}
