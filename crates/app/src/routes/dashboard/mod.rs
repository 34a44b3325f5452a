pub mod admin;
pub mod student;
pub mod teacher;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCalendar;
use dioxus_free_icons::Icon;
use shared_types::{User, UserRole};
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant, Skeleton};

use crate::routes::Route;
use crate::session::{self, use_session, Session};

/// Read a list resource: `None` while in flight, empty list on failure so
/// the owning card renders its empty state. Failures are already logged
/// where the fetch settles, not here in the render path.
pub fn loaded<T: Clone>(res: Resource<api_client::ApiResult<Vec<T>>>) -> Option<Vec<T>> {
    match &*res.read() {
        Some(Ok(items)) => Some(items.clone()),
        Some(Err(_)) => Some(Vec::new()),
        None => None,
    }
}

fn settle<T>(
    what: &'static str,
    result: api_client::ApiResult<Vec<T>>,
) -> api_client::ApiResult<Vec<T>> {
    if let Err(err) = &result {
        tracing::error!("{what} fetch failed: {err}");
    }
    result
}

/// Await a collection fetch, logging a failure once when it settles.
pub async fn fetch_list<T>(
    what: &'static str,
    fut: impl std::future::Future<Output = api_client::ApiResult<Vec<T>>>,
) -> api_client::ApiResult<Vec<T>> {
    settle(what, fut.await)
}

/// Role-dispatching dashboard. Waits out the session check, bounces
/// anonymous visitors to the landing page.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let state = session.current.read().clone();

    match state {
        Session::Checking => rsx! {
            div { class: "page-loading",
                Skeleton { style: "height: 3rem; width: 18rem;" }
            }
        },
        Session::Anonymous => {
            navigator().replace(Route::Landing {});
            rsx! {
                div { class: "page-loading",
                    p { "Redirecting..." }
                }
            }
        }
        Session::Authenticated(user) => rsx! {
            DashboardFrame { user }
        },
    }
}

/// Top navbar plus the role-specific body.
#[component]
fn DashboardFrame(user: User) -> Element {
    let session = use_session();
    let role = user.role;

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-navbar",
                span { class: "dashboard-brand", "ClassHub" }
                nav { class: "dashboard-nav-links",
                    Link { class: "dashboard-nav-link", to: Route::Schedule {},
                        Icon { icon: LdCalendar, width: 16, height: 16 }
                        "Schedule"
                    }
                }
                div { class: "dashboard-user",
                    if let Some(picture) = user.picture.clone() {
                        img { class: "dashboard-avatar", src: "{picture}", alt: "{user.name}" }
                    }
                    span { class: "dashboard-username", "{user.name}" }
                    Badge { variant: BadgeVariant::Outline, {role.label()} }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            spawn(async move { session::logout(session).await });
                        },
                        "Log out"
                    }
                }
            }
            main { class: "dashboard-body",
                match role {
                    UserRole::Admin => rsx! { admin::AdminDashboard {} },
                    UserRole::Teacher => rsx! { teacher::TeacherDashboard { user: user.clone() } },
                    UserRole::Student => rsx! { student::StudentDashboard { user: user.clone() } },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::settle;
    use api_client::{ApiError, ApiResult};

    #[test]
    fn settle_passes_results_through_unchanged() {
        let ok: ApiResult<Vec<u8>> = settle("things", Ok(vec![1, 2]));
        assert_eq!(ok.unwrap(), vec![1, 2]);

        let err: ApiResult<Vec<u8>> = settle(
            "things",
            Err(ApiError::Status {
                status: 500,
                detail: "boom".to_string(),
            }),
        );
        assert!(err.is_err());
    }
}
