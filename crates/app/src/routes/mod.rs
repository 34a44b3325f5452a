pub mod dashboard;
pub mod landing;
pub mod login;
pub mod register;
pub mod schedule;

use dioxus::prelude::*;

use dashboard::Dashboard;
use landing::Landing;
use login::Login;
use register::Register;
use schedule::Schedule;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/schedule")]
    Schedule {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Unknown paths land back on the home page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    navigator().replace(Route::Landing {});
    rsx! {
        div { class: "page-loading",
            p { "Redirecting..." }
        }
    }
}
