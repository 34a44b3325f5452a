use dioxus::prelude::*;
use shared_types::{User, UserRole};

/// What we know about the browser session right now.
///
/// `Checking` covers the window between first render and the cookie check
/// coming back, so pages can show a placeholder instead of flashing the
/// logged-out view.
#[derive(Clone, Debug, PartialEq)]
pub enum Session {
    Checking,
    Anonymous,
    Authenticated(User),
}

/// Global session state, provided once at the app root.
#[derive(Clone, Copy)]
pub struct SessionState {
    pub current: Signal<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(Session::Checking),
        }
    }

    pub fn user(&self) -> Option<User> {
        match &*self.current.read() {
            Session::Authenticated(user) => Some(user.clone()),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user().map(|u| u.role)
    }

    pub fn is_checking(&self) -> bool {
        matches!(&*self.current.read(), Session::Checking)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(&*self.current.read(), Session::Authenticated(_))
    }

    pub fn set_user(&mut self, user: User) {
        self.current.set(Session::Authenticated(user));
    }

    pub fn clear(&mut self) {
        self.current.set(Session::Anonymous);
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// End the server session, drop local state, and go back to the landing page.
pub async fn logout(mut session: SessionState) {
    if let Err(err) = api_client::auth::logout().await {
        tracing::warn!("logout request failed: {}", err);
    }
    session.clear();
    navigator().push(crate::routes::Route::Landing {});
}
