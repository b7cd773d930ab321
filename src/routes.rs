//! Views and the session guard in front of them

use std::fmt;

use crate::session::SessionController;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Onboarding,
    Dashboard,
    Blog,
    Challenges,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Self::Home,
        Self::Login,
        Self::Onboarding,
        Self::Dashboard,
        Self::Blog,
        Self::Challenges,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Onboarding => "/onboarding",
            Self::Dashboard => "/dashboard",
            Self::Blog => "/blog",
            Self::Challenges => "/challenges",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Onboarding and the dashboard only make sense for a signed-in visitor
    pub fn requires_session(&self) -> bool {
        matches!(self, Self::Onboarding | Self::Dashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// What the guard decided for a requested route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

/// Render `route`, or send the visitor to the login page if it needs a session
pub fn guard(route: Route, session: &SessionController) -> RouteDecision {
    if route.requires_session() && !session.is_authenticated() {
        RouteDecision::Redirect(Route::Login)
    } else {
        RouteDecision::Render(route)
    }
}
