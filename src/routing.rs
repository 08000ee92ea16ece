//! Navigation guard policy.
//!
//! DESIGN
//! ======
//! A stateless function from (session, current route) to the required
//! redirect, re-evaluated after every transition. The target is computed
//! from the *resulting* session, never from the action that produced it,
//! and applying the guard to its own output is a no-op.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use crate::state::session::Session;

/// Routes known to the navigation policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Tenant selection screen; the only route reachable without one.
    SelectInstitute,
    Signup,
    Login,
    Home,
    /// Authenticated interior page.
    Dashboard,
}

impl Route {
    #[must_use]
    pub fn requires_institute(self) -> bool {
        !matches!(self, Self::SelectInstitute)
    }

    #[must_use]
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Home | Self::Dashboard)
    }

    /// URL path as served by the embedding application.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::SelectInstitute => "/select-institute",
            Self::Signup => "/signup",
            Self::Login => "/login",
            Self::Home => "/",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// A required navigation, optionally remembering the originally intended
/// target so the selection screen can send the user back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    pub return_to: Option<Route>,
}

impl Redirect {
    #[must_use]
    pub fn to(to: Route) -> Self {
        Self { to, return_to: None }
    }
}

/// Compute the redirect required by the session on `current`, if any.
#[must_use]
pub fn guard(session: &Session, current: Route) -> Option<Redirect> {
    if session.selected_institute.is_none() && current.requires_institute() {
        return Some(Redirect {
            to: Route::SelectInstitute,
            return_to: Some(current),
        });
    }
    if !session.is_auth && current.requires_auth() {
        return Some(Redirect::to(Route::Login));
    }
    if session.is_auth && matches!(current, Route::Login | Route::Signup) {
        return Some(Redirect::to(Route::Home));
    }
    None
}
