//! Route guard
//!
//! Maps (route, session status) to what the router should do. Pure; the UI
//! calls it on every navigation and on every session change.

use std::borrow::Cow;

use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use super::models::ProjectId;
use super::session::SessionStatus;

/// Which form the auth page opens on
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
    ForgotPassword,
    /// Reset form, with the token from the emailed link
    ResetPassword { token: Option<String> },
}

impl AuthTab {
    /// Read the `tab` (and for resets `token`) query parameters. Values are
    /// percent-decoded.
    pub fn from_query(query: &str) -> Self {
        let mut tab = None;
        let mut token = None;
        for pair in query.trim_start_matches('?').split('&') {
            match pair.split_once('=') {
                Some(("tab", value)) => tab = Some(decode(value)),
                Some(("token", value)) => token = Some(decode(value).into_owned()),
                _ => {}
            }
        }
        Self::from_params(tab.as_deref(), token)
    }

    pub fn from_params(tab: Option<&str>, token: Option<String>) -> Self {
        let token = token.filter(|t| !t.is_empty());
        match tab {
            Some("register") => AuthTab::Register,
            Some("forgot") => AuthTab::ForgotPassword,
            Some("reset") => AuthTab::ResetPassword { token },
            // A bare reset link carries only the token.
            None if token.is_some() => AuthTab::ResetPassword { token },
            _ => AuthTab::Login,
        }
    }

    pub fn query(&self) -> String {
        match self {
            AuthTab::Login => "?tab=login".to_string(),
            AuthTab::Register => "?tab=register".to_string(),
            AuthTab::ForgotPassword => "?tab=forgot".to_string(),
            AuthTab::ResetPassword { token: Some(token) } => {
                format!("?tab=reset&token={}", utf8_percent_encode(token, NON_ALPHANUMERIC))
            }
            AuthTab::ResetPassword { token: None } => "?tab=reset".to_string(),
        }
    }
}

fn decode(value: &str) -> Cow<'_, str> {
    percent_decode_str(value).decode_utf8_lossy()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Auth(AuthTab),
    Dashboard,
    Project(ProjectId),
    Unknown,
}

impl Route {
    /// Parse a location path (optionally with a query string)
    pub fn parse(location: &str) -> Self {
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["auth"] => Route::Auth(AuthTab::from_query(query)),
            ["dashboard"] => Route::Dashboard,
            ["projects", id] => id.parse().map(Route::Project).unwrap_or(Route::Unknown),
            _ => Route::Unknown,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home | Route::Unknown => "/".to_string(),
            Route::Auth(AuthTab::Login) => "/auth".to_string(),
            Route::Auth(tab) => format!("/auth{}", tab.query()),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Project(id) => format!("/projects/{}", id),
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Project(_))
    }
}

/// What the router should do for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet
    Loading,
    Render,
    RedirectToLogin,
    RedirectToDashboard,
    RedirectToHome,
}

impl GuardDecision {
    /// Target path for redirects
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GuardDecision::RedirectToLogin => Some("/auth"),
            GuardDecision::RedirectToDashboard => Some("/dashboard"),
            GuardDecision::RedirectToHome => Some("/"),
            GuardDecision::Loading | GuardDecision::Render => None,
        }
    }
}

/// While the session is initializing nothing renders, whatever the route.
/// Protected routes need an authenticated session; the landing and auth
/// routes send signed-in users to the dashboard; unknown routes go home.
pub fn decide(route: &Route, status: SessionStatus) -> GuardDecision {
    if status == SessionStatus::Initializing {
        return GuardDecision::Loading;
    }
    let authenticated = status == SessionStatus::Authenticated;
    match route {
        Route::Unknown => GuardDecision::RedirectToHome,
        route if route.is_protected() => {
            if authenticated {
                GuardDecision::Render
            } else {
                GuardDecision::RedirectToLogin
            }
        }
        Route::Home | Route::Auth(_) if authenticated => GuardDecision::RedirectToDashboard,
        _ => GuardDecision::Render,
    }
}
