//! Application URL paths shared by the router, the navbar, and redirects.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

/// Named path constants for every top-level page.
pub struct RoutePaths;

impl RoutePaths {
    pub const HOME: &'static str = "/";
    pub const DASHBOARD: &'static str = "/dashboard";
    pub const MEMBERS: &'static str = "/members";
    pub const EVENTS: &'static str = "/events";
    pub const DONATIONS: &'static str = "/donations";
    pub const REPORTS: &'static str = "/reports";
    pub const SETTINGS: &'static str = "/settings";
    pub const LOGIN: &'static str = "/login";
    pub const CHANGE_PASSWORD: &'static str = "/change-password";

    /// Strip the leading `/` for use as a router `StaticSegment`.
    #[must_use]
    pub fn segment(path: &'static str) -> &'static str {
        path.trim_start_matches('/')
    }

    /// Page a location actually shows: `/` is served as the dashboard.
    #[must_use]
    pub fn canonical(path: &str) -> &str {
        if path == Self::HOME { Self::DASHBOARD } else { path }
    }
}
