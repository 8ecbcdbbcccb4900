//! Static navbar lookup table: menu key to target path.
//!
//! Keys are matched exactly. The mixed casing (`menu_dashboard` next to
//! `MEMBERS`) is historical and carries no meaning.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use super::paths::RoutePaths;

/// Target of a navbar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarPath {
    pub path: &'static str,
}

pub const MENU_DASHBOARD: &str = "menu_dashboard";
pub const MEMBERS: &str = "MEMBERS";
pub const EVENTS: &str = "EVENTS";
pub const DONATIONS: &str = "DONATIONS";
pub const REPORTS: &str = "REPORTS";
pub const SETTINGS: &str = "SETTINGS";

const NAVBAR_ROUTES: &[(&str, NavbarPath)] = &[
    (MENU_DASHBOARD, NavbarPath { path: RoutePaths::DASHBOARD }),
    (MEMBERS, NavbarPath { path: RoutePaths::MEMBERS }),
    (EVENTS, NavbarPath { path: RoutePaths::EVENTS }),
    (DONATIONS, NavbarPath { path: RoutePaths::DONATIONS }),
    (REPORTS, NavbarPath { path: RoutePaths::REPORTS }),
    (SETTINGS, NavbarPath { path: RoutePaths::SETTINGS }),
];

/// Look up the navbar entry for `key`. Returns `None` for unknown keys.
#[must_use]
pub fn navbar_route(key: &str) -> Option<&'static NavbarPath> {
    NAVBAR_ROUTES.iter().find(|(k, _)| *k == key).map(|(_, route)| route)
}

/// Path string for `key`, if the key is known.
#[must_use]
pub fn navbar_path(key: &str) -> Option<&'static str> {
    navbar_route(key).map(|route| route.path)
}

/// All table keys in declaration order.
pub fn navbar_route_keys() -> impl Iterator<Item = &'static str> {
    NAVBAR_ROUTES.iter().map(|(k, _)| *k)
}
