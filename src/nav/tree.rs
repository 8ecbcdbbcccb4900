//! Hierarchical navbar route tree.
//!
//! DESIGN
//! ======
//! Children are stored once, as an ordered list where every node carries its
//! own key. Keyed access (`child`, `find`) and positional access (`child_at`,
//! `sub_routes`) are both views over that list.

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

use serde::{Deserialize, Serialize};

use super::paths::RoutePaths;
use super::table::{self, navbar_path};
use crate::icons::IconKind;

/// Node discriminator: a plain link, or a group that expands into children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    #[default]
    Link,
    Group,
}

/// One navbar entry with zero or more nested entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarRoute {
    pub key: String,
    pub title: String,
    pub icon: IconKind,
    pub path: String,
    #[serde(rename = "type", default)]
    pub kind: RouteKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_routes: Vec<NavbarRoute>,
}

impl NavbarRoute {
    /// Leaf link node.
    pub fn link(key: impl Into<String>, title: impl Into<String>, icon: IconKind, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            icon,
            path: path.into(),
            kind: RouteKind::Link,
            sub_routes: Vec::new(),
        }
    }

    /// Group node; add children with [`NavbarRoute::with_child`].
    pub fn group(key: impl Into<String>, title: impl Into<String>, icon: IconKind, path: impl Into<String>) -> Self {
        Self { kind: RouteKind::Group, ..Self::link(key, title, icon, path) }
    }

    /// Append a child, replacing any existing child with the same key in place.
    #[must_use]
    pub fn with_child(mut self, child: NavbarRoute) -> Self {
        match self.sub_routes.iter_mut().find(|c| c.key == child.key) {
            Some(existing) => *existing = child,
            None => self.sub_routes.push(child),
        }
        self
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.sub_routes.is_empty()
    }

    /// Direct child by key.
    #[must_use]
    pub fn child(&self, key: &str) -> Option<&NavbarRoute> {
        self.sub_routes.iter().find(|c| c.key == key)
    }

    /// Direct child by position.
    #[must_use]
    pub fn child_at(&self, index: usize) -> Option<&NavbarRoute> {
        self.sub_routes.get(index)
    }

    /// Children as `(key, node)` pairs in order.
    pub fn keyed_children(&self) -> impl Iterator<Item = (&str, &NavbarRoute)> {
        self.sub_routes.iter().map(|c| (c.key.as_str(), c))
    }

    /// Descendant by `/`-separated key path relative to this node.
    #[must_use]
    pub fn find(&self, key_path: &str) -> Option<&NavbarRoute> {
        key_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// This node and all descendants, depth-first, parents before children.
    #[must_use]
    pub fn flatten(&self) -> Vec<&NavbarRoute> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a NavbarRoute>) {
        out.push(self);
        for child in &self.sub_routes {
            child.collect_into(out);
        }
    }

    /// True when `current_path` is this node's path, lies beneath it, or is
    /// active for any descendant.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        path_matches(&self.path, current_path) || self.sub_routes.iter().any(|c| c.is_active(current_path))
    }
}

fn path_matches(route_path: &str, current_path: &str) -> bool {
    if route_path == current_path {
        return true;
    }
    if route_path == "/" {
        return false;
    }
    current_path
        .strip_prefix(route_path)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Find a node by key path across a forest of top-level routes.
#[must_use]
pub fn find_route<'a>(routes: &'a [NavbarRoute], key_path: &str) -> Option<&'a NavbarRoute> {
    let (head, rest) = key_path.split_once('/').unwrap_or((key_path, ""));
    routes.iter().find(|r| r.key == head)?.find(rest)
}

const TOP_LEVEL: &[(&str, &str, IconKind)] = &[
    (table::MENU_DASHBOARD, "Dashboard", IconKind::Dashboard),
    (table::MEMBERS, "Members", IconKind::Members),
    (table::EVENTS, "Events", IconKind::Events),
    (table::DONATIONS, "Donations", IconKind::Donations),
    (table::REPORTS, "Reports", IconKind::Reports),
    (table::SETTINGS, "Settings", IconKind::Settings),
];

pub const CHANGE_PASSWORD_KEY: &str = "change_password";

/// The application's navbar, with paths resolved through the route table.
#[must_use]
pub fn default_navbar() -> Vec<NavbarRoute> {
    TOP_LEVEL
        .iter()
        .filter_map(|&(key, title, icon)| {
            let path = navbar_path(key)?;
            let node = if key == table::SETTINGS {
                NavbarRoute::group(key, title, icon, path).with_child(NavbarRoute::link(
                    CHANGE_PASSWORD_KEY,
                    "Change password",
                    IconKind::Refresh,
                    RoutePaths::CHANGE_PASSWORD,
                ))
            } else {
                NavbarRoute::link(key, title, icon, path)
            };
            Some(node)
        })
        .collect()
}
