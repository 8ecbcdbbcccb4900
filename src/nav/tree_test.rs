use super::*;

fn settings() -> NavbarRoute {
    NavbarRoute::group("SETTINGS", "Settings", IconKind::Settings, "/settings")
        .with_child(NavbarRoute::link("profile", "Profile", IconKind::Members, "/settings/profile"))
        .with_child(
            NavbarRoute::group("security", "Security", IconKind::Settings, "/settings/security")
                .with_child(NavbarRoute::link("password", "Password", IconKind::Refresh, "/settings/security/password")),
        )
}

// =============================================================
// Keyed and positional access
// =============================================================

#[test]
fn keyed_and_positional_access_agree() {
    let root = settings();
    for (index, (key, node)) in root.keyed_children().enumerate() {
        assert_eq!(root.child(key), Some(node));
        assert_eq!(root.child_at(index), Some(node));
    }
    assert_eq!(root.child_at(2), None);
    assert_eq!(root.child("missing"), None);
}

#[test]
fn with_child_replaces_same_key_in_place() {
    let root = settings().with_child(NavbarRoute::link("profile", "Account", IconKind::Members, "/account"));
    assert_eq!(root.sub_routes.len(), 2);
    assert_eq!(root.child_at(0).map(|c| c.title.as_str()), Some("Account"));
}

#[test]
fn link_and_group_kinds() {
    assert_eq!(NavbarRoute::link("a", "A", IconKind::Events, "/a").kind, RouteKind::Link);
    assert_eq!(settings().kind, RouteKind::Group);
    assert!(settings().has_children());
}

// =============================================================
// find / flatten / is_active
// =============================================================

#[test]
fn find_walks_key_path() {
    let root = settings();
    assert_eq!(root.find("security/password").map(|n| n.path.as_str()), Some("/settings/security/password"));
    assert_eq!(root.find(""), Some(&root));
    assert_eq!(root.find("security/missing"), None);
}

#[test]
fn flatten_is_depth_first_preorder() {
    let root = settings();
    let keys: Vec<_> = root.flatten().iter().map(|n| n.key.as_str()).collect();
    assert_eq!(keys, vec!["SETTINGS", "profile", "security", "password"]);
}

#[test]
fn is_active_matches_self_descendants_and_subpaths() {
    let root = settings();
    assert!(root.is_active("/settings"));
    assert!(root.is_active("/settings/security/password"));
    assert!(root.is_active("/settings/anything"));
    assert!(!root.is_active("/settingsx"));
    assert!(!root.is_active("/members"));
}

#[test]
fn root_path_only_matches_exactly() {
    let home = NavbarRoute::link("home", "Home", IconKind::Dashboard, "/");
    assert!(home.is_active("/"));
    assert!(!home.is_active("/members"));
}

// =============================================================
// default_navbar
// =============================================================

#[test]
fn default_navbar_resolves_paths_from_table() {
    let routes = default_navbar();
    assert_eq!(routes.len(), 6);
    for route in &routes {
        assert_eq!(navbar_path(&route.key), Some(route.path.as_str()));
    }
}

#[test]
fn landing_path_activates_dashboard_entry() {
    let active: Vec<_> = default_navbar()
        .into_iter()
        .filter(|r| r.is_active(RoutePaths::canonical(RoutePaths::HOME)))
        .map(|r| r.key)
        .collect();
    assert_eq!(active, vec![table::MENU_DASHBOARD.to_owned()]);
}

#[test]
fn default_navbar_nests_change_password_under_settings() {
    let routes = default_navbar();
    let node = find_route(&routes, "SETTINGS/change_password").unwrap();
    assert_eq!(node.path, RoutePaths::CHANGE_PASSWORD);
    assert_eq!(find_route(&routes, "EVENTS").map(|n| n.path.as_str()), Some("/events"));
    assert_eq!(find_route(&routes, "unknown_key"), None);
}

// =============================================================
// Serde shape
// =============================================================

#[test]
fn serializes_type_field_and_omits_empty_children() {
    let json = serde_json::to_value(NavbarRoute::link("EVENTS", "Events", IconKind::Events, "/events")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "key": "EVENTS",
            "title": "Events",
            "icon": "events",
            "path": "/events",
            "type": "link"
        })
    );
}

#[test]
fn deserializes_nested_sub_routes() {
    let node: NavbarRoute = serde_json::from_str(
        r#"{"key":"SETTINGS","title":"Settings","icon":"settings","path":"/settings","type":"group",
            "subRoutes":[{"key":"p","title":"P","icon":"refresh","path":"/p"}]}"#,
    )
    .unwrap();
    assert_eq!(node.kind, RouteKind::Group);
    assert_eq!(node.child("p").map(|c| c.kind), Some(RouteKind::Link));
}
