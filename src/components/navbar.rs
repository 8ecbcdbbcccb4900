//! Side navigation rendered from the navbar route tree.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::icons::Icon;
use crate::nav::RoutePaths;
use crate::nav::tree::{NavbarRoute, default_navbar};

/// Navbar listing every top-level route, with nested entries beneath groups.
///
/// The entry matching the current location (or containing it) gets the
/// `navbar__item--active` modifier. `/` highlights the dashboard entry.
#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;

    let items = default_navbar()
        .into_iter()
        .map(|route| nav_item(route, pathname))
        .collect::<Vec<_>>();

    view! {
        <nav class="navbar">
            <ul class="navbar__list">{items}</ul>
        </nav>
    }
}

fn nav_item(route: NavbarRoute, pathname: Memo<String>) -> AnyView {
    let children = route
        .sub_routes
        .iter()
        .cloned()
        .map(|child| nav_item(child, pathname))
        .collect::<Vec<_>>();
    let has_children = !children.is_empty();

    let NavbarRoute { title, icon, path, .. } = route.clone();
    let is_active = move || pathname.with(|p| route.is_active(RoutePaths::canonical(p)));

    view! {
        <li class="navbar__item" class:navbar__item--active=is_active class:navbar__item--group=has_children>
            <A href=path attr:class="navbar__link">
                <Icon kind=icon/>
                <span class="navbar__title">{title}</span>
            </A>
            {has_children.then(|| view! { <ul class="navbar__sub">{children}</ul> })}
        </li>
    }
    .into_any()
}
