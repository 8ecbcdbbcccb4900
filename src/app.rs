//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::nav::RoutePaths;
use crate::pages::change_password::ChangePasswordPage;
use crate::pages::sections::{DashboardPage, DonationsPage, EventsPage, MembersPage, ReportsPage, SettingsPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component: navbar plus the routed content area.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/members-client.css"/>
        <Title text="Members"/>

        <Router>
            <div class="app-shell">
                <Navbar/>
                <main class="app-shell__content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path=RoutePaths::DASHBOARD/> }/>
                        <Route path=StaticSegment(RoutePaths::segment(RoutePaths::DASHBOARD)) view=DashboardPage/>
                        <Route path=StaticSegment(RoutePaths::segment(RoutePaths::MEMBERS)) view=MembersPage/>
                        <Route path=StaticSegment(RoutePaths::segment(RoutePaths::EVENTS)) view=EventsPage/>
                        <Route path=StaticSegment(RoutePaths::segment(RoutePaths::DONATIONS)) view=DonationsPage/>
                        <Route path=StaticSegment(RoutePaths::segment(RoutePaths::REPORTS)) view=ReportsPage/>
                        <Route path=StaticSegment(RoutePaths::segment(RoutePaths::SETTINGS)) view=SettingsPage/>
                        <Route
                            path=StaticSegment(RoutePaths::segment(RoutePaths::CHANGE_PASSWORD))
                            view=ChangePasswordPage
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
