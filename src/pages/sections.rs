//! Top-level section pages reachable from the navbar.

use leptos::prelude::*;

use crate::components::refresh_button::RefreshButton;

/// Page frame with a title row and refresh control.
#[component]
fn SectionPage(title: &'static str, summary: &'static str) -> impl IntoView {
    view! {
        <section class="section-page">
            <header class="section-page__header">
                <h1>{title}</h1>
                <RefreshButton/>
            </header>
            <p class="section-page__summary">{summary}</p>
        </section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <SectionPage title="Dashboard" summary="Overview of membership activity."/> }
}

#[component]
pub fn MembersPage() -> impl IntoView {
    view! { <SectionPage title="Members" summary="Member directory and renewals."/> }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    view! { <SectionPage title="Events" summary="Upcoming and past events."/> }
}

#[component]
pub fn DonationsPage() -> impl IntoView {
    view! { <SectionPage title="Donations" summary="Donation records and campaigns."/> }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! { <SectionPage title="Reports" summary="Membership and finance reports."/> }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! { <SectionPage title="Settings" summary="Organization and account settings."/> }
}
