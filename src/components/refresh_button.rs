//! Button that reloads the current page, drawn with the refresh icon.

use leptos::prelude::*;

use crate::icons::RefreshIcon;

#[component]
pub fn RefreshButton() -> impl IntoView {
    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    };

    view! {
        <button class="refresh-button" type="button" title="Refresh" on:click=on_click>
            <RefreshIcon/>
        </button>
    }
}
