//! Change-password page: form, live requirement checklist, submit status.

use leptos::prelude::*;

use crate::password::default_requirements;
use crate::state::password::{ChangePasswordForm, SubmitState};

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let form = RwSignal::new(ChangePasswordForm::default());
    let errors = RwSignal::new(Vec::<String>::new());
    let submit_state = RwSignal::new(SubmitState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submit_state.with(SubmitState::is_busy) {
            return;
        }
        let payload = match form.with(|f| f.validate(default_requirements())) {
            Ok(payload) => payload,
            Err(e) => {
                errors.set(e.messages());
                return;
            }
        };
        errors.set(Vec::new());
        submit_state.set(SubmitState::Submitting);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let next = SubmitState::from_outcome(crate::net::api::change_password(&payload).await);
            if matches!(next, SubmitState::Succeeded(_)) {
                log::info!("password changed");
                form.update(|f| {
                    f.password.clear();
                    f.new_password.clear();
                    f.confirm_password.clear();
                });
            }
            submit_state.set(next);
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let checklist = default_requirements()
        .iter()
        .map(|requirement| {
            let met = move || form.with(|f| requirement.check(&f.new_password).is_none());
            view! {
                <li class="requirements__item" class:requirements__item--met=met>
                    {requirement.message.clone()}
                </li>
            }
        })
        .collect::<Vec<_>>();

    let status = move || match submit_state.get() {
        SubmitState::Idle => None,
        SubmitState::Submitting => Some(view! { <p class="form-status">"Updating password..."</p> }.into_any()),
        SubmitState::Succeeded(msg) => {
            Some(view! { <p class="form-status form-status--success">{msg}</p> }.into_any())
        }
        SubmitState::Failed(msg) => Some(view! { <p class="form-status form-status--error">{msg}</p> }.into_any()),
    };

    view! {
        <section class="change-password-page">
            <h1>"Change Password"</h1>
            <form class="change-password-form" on:submit=on_submit>
                <label class="form-field">
                    "Email"
                    <input
                        type="email"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Current password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "New password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.new_password.clone())
                        on:input=move |ev| form.update(|f| f.new_password = event_target_value(&ev))
                    />
                </label>
                <ul class="requirements">{checklist}</ul>
                <label class="form-field">
                    "Confirm new password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                </label>
                <Show when=move || !errors.with(Vec::is_empty)>
                    <ul class="form-errors">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect::<Vec<_>>()}
                    </ul>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || submit_state.with(SubmitState::is_busy)>
                    "Change password"
                </button>
            </form>
            {status}
        </section>
    }
}
