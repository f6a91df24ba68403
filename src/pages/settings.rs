//! Account settings: password change.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use super::login::MIN_PASSWORD_LEN;
use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::PasswordChange;

pub(crate) fn validate_password_change(old: &str, new: &str, confirm: &str) -> Result<PasswordChange, &'static str> {
    if old.is_empty() || new.is_empty() {
        return Err("Enter the current and the new password.");
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if new != confirm {
        return Err("Passwords do not match.");
    }
    if new == old {
        return Err("The new password must differ from the current one.");
    }
    Ok(PasswordChange { old_password: old.to_owned(), new_password: new.to_owned() })
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let change = match validate_password_change(
            &old_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(change) => change,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());
        let client = client.clone();
        leptos::task::spawn_local(async move {
            if api::change_password(&client, &change).await.is_ok() {
                client.notices().success("Password updated.");
                old_password.set(String::new());
                new_password.set(String::new());
                confirm.set(String::new());
            }
            busy.set(false);
        });
    };

    view! {
        <section class="form-page">
            <h2 class="form-page__title">"Change password"</h2>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    <span>"Current password"</span>
                    <input
                        type="password"
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"New password"</span>
                    <input
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"Confirm new password"</span>
                    <input
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Update password"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
