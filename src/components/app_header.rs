//! Top bar with the current screen title, operator name and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::nav::routes::{LOGIN_PATH, title_for};
use crate::net::api::sign_out;
use crate::net::gateway::ApiClient;

#[component]
pub fn AppHeader() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let session = client.session().clone();
    let location = use_location();
    let navigate = use_navigate();

    let title = move || title_for(&location.pathname.get()).unwrap_or("Library Console");
    let operator = move || {
        session
            .state()
            .user
            .map(|u| format!("{} ({})", u.display_name(), u.role.label()))
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        sign_out(&client);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="app-header">
            <h1 class="app-header__title">{title}</h1>
            <span class="app-header__spacer"></span>
            <span class="app-header__operator">{operator}</span>
            <button class="btn app-header__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </header>
    }
}
