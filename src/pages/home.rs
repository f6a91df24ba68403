//! Authenticated landing page.

use leptos::prelude::*;

use super::statistics::StatCards;
use crate::state::session::SessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let greeting = {
        let session = session.clone();
        move || {
            session
                .state()
                .user
                .map(|user| format!("Welcome back, {}.", user.display_name()))
                .unwrap_or_else(|| "Welcome.".to_owned())
        }
    };

    view! {
        <section class="home-page">
            <h2 class="home-page__greeting">{greeting}</h2>
            <p class="home-page__hint">"Use the menu on the left to manage the library catalogue and its readers."</p>
            <Show when=move || session.is_admin()>
                <StatCards/>
            </Show>
        </section>
    }
}
