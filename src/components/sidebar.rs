//! Left navigation menu.
//!
//! Admin-only entries are hidden for other roles. Hiding is the only role
//! enforcement on the client; the guard lets any signed-in operator through.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::nav::routes::{MenuEntry, visible_menu};
use crate::state::session::SessionStore;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let main_session = session.clone();

    let main_entries = move || {
        visible_menu(main_session.is_admin())
            .into_iter()
            .filter(|e| e.section.is_none())
            .collect::<Vec<_>>()
    };
    let other_entries = move || {
        visible_menu(session.is_admin())
            .into_iter()
            .filter(|e| e.section.is_some())
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Library Console"</div>
            <ul class="sidebar__menu">{move || main_entries().into_iter().map(menu_item).collect_view()}</ul>
            <p class="sidebar__section">"Other"</p>
            <ul class="sidebar__menu">{move || other_entries().into_iter().map(menu_item).collect_view()}</ul>
        </nav>
    }
}

fn menu_item(entry: MenuEntry) -> impl IntoView {
    view! {
        <li class="sidebar__item">
            <A href=entry.path>{entry.title}</A>
        </li>
    }
}
