//! Toast stack rendering the shared notice queue.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::notices::{Notice, Notices};

/// Fixed-position stack of live notices. Each expires after the configured TTL.
#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<Notices>();
    let ttl_ms = expect_context::<ClientConfig>().notice_ttl_ms;

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || notices.items()
                key=|notice| notice.id
                children=move |notice| view! { <Toast notice=notice ttl_ms=ttl_ms/> }
            />
        </div>
    }
}

#[component]
fn Toast(notice: Notice, ttl_ms: u32) -> impl IntoView {
    let notices = expect_context::<Notices>();
    let id = notice.id;

    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(ttl_ms, move || notices.dismiss(id)).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ttl_ms;
    }

    view! {
        <div class=format!("toast {}", notice.level.css_modifier())>
            <span class="toast__message">{notice.message}</span>
            <button class="toast__close" title="Dismiss" on:click=move |_| notices.dismiss(id)>
                "×"
            </button>
        </div>
    }
}
