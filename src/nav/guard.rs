//! Pre-navigation authentication check.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated operators never see the login screen; anonymous visitors
//! see nothing else. Role is not consulted here: admin-only screens are only
//! hidden from the sidebar, and the backend remains the authority.
//!
//! Protected screens sit inside `Protected` and stay unmounted until the
//! session is restored and signed in.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::routes::{HOME_PATH, LOGIN_PATH, normalize};
use crate::state::redirect::Redirector;
use crate::state::session::{SessionState, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Redirect(&'static str),
}

/// Decide whether `path` may be shown for `session`.
pub fn decide(session: &SessionState, path: &str) -> NavigationDecision {
    let to_login = normalize(path) == LOGIN_PATH;
    match (session.is_authenticated(), to_login) {
        (true, true) => NavigationDecision::Redirect(HOME_PATH),
        (true, false) | (false, true) => NavigationDecision::Allow,
        (false, false) => NavigationDecision::Redirect(LOGIN_PATH),
    }
}

/// Like `decide`, but holds off until the session has been restored.
pub fn guard_redirect(session: &SessionState, path: &str) -> Option<&'static str> {
    if !session.restored {
        return None;
    }
    match decide(session, path) {
        NavigationDecision::Allow => None,
        NavigationDecision::Redirect(target) => Some(target),
    }
}

/// Whether protected screens may mount. No screen fetches before this holds.
pub fn content_ready(session: &SessionState) -> bool {
    session.restored && session.is_authenticated()
}

/// Mounts `children` only while `content_ready` holds.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();

    view! {
        <Show
            when=move || content_ready(&session.state())
            fallback=|| view! { <p class="layout__pending">"Loading..."</p> }
        >
            {children()}
        </Show>
    }
}

/// Re-evaluates the guard on every location or session change.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        let state = session.state();
        if let Some(target) = guard_redirect(&state, &path) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Performs navigations parked on the `Redirector` by code outside the router.
#[component]
pub fn RedirectListener() -> impl IntoView {
    let redirect = expect_context::<Redirector>();
    let navigate = use_navigate();

    Effect::new(move || {
        if redirect.pending().is_some() {
            if let Some(target) = redirect.take() {
                navigate(&target, NavigateOptions::default());
            }
        }
    });
}
