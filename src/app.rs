//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{app_header::AppHeader, sidebar::Sidebar, toasts::Toasts};
use crate::config::ClientConfig;
use crate::nav::guard::{Protected, RedirectListener, RouteGuard};
use crate::net::gateway::ApiClient;
use crate::net::transport::FetchTransport;
use crate::pages::{
    categories::CategoriesPage,
    home::HomePage,
    login::LoginPage,
    not_found::NotFoundPage,
    profile::ProfilePage,
    resources::{
        BooksPage, BorrowsPage, FavoritesPage, NotificationsPage, ReservationsPage, ReviewsPage, UsersPage,
    },
    settings::SettingsPage,
    statistics::StatisticsPage,
};
use crate::state::{
    notices::Notices,
    redirect::Redirector,
    session::{LocalStorage, SessionStore},
};

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

/// Root application component.
///
/// Provides the session, notice queue, redirect slot and API client as
/// contexts, then mounts the guarded router. Every route but `/login` sits
/// behind `Protected`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = SessionStore::new(Arc::new(LocalStorage::new(config.storage_key.clone())));
    let notices = Notices::new();
    let redirect = Redirector::default();
    let client = ApiClient::new(FetchTransport, &config, session.clone(), notices, redirect);

    // Effects only run in the browser, so the server render stays logged out
    // and the guard holds until storage has been read.
    Effect::new({
        let session = session.clone();
        move || session.restore()
    });

    provide_context(config);
    provide_context(session.clone());
    provide_context(notices);
    provide_context(redirect);
    provide_context(client);

    view! {
        <Stylesheet id="leptos" href="/pkg/library-console.css"/>
        <Title text="Library Console"/>

        <Router>
            <RouteGuard/>
            <RedirectListener/>
            <div class="layout">
                <Show when={
                    let session = session.clone();
                    move || session.is_authenticated()
                }>
                    <Sidebar/>
                </Show>
                <main class="layout__main">
                    <Show when={
                        let session = session.clone();
                        move || session.is_authenticated()
                    }>
                        <AppHeader/>
                    </Show>
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("") view=|| view! { <Protected><HomePage/></Protected> }/>
                        <Route path=StaticSegment("users") view=|| view! { <Protected><UsersPage/></Protected> }/>
                        <Route path=StaticSegment("books") view=|| view! { <Protected><BooksPage/></Protected> }/>
                        <Route
                            path=StaticSegment("categories")
                            view=|| view! { <Protected><CategoriesPage/></Protected> }
                        />
                        <Route path=StaticSegment("borrows") view=|| view! { <Protected><BorrowsPage/></Protected> }/>
                        <Route
                            path=StaticSegment("reservations")
                            view=|| view! { <Protected><ReservationsPage/></Protected> }
                        />
                        <Route path=StaticSegment("reviews") view=|| view! { <Protected><ReviewsPage/></Protected> }/>
                        <Route
                            path=StaticSegment("favorites")
                            view=|| view! { <Protected><FavoritesPage/></Protected> }
                        />
                        <Route
                            path=StaticSegment("notifications")
                            view=|| view! { <Protected><NotificationsPage/></Protected> }
                        />
                        <Route
                            path=StaticSegment("statistics")
                            view=|| view! { <Protected><StatisticsPage/></Protected> }
                        />
                        <Route
                            path=(StaticSegment("other"), StaticSegment("settings"))
                            view=|| view! { <Protected><SettingsPage/></Protected> }
                        />
                        <Route
                            path=(StaticSegment("other"), StaticSegment("profile"))
                            view=|| view! { <Protected><ProfilePage/></Protected> }
                        />
                    </Routes>
                </main>
            </div>
            <Toasts/>
        </Router>
    }
}
