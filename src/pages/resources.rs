//! Route-level list screens, one per entity.

use leptos::prelude::*;

use super::book_form::book_editor;
use super::resource::resource_page;
use crate::net::types::{Book, BorrowRecord, Favorite, Notification, Reservation, Review, User};

#[component]
pub fn UsersPage() -> impl IntoView {
    resource_page::<User>(None)
}

#[component]
pub fn BooksPage() -> impl IntoView {
    resource_page::<Book>(Some(book_editor))
}

#[component]
pub fn BorrowsPage() -> impl IntoView {
    resource_page::<BorrowRecord>(None)
}

#[component]
pub fn ReservationsPage() -> impl IntoView {
    resource_page::<Reservation>(None)
}

#[component]
pub fn ReviewsPage() -> impl IntoView {
    resource_page::<Review>(None)
}

#[component]
pub fn FavoritesPage() -> impl IntoView {
    resource_page::<Favorite>(None)
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    resource_page::<Notification>(None)
}
