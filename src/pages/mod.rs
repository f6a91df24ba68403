//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. List screens share `resource::resource_page`.

mod book_form;
pub mod categories;
mod category_form;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
mod resource;
pub mod resources;
pub mod settings;
pub mod statistics;
