//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and shared widgets while reading shared
//! state from Leptos context providers.

pub mod app_header;
pub mod confirm_dialog;
pub mod pager_bar;
pub mod sidebar;
pub mod toasts;
