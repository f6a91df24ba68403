//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each module owns one concern and exposes a small `Copy`/`Clone` handle
//! that `App` provides through Leptos context.

pub mod notices;
pub mod redirect;
pub mod session;
