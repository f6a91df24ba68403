//! Navigation requests raised outside the router.
//!
//! The request gateway lives above the `<Router>` and cannot call
//! `use_navigate` itself, so it parks the target path here. The
//! `RedirectListener` component inside the router performs the navigation
//! and clears the slot.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Redirector {
    pending: RwSignal<Option<String>>,
}

impl Default for Redirector {
    fn default() -> Self {
        Self::new()
    }
}

impl Redirector {
    pub fn new() -> Self {
        Self { pending: RwSignal::new(None) }
    }

    /// Ask the router to move to `path`. A later request replaces an earlier one.
    pub fn request(&self, path: impl Into<String>) {
        self.pending.set(Some(path.into()));
    }

    /// Tracked read of the pending target.
    pub fn pending(&self) -> Option<String> {
        self.pending.get()
    }

    pub fn pending_untracked(&self) -> Option<String> {
        self.pending.get_untracked()
    }

    /// Take the pending target, leaving the slot empty.
    pub fn take(&self) -> Option<String> {
        let mut taken = None;
        self.pending.update(|p| taken = p.take());
        taken
    }
}
