//! Transient user notifications (toasts).
//!
//! The request gateway pushes one notice per classified failure; pages push
//! success notices after mutations. The `Toasts` component renders and
//! expires them.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Warning => "toast--warning",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeQueue {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, level, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

/// Shared handle over the notice queue.
#[derive(Clone, Copy)]
pub struct Notices {
    queue: RwSignal<NoticeQueue>,
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

impl Notices {
    pub fn new() -> Self {
        Self { queue: RwSignal::new(NoticeQueue::default()) }
    }

    pub fn push(&self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let message = message.into();
        let mut id = 0;
        self.queue.update(|q| id = q.push(level, message));
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, message)
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    /// Tracked read for the toast list.
    pub fn items(&self) -> Vec<Notice> {
        self.queue.with(|q| q.items.clone())
    }

    pub fn items_untracked(&self) -> Vec<Notice> {
        self.queue.with_untracked(|q| q.items.clone())
    }
}
