//! Utility helpers shared across console pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns and pure table logic from page
//! components so both can be tested without a DOM.

pub mod category_tree;
pub mod filter;
pub mod pager;
pub mod storage;
