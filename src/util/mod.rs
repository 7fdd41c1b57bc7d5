//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, the theme
//! attribute, the clipboard, page scroll) from component logic so the rest of
//! the crate can be exercised natively.

pub mod clipboard;
pub mod dom;
pub mod storage;
pub mod theme;
