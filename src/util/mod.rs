//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers, history, DOM attributes)
//! and pure formatting from page and component logic.

pub mod class_merge;
pub mod dark_mode;
pub mod format;
pub mod nav;
pub mod simulate;
pub mod validate;
