//! Inline mock catalog rendered by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend. `catalog` plays the part of the API: lookups take the
//! opaque ids from route parameters and fall back to a featured record, so a
//! deep link with an unknown id still renders a complete page.

pub mod catalog;
pub mod types;
