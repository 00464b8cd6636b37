//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Page-scoped view state (`wizard`, `tabs`, `simulation`) is created on mount
//! and dropped with the page. `theme` and `discovery` are the only
//! process-wide models, provided once from `App` through context.

pub mod discovery;
pub mod simulation;
pub mod tabs;
pub mod theme;
pub mod wizard;
