//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the layout shell, catalog cards and the wizard and tab
//! controls. They read shared state from Leptos context or take signals as
//! props; none of them own route-level data.

pub mod app_layout;
pub mod club_card;
pub mod event_card;
pub mod step_progress;
pub mod tab_bar;
pub mod tournament_card;
pub mod venue_card;
pub mod wizard_field;
pub mod wizard_footer;
