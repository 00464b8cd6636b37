//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state (wizard, tab selection, simulated
//! actions) and delegates rendering details to `components`. Wizard flows are
//! declared next to the page that runs them.

pub mod club_detail;
pub mod clubs;
pub mod home;
pub mod leaderboard;
pub mod leagues;
pub mod login;
pub mod match_report;
pub mod not_found;
pub mod partner_dashboard;
pub mod profile;
pub mod register;
pub mod sponsor_add;
pub mod sponsor_detail;
pub mod tournament_detail;
pub mod tournament_register;
pub mod tournaments;
pub mod venue_detail;
pub mod venues;
