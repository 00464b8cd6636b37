//! Typed hrefs for every route in the app.
//!
//! DESIGN
//! ======
//! Links and navigation calls build paths through [`AppRoute`] instead of
//! formatting strings in place, so the route table in `app` and the links
//! pointing into it cannot drift. Ids are opaque and passed through as-is.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

use crate::state::tabs::{TAB_QUERY_PARAM, TabSet};
use crate::util::nav::is_active;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Register,
    Profile,
    Venues,
    Venue { id: String },
    Clubs,
    Club { id: String },
    Tournaments,
    Tournament { id: String },
    TournamentRegister { id: String },
    SponsorAdd { tournament_id: String },
    Sponsor { tournament_id: String, sponsor_id: String },
    MatchReport { tournament_id: String, match_id: String },
    Leagues,
    Leaderboard { id: String },
    Partner,
}

impl AppRoute {
    pub fn href(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Profile => "/profile".to_owned(),
            Self::Venues => "/venues".to_owned(),
            Self::Venue { id } => format!("/venues/{id}"),
            Self::Clubs => "/clubs".to_owned(),
            Self::Club { id } => format!("/clubs/{id}"),
            Self::Tournaments => "/tournaments".to_owned(),
            Self::Tournament { id } => format!("/tournament/{id}"),
            Self::TournamentRegister { id } => format!("/tournament/{id}/register"),
            Self::SponsorAdd { tournament_id } => format!("/tournament/{tournament_id}/add-sponsor"),
            Self::Sponsor { tournament_id, sponsor_id } => {
                format!("/tournament/{tournament_id}/sponsors/{sponsor_id}")
            }
            Self::MatchReport { tournament_id, match_id } => {
                format!("/tournament/{tournament_id}/matches/{match_id}/report")
            }
            Self::Leagues => "/leagues".to_owned(),
            Self::Leaderboard { id } => format!("/leagues/leaderboard/{id}"),
            Self::Partner => "/partner".to_owned(),
        }
    }

    /// Href with `?tab=` set, or the bare href for the default tab.
    pub fn href_with_tab<T: TabSet>(&self, tab: T) -> String {
        if tab == T::default() {
            self.href()
        } else {
            format!("{}?{TAB_QUERY_PARAM}={}", self.href(), tab.key())
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Primary navigation entry in the layout shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: AppRoute,
    /// Extra section prefixes that also highlight this link.
    pub also_under: &'static [&'static str],
}

impl NavLink {
    fn new(label: &'static str, route: AppRoute) -> Self {
        Self { label, route, also_under: &[] }
    }

    /// Whether this link is highlighted at `current_path`.
    pub fn is_active_at(&self, current_path: &str) -> bool {
        is_active(current_path, &self.route.href())
            || self.also_under.iter().any(|prefix| is_active(current_path, prefix))
    }
}

/// Links shown in the top navigation, in display order.
pub fn primary_nav() -> Vec<NavLink> {
    vec![
        NavLink::new("Discover", AppRoute::Home),
        NavLink::new("Venues", AppRoute::Venues),
        NavLink::new("Clubs", AppRoute::Clubs),
        NavLink { also_under: &["/tournament"], ..NavLink::new("Tournaments", AppRoute::Tournaments) },
        NavLink::new("Leagues", AppRoute::Leagues),
        NavLink::new("Partners", AppRoute::Partner),
    ]
}
