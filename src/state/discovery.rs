//! Discovery filters shared by the home feed and list pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lives for the whole session so a filter chosen on the home page still
//! applies after visiting a venue and coming back.

#[cfg(test)]
#[path = "discovery_test.rs"]
mod discovery_test;

use crate::config::DEFAULT_CITY;
use crate::mock::types::{Event, EventCategory, Venue};

/// Search text, city and category filters for discovery lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryState {
    pub query: String,
    /// Selected city, or [`DEFAULT_CITY`] for no city filter.
    pub city: String,
    pub category: Option<EventCategory>,
}

impl Default for DiscoveryState {
    fn default() -> Self {
        Self::with_city(DEFAULT_CITY)
    }
}

impl DiscoveryState {
    pub fn with_city(city: &str) -> Self {
        Self { query: String::new(), city: city.to_owned(), category: None }
    }

    pub fn is_filtered(&self) -> bool {
        !self.query.trim().is_empty() || self.city != DEFAULT_CITY || self.category.is_some()
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn set_city(&mut self, city: String) {
        self.city = city;
    }

    /// Select `category`, or clear it when it is already selected.
    pub fn toggle_category(&mut self, category: EventCategory) {
        self.category = if self.category == Some(category) { None } else { Some(category) };
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.city = DEFAULT_CITY.to_owned();
        self.category = None;
    }

    fn city_matches(&self, city: &str) -> bool {
        self.city == DEFAULT_CITY || self.city.eq_ignore_ascii_case(city)
    }

    fn query_matches(&self, haystacks: &[&str]) -> bool {
        let needle = self.query.trim().to_lowercase();
        needle.is_empty() || haystacks.iter().any(|h| h.to_lowercase().contains(&needle))
    }

    pub fn matches_event(&self, event: &Event) -> bool {
        self.city_matches(&event.city)
            && self.category.map_or(true, |c| c == event.category)
            && self.query_matches(&[event.title.as_str(), event.host.as_str()])
    }

    pub fn matches_venue(&self, venue: &Venue) -> bool {
        self.city_matches(&venue.city) && self.query_matches(&[venue.name.as_str(), venue.address.as_str()])
    }
}

/// Cities offered in the filter, with the no-filter entry first.
pub fn city_options(venues: &[Venue]) -> Vec<String> {
    let mut cities: Vec<String> = venues.iter().map(|v| v.city.clone()).collect();
    cities.sort();
    cities.dedup();
    cities.insert(0, DEFAULT_CITY.to_owned());
    cities
}
