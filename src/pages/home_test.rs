use super::*;

use crate::config::DEFAULT_CITY;

#[test]
fn unfiltered_feed_lists_every_event_in_date_order() {
    let events = filtered_events(&DiscoveryState::default());
    assert_eq!(events.len(), catalog::events().len());
    assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn city_filter_limits_events_and_venues() {
    let filters = DiscoveryState::with_city("Houston");
    assert!(filtered_events(&filters).iter().all(|e| e.city == "Houston"));
    assert!(filtered_venues(&filters).iter().all(|v| v.city == "Houston"));
}

#[test]
fn category_filter_limits_events() {
    let mut filters = DiscoveryState::default();
    filters.toggle_category(EventCategory::Blitz);
    let events = filtered_events(&filters);
    assert!(!events.is_empty());
    assert!(events.iter().all(|e| e.category == EventCategory::Blitz));
}

#[test]
fn open_tournaments_only_lists_registration_open() {
    let all = open_tournaments(&DiscoveryState::with_city(DEFAULT_CITY));
    assert!(!all.is_empty());
    assert!(all.iter().all(|t| t.status == TournamentStatus::RegistrationOpen));
}

#[test]
fn nonsense_query_empties_the_feed() {
    let mut filters = DiscoveryState::default();
    filters.set_query("zzzz-no-such-event".into());
    assert!(filtered_events(&filters).is_empty());
    assert!(filtered_venues(&filters).is_empty());
}
