use super::*;
use crate::mock::catalog;

fn event(city: &str, category: EventCategory, title: &str) -> Event {
    Event {
        id: "e-x".into(),
        title: title.into(),
        category,
        venue_id: "v-x".into(),
        city: city.into(),
        date: "2026-11-01".into(),
        start_time: "18:00".into(),
        spots_left: 4,
        host: "Test Club".into(),
    }
}

// =============================================================
// Defaults and setters
// =============================================================

#[test]
fn default_has_no_filters() {
    let state = DiscoveryState::default();
    assert_eq!(state.city, DEFAULT_CITY);
    assert!(state.query.is_empty());
    assert!(state.category.is_none());
    assert!(!state.is_filtered());
}

#[test]
fn toggle_category_selects_then_clears() {
    let mut state = DiscoveryState::default();
    state.toggle_category(EventCategory::Blitz);
    assert_eq!(state.category, Some(EventCategory::Blitz));
    state.toggle_category(EventCategory::Lesson);
    assert_eq!(state.category, Some(EventCategory::Lesson));
    state.toggle_category(EventCategory::Lesson);
    assert_eq!(state.category, None);
}

#[test]
fn clear_resets_everything() {
    let mut state = DiscoveryState::with_city("Austin");
    state.set_query("blitz".into());
    state.toggle_category(EventCategory::Blitz);
    assert!(state.is_filtered());
    state.clear();
    assert_eq!(state, DiscoveryState::default());
}

// =============================================================
// Matching
// =============================================================

#[test]
fn matches_event_by_city_category_and_query() {
    let blitz = event("Austin", EventCategory::Blitz, "Thursday Blitz Ladder");
    let mut state = DiscoveryState::default();
    assert!(state.matches_event(&blitz));

    state.set_city("austin".into());
    assert!(state.matches_event(&blitz));
    state.set_city("Dallas".into());
    assert!(!state.matches_event(&blitz));

    state.set_city(DEFAULT_CITY.into());
    state.toggle_category(EventCategory::Lesson);
    assert!(!state.matches_event(&blitz));

    state.toggle_category(EventCategory::Lesson);
    state.set_query("  LADDER ".into());
    assert!(state.matches_event(&blitz));
    state.set_query("test club".into());
    assert!(state.matches_event(&blitz));
    state.set_query("rapid".into());
    assert!(!state.matches_event(&blitz));
}

#[test]
fn matches_venue_by_name_or_address() {
    let venues = catalog::venues();
    let mut state = DiscoveryState::default();
    state.set_query("congress".into());
    let hits: Vec<_> = venues.iter().filter(|v| state.matches_venue(v)).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "v-1");
}

#[test]
fn city_options_are_sorted_unique_with_default_first() {
    let options = city_options(&catalog::venues());
    assert_eq!(options, vec![DEFAULT_CITY, "Austin", "Dallas", "Houston"]);
}
