use super::*;

#[test]
fn default_city_lists_every_club_largest_first() {
    let clubs = clubs_in(DEFAULT_CITY);
    assert_eq!(clubs.len(), catalog::clubs().len());
    assert!(clubs.windows(2).all(|w| w[0].member_ids.len() >= w[1].member_ids.len()));
}

#[test]
fn city_match_is_case_insensitive() {
    let clubs = clubs_in("austin");
    assert!(!clubs.is_empty());
    assert!(clubs.iter().all(|c| c.city == "Austin"));
}

#[test]
fn unknown_city_is_empty() {
    assert!(clubs_in("Reykjavik").is_empty());
}
