use super::*;

#[test]
fn root_link_matches_only_root() {
    assert!(is_active("/", "/"));
    assert!(is_active("", "/"));
    assert!(!is_active("/venues", "/"));
}

#[test]
fn section_link_matches_itself_and_children() {
    assert!(is_active("/venues", "/venues"));
    assert!(is_active("/venues/", "/venues"));
    assert!(is_active("/venues/v-1", "/venues"));
    assert!(is_active("/leagues/leaderboard/l-1", "/leagues"));
}

#[test]
fn section_link_respects_segment_boundaries() {
    assert!(!is_active("/tournaments-archive", "/tournaments"));
    assert!(!is_active("/tournament/t-1", "/tournaments"));
}

#[test]
fn query_and_fragment_are_ignored() {
    assert!(is_active("/partner?tab=invites", "/partner"));
    assert!(is_active("/tournament/t-1#pairings", "/tournament/t-1"));
}

#[test]
fn go_back_is_callable_outside_browser() {
    go_back();
}
