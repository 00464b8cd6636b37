use super::*;

#[test]
fn seeded_players_sorted_by_rating() {
    let players = seeded_players(&catalog::tournament("t-1"));
    assert_eq!(players.len(), 4);
    assert!(players.windows(2).all(|w| w[0].rating >= w[1].rating));
    assert_eq!(players[0].id, "p-3");
}

#[test]
fn pending_pairings_are_reportable() {
    let open = catalog::tournament("t-1");
    for pairing in catalog::matches("t-1") {
        assert!(is_reportable(&open, &pairing));
    }
}

#[test]
fn finished_results_are_not_reportable() {
    let finished = catalog::tournament("t-3");
    let decided = catalog::match_by_id("m-5");
    assert!(!is_reportable(&finished, &decided));
}

#[test]
fn tab_links_round_trip_through_query() {
    let href = AppRoute::Tournament { id: "t-1".into() }.href_with_tab(TournamentTab::Pairings);
    let query = href.split_once("?tab=").map(|(_, v)| v);
    assert_eq!(TabSelection::<TournamentTab>::from_query(query).active(), TournamentTab::Pairings);
}
