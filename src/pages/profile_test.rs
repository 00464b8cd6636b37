use super::*;

#[test]
fn current_player_has_tournament_history() {
    let player = catalog::current_player();
    let entered = tournaments_for(&player);
    assert!(!entered.is_empty());
    assert!(entered.iter().all(|t| t.player_ids.contains(&player.id)));
    assert!(entered.windows(2).all(|w| w[0].start_date >= w[1].start_date));
}
