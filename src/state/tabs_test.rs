use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn tab_defaults_are_first_tabs() {
    assert_eq!(TournamentTab::default(), TournamentTab::Overview);
    assert_eq!(LeaderboardTab::default(), LeaderboardTab::Standings);
    assert_eq!(PartnerTab::default(), PartnerTab::Overview);
    assert_eq!(ClubTab::default(), ClubTab::About);
}

#[test]
fn all_lists_default_first() {
    assert_eq!(TournamentTab::ALL[0], TournamentTab::default());
    assert_eq!(LeaderboardTab::ALL[0], LeaderboardTab::default());
    assert_eq!(PartnerTab::ALL[0], PartnerTab::default());
    assert_eq!(ClubTab::ALL[0], ClubTab::default());
}

#[test]
fn keys_are_unique_per_set() {
    let keys: Vec<_> = TournamentTab::ALL.iter().map(|t| t.key()).collect();
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// set_tab
// =============================================================

#[test]
fn set_tab_is_idempotent() {
    let mut once = TabSelection::<TournamentTab>::default();
    once.set_tab(TournamentTab::Pairings);

    let mut twice = TabSelection::<TournamentTab>::default();
    assert!(twice.set_tab(TournamentTab::Pairings));
    assert!(!twice.set_tab(TournamentTab::Pairings));

    assert_eq!(once, twice);
    assert_eq!(twice.active(), TournamentTab::Pairings);
}

#[test]
fn set_tab_reaches_every_member() {
    let mut selection = TabSelection::<PartnerTab>::default();
    for tab in PartnerTab::ALL {
        selection.set_tab(*tab);
        assert!(selection.is_active(*tab));
    }
}

// =============================================================
// Query parameter round-trip
// =============================================================

#[test]
fn from_query_absent_uses_default() {
    let selection = TabSelection::<LeaderboardTab>::from_query(None);
    assert_eq!(selection.active(), LeaderboardTab::Standings);
}

#[test]
fn from_query_unknown_value_uses_default() {
    let selection = TabSelection::<TournamentTab>::from_query(Some("brackets"));
    assert_eq!(selection.active(), TournamentTab::Overview);
    let selection = TabSelection::<TournamentTab>::from_query(Some(""));
    assert_eq!(selection.active(), TournamentTab::Overview);
}

#[test]
fn from_query_accepts_known_value_loosely() {
    let selection = TabSelection::<TournamentTab>::from_query(Some(" Sponsors "));
    assert_eq!(selection.active(), TournamentTab::Sponsors);
}

#[test]
fn query_value_omits_default_tab() {
    let mut selection = TabSelection::<PartnerTab>::default();
    assert_eq!(selection.query_value(), None);
    selection.set_tab(PartnerTab::Invites);
    assert_eq!(selection.query_value(), Some("invites"));
}

// =============================================================
// FromStr / Display
// =============================================================

#[test]
fn from_str_reports_unknown_tab() {
    assert_eq!("rounds".parse::<LeaderboardTab>(), Ok(LeaderboardTab::Rounds));
    assert_eq!("nope".parse::<LeaderboardTab>(), Err(UnknownTab("nope".to_owned())));
    assert_eq!(UnknownTab("nope".into()).to_string(), "unknown tab 'nope'");
}

#[test]
fn display_uses_label() {
    assert_eq!(ClubTab::Members.to_string(), "Members");
    assert_eq!(PartnerTab::Sponsorships.to_string(), "Sponsorships");
}
