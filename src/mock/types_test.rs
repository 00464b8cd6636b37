use super::*;

fn player(title: Option<&str>) -> Player {
    Player {
        id: "p-1".into(),
        name: "Ada Lovelace".into(),
        rating: 2210,
        title: title.map(str::to_owned),
        federation: "ENG".into(),
        city: "London".into(),
        club_id: None,
    }
}

#[test]
fn display_name_prefixes_title() {
    assert_eq!(player(Some("IM")).display_name(), "IM Ada Lovelace");
    assert_eq!(player(None).display_name(), "Ada Lovelace");
}

#[test]
fn sponsor_tier_keys_round_trip() {
    for tier in SponsorTier::ALL {
        assert_eq!(SponsorTier::from_key(tier.key()), Some(tier));
    }
    assert_eq!(SponsorTier::from_key("platinum"), None);
}

#[test]
fn sponsor_tier_minimums_descend() {
    let mins: Vec<_> = SponsorTier::ALL.iter().map(|t| t.minimum_cents()).collect();
    assert!(mins.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn game_result_notation() {
    assert_eq!(GameResult::WhiteWins.notation(), "1-0");
    assert_eq!(GameResult::BlackWins.notation(), "0-1");
    assert_eq!(GameResult::Draw.notation(), "½-½");
    assert_eq!(GameResult::from_key("draw"), Some(GameResult::Draw));
    assert_eq!(GameResult::from_key("forfeit"), None);
}

#[test]
fn event_category_serializes_snake_case() {
    let json = serde_json::to_value(EventCategory::Blitz).unwrap();
    assert_eq!(json, serde_json::json!("blitz"));
    let status: TournamentStatus = serde_json::from_value(serde_json::json!("registration_open")).unwrap();
    assert_eq!(status, TournamentStatus::RegistrationOpen);
}
