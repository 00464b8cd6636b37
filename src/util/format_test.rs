use super::*;

#[test]
fn money_formats_cents_with_grouping() {
    assert_eq!(money(0), "$0.00");
    assert_eq!(money(4_500), "$45.00");
    assert_eq!(money(250_000), "$2,500.00");
    assert_eq!(money(123_456_789), "$1,234,567.89");
}

#[test]
fn money_short_drops_zero_cents() {
    assert_eq!(money_short(250_000), "$2,500");
    assert_eq!(money_short(4_550), "$45.50");
}

#[test]
fn score_renders_halves() {
    assert_eq!(score(0), "0");
    assert_eq!(score(1), "½");
    assert_eq!(score(6), "3");
    assert_eq!(score(7), "3½");
}

#[test]
fn stars_renders_one_decimal() {
    assert_eq!(stars(47), "4.7");
    assert_eq!(stars(50), "5.0");
}

#[test]
fn date_range_collapses_single_day() {
    assert_eq!(date_range("2026-10-31", "2026-10-31"), "2026-10-31");
    assert_eq!(date_range("2026-11-07", "2026-11-08"), "2026-11-07 to 2026-11-08");
}

#[test]
fn percent_width_clamps() {
    assert_eq!(percent_width(0.25), "width: 25%");
    assert_eq!(percent_width(1.5), "width: 100%");
    assert_eq!(percent_width(-1.0), "width: 0%");
}

#[test]
fn invite_reference_uses_uuid_prefix() {
    let id = uuid::Uuid::parse_str("1a2b3c4d-0000-4000-8000-000000000000").expect("valid uuid");
    assert_eq!(invite_reference(id), "INV-1A2B3C4D");
}

#[test]
fn invite_references_differ_between_invites() {
    assert_ne!(invite_reference(uuid::Uuid::new_v4()), invite_reference(uuid::Uuid::new_v4()));
}
