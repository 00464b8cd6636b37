use super::*;

#[test]
fn invite_requires_new_valid_email() {
    let existing = catalog::partner_invites();
    assert!(can_invite("new.arbiter@example.com", &existing));
    assert!(!can_invite("not-an-email", &existing));
    let taken = existing[0].email.to_uppercase();
    assert!(!can_invite(&taken, &existing));
}

#[test]
fn new_invite_is_sent_with_reference() {
    let id = uuid::Uuid::parse_str("0badc0de-0000-4000-8000-000000000000").expect("valid uuid");
    let invite = new_invite("  td@example.com ", id);
    assert_eq!(invite.email, "td@example.com");
    assert_eq!(invite.reference, "INV-0BADC0DE");
    assert_eq!(invite.status, InviteStatus::Sent);
}

#[test]
fn sponsorship_total_sums_contributions() {
    let partner = catalog::partner();
    assert_eq!(sponsorship_total_cents(&partner.sponsorship_ids), 600_000);
    assert_eq!(sponsorship_total_cents(&[]), 0);
}
