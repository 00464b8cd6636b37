use super::*;

#[test]
fn details_prefilled_from_profile() {
    let wizard = WizardState::<TournamentEntryFlow>::default();
    let player = catalog::current_player();
    assert_eq!(wizard.fields().text(EntryField::Name), player.name);
    assert_eq!(wizard.fields().text(EntryField::Rating), player.rating.to_string());
    assert!(!wizard.fields().is_filled(EntryField::Section));
}

#[test]
fn four_step_entry_reaches_review_and_submits() {
    let mut wizard = WizardState::<TournamentEntryFlow>::default();
    wizard.set_field(EntryField::Section, "Open");
    wizard.set_field(EntryField::Email, "tomas@example.com");
    assert!(wizard.advance());
    assert!(wizard.advance());
    assert!(wizard.advance());
    assert_eq!(wizard.step(), 4);
    assert!(!wizard.advance());
    assert_eq!(wizard.step(), 4);
    assert!(!wizard.can_complete());
    wizard.set_field(EntryField::AcceptRules, true);
    assert!(wizard.complete());
}

#[test]
fn amount_due_includes_online_fee() {
    let tournament = catalog::tournament("t-1");
    assert_eq!(amount_due_cents(&tournament, false), 4_500 + ONLINE_FEE_CENTS);
    assert_eq!(amount_due_cents(&tournament, true), 0);
}

#[test]
fn rating_caps_filter_sections() {
    let tournament = catalog::tournament("t-1");
    assert_eq!(eligible_sections(&tournament, Some(2188)), vec!["Open".to_owned()]);
    assert_eq!(eligible_sections(&tournament, Some(1500)), vec!["Open".to_owned(), "U1800".to_owned()]);
    assert_eq!(eligible_sections(&tournament, None).len(), 3);
}
