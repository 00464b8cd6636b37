use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SignupField {
    Name,
    Email,
    Terms,
}

struct FourStep;

impl WizardFlow for FourStep {
    type Field = SignupField;

    const NAME: &'static str = "four-step";
    const TOTAL_STEPS: u8 = 4;

    fn default_fields() -> Vec<(SignupField, FieldValue)> {
        vec![
            (SignupField::Name, FieldValue::from("")),
            (SignupField::Email, FieldValue::from("")),
            (SignupField::Terms, FieldValue::from(false)),
        ]
    }

    fn step_title(step: u8) -> &'static str {
        match step {
            1 => "Name",
            2 => "Email",
            3 => "Terms",
            _ => "Review",
        }
    }

    fn step_ready(step: u8, fields: &FieldMap<SignupField>) -> bool {
        match step {
            1 => fields.is_filled(SignupField::Name),
            2 => fields.is_filled(SignupField::Email),
            3 => fields.flag(SignupField::Terms),
            _ => true,
        }
    }
}

fn clamp_policy() -> WizardPolicy {
    WizardPolicy { allow_skip_ahead: true, floor: FloorBehavior::Clamp }
}

fn strict_policy() -> WizardPolicy {
    WizardPolicy { allow_skip_ahead: false, floor: FloorBehavior::Exit }
}

fn fill_all(wizard: &mut WizardState<FourStep>) {
    wizard.set_field(SignupField::Name, "Magnus");
    wizard.set_field(SignupField::Email, "magnus@example.com");
    wizard.set_field(SignupField::Terms, true);
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_wizard_starts_at_step_one_with_defaults() {
    let wizard = WizardState::<FourStep>::default();
    assert_eq!(wizard.step(), 1);
    assert_eq!(wizard.total_steps(), 4);
    assert!(wizard.is_first());
    assert!(!wizard.is_last());
    assert!(!wizard.is_completed());
    assert_eq!(wizard.fields().text(SignupField::Name), "");
    assert!(!wizard.fields().flag(SignupField::Terms));
    assert_eq!(wizard.title(), "Name");
}

#[test]
fn default_policy_skips_ahead_and_exits_at_floor() {
    let policy = WizardPolicy::default();
    assert!(policy.allow_skip_ahead);
    assert_eq!(policy.floor, FloorBehavior::Exit);
}

// =============================================================
// advance / retreat bounds
// =============================================================

#[test]
fn four_step_scenario_clamps_at_last_step() {
    let mut wizard = WizardState::<FourStep>::new(clamp_policy());
    assert!(wizard.advance());
    assert!(wizard.advance());
    assert!(wizard.advance());
    assert_eq!(wizard.step(), 4);
    assert!(!wizard.advance());
    assert_eq!(wizard.step(), 4);
    assert!(wizard.is_last());
}

#[test]
fn retreat_at_floor_stays_under_clamp() {
    let mut wizard = WizardState::<FourStep>::new(clamp_policy());
    assert_eq!(wizard.retreat(), Retreat::Stayed);
    assert_eq!(wizard.step(), 1);
}

#[test]
fn retreat_at_floor_reports_exit_under_exit() {
    let mut wizard = WizardState::<FourStep>::new(WizardPolicy::default());
    assert_eq!(wizard.retreat(), Retreat::Exit);
    assert_eq!(wizard.step(), 1);
}

#[test]
fn retreat_moves_back_one_step() {
    let mut wizard = WizardState::<FourStep>::new(clamp_policy());
    wizard.advance();
    wizard.advance();
    assert_eq!(wizard.retreat(), Retreat::Moved(2));
    assert_eq!(wizard.retreat(), Retreat::Moved(1));
    assert_eq!(wizard.retreat(), Retreat::Stayed);
}

// =============================================================
// Skip-ahead policy
// =============================================================

#[test]
fn skip_ahead_policy_ignores_empty_fields() {
    let mut wizard = WizardState::<FourStep>::new(clamp_policy());
    assert!(!wizard.current_step_ready());
    assert!(wizard.can_advance());
    assert!(wizard.advance());
}

#[test]
fn strict_policy_blocks_until_step_ready() {
    let mut wizard = WizardState::<FourStep>::new(strict_policy());
    assert!(!wizard.can_advance());
    assert!(!wizard.advance());
    assert_eq!(wizard.step(), 1);

    wizard.set_field(SignupField::Name, "Judit");
    assert!(wizard.can_advance());
    assert!(wizard.advance());
    assert_eq!(wizard.step(), 2);
}

#[test]
fn whitespace_text_is_not_filled() {
    let mut wizard = WizardState::<FourStep>::new(strict_policy());
    wizard.set_field(SignupField::Name, "   ");
    assert!(!wizard.can_advance());
}

// =============================================================
// complete
// =============================================================

#[test]
fn complete_only_at_last_step() {
    let mut wizard = WizardState::<FourStep>::new(clamp_policy());
    fill_all(&mut wizard);
    for _ in 0..3 {
        assert!(!wizard.can_complete());
        assert!(!wizard.complete());
        wizard.advance();
    }
    assert!(wizard.can_complete());
    assert!(wizard.complete());
    assert!(wizard.is_completed());
}

#[test]
fn complete_requires_every_step_ready() {
    let mut wizard = WizardState::<FourStep>::new(clamp_policy());
    for _ in 0..3 {
        wizard.advance();
    }
    assert!(wizard.is_last());
    assert!(!wizard.can_complete());

    fill_all(&mut wizard);
    assert!(wizard.can_complete());
}

#[test]
fn complete_twice_is_rejected() {
    let mut wizard = WizardState::<FourStep>::new(clamp_policy());
    fill_all(&mut wizard);
    for _ in 0..3 {
        wizard.advance();
    }
    assert!(wizard.complete());
    assert!(!wizard.complete());
}

// =============================================================
// Progress and fields
// =============================================================

#[test]
fn progress_fraction_tracks_step() {
    let mut wizard = WizardState::<FourStep>::new(clamp_policy());
    assert!((wizard.progress_fraction() - 0.25).abs() < f64::EPSILON);
    wizard.advance();
    assert!((wizard.progress_fraction() - 0.5).abs() < f64::EPSILON);
    wizard.advance();
    wizard.advance();
    assert!((wizard.progress_fraction() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn set_field_overwrites_value() {
    let mut wizard = WizardState::<FourStep>::default();
    wizard.set_field(SignupField::Email, "a@b.com");
    wizard.set_field(SignupField::Email, "c@d.com");
    assert_eq!(wizard.fields().text(SignupField::Email), "c@d.com");
    assert_eq!(wizard.fields().get(SignupField::Email), Some(&FieldValue::Text("c@d.com".into())));
}

#[test]
fn text_and_flag_accessors_tolerate_type_mismatch() {
    let mut wizard = WizardState::<FourStep>::default();
    wizard.set_field(SignupField::Name, true);
    assert_eq!(wizard.fields().text(SignupField::Name), "");
    assert!(!wizard.fields().flag(SignupField::Email));
}

#[test]
fn clone_preserves_state() {
    let mut wizard = WizardState::<FourStep>::default();
    wizard.advance();
    wizard.set_field(SignupField::Name, "Hou");
    let copy = wizard.clone();
    assert_eq!(copy, wizard);
    assert_eq!(copy.step(), 2);
}
