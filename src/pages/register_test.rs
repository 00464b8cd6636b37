use super::*;
use crate::state::wizard::WizardPolicy;

fn strict() -> WizardState<PlayerSignupFlow> {
    WizardState::new(WizardPolicy { allow_skip_ahead: false, ..WizardPolicy::default() })
}

fn fill_account(wizard: &mut WizardState<PlayerSignupFlow>) {
    wizard.set_field(SignupField::Name, "Tomas Reyes");
    wizard.set_field(SignupField::Email, "tomas@example.com");
    wizard.set_field(SignupField::Password, "queen-side");
}

#[test]
fn account_step_needs_name_email_and_password() {
    let mut wizard = strict();
    assert!(!wizard.can_advance());
    wizard.set_field(SignupField::Name, "Tomas Reyes");
    wizard.set_field(SignupField::Email, "tomas@example");
    wizard.set_field(SignupField::Password, "short");
    assert!(!wizard.current_step_ready());
    fill_account(&mut wizard);
    assert!(wizard.advance());
    assert_eq!(wizard.step(), 2);
}

#[test]
fn rating_is_optional_but_bounded() {
    assert!(rating_is_valid(""));
    assert!(rating_is_valid(" 1850 "));
    assert!(!rating_is_valid("42"));
    assert!(!rating_is_valid("3400"));
    assert!(!rating_is_valid("strong"));
}

#[test]
fn phone_step_waits_for_verification() {
    let mut wizard = strict();
    fill_account(&mut wizard);
    assert!(wizard.advance());
    assert!(wizard.advance());
    assert_eq!(wizard.step(), 3);
    wizard.set_field(SignupField::Phone, "512-555-0199");
    wizard.set_field(SignupField::Code, "123456");
    assert!(!wizard.can_advance());
    wizard.set_field(SignupField::PhoneVerified, true);
    assert!(wizard.advance());
}

#[test]
fn submit_requires_terms_on_last_step() {
    let mut wizard = WizardState::<PlayerSignupFlow>::default();
    fill_account(&mut wizard);
    wizard.set_field(SignupField::PhoneVerified, true);
    for _ in 0..3 {
        wizard.advance();
    }
    assert!(wizard.is_last());
    assert!(!wizard.complete());
    wizard.set_field(SignupField::Terms, true);
    assert!(wizard.complete());
    assert!(wizard.is_completed());
}

#[test]
fn newsletter_defaults_on() {
    let wizard = WizardState::<PlayerSignupFlow>::default();
    assert!(wizard.fields().flag(SignupField::Newsletter));
    assert_eq!(wizard.fields().text(SignupField::City), "Austin");
}

#[test]
fn editing_phone_after_verification_revokes_it() {
    let mut wizard = WizardState::<PlayerSignupFlow>::default();
    let mut otp = SimulatedAction::new("signup otp", std::time::Duration::from_millis(10));
    wizard.set_field(SignupField::Phone, "512-555-0199");
    wizard.set_field(SignupField::Code, "123456");
    let verified = verification_input(wizard.fields());
    let ticket = otp.start().unwrap();
    assert!(otp.resolve(ticket));
    wizard.set_field(SignupField::PhoneVerified, true);
    assert!(PlayerSignupFlow::step_ready(3, wizard.fields()));

    wizard.set_field(SignupField::Phone, "512-555-0100");
    assert_ne!(verification_input(wizard.fields()), verified);
    revoke_verification(&mut wizard, &mut otp);

    assert!(!PlayerSignupFlow::step_ready(3, wizard.fields()));
    assert!(!otp.is_pending());
    assert!(!otp.is_resolved());
}

#[test]
fn editing_code_while_pending_drops_the_pending_check() {
    let mut wizard = WizardState::<PlayerSignupFlow>::default();
    let mut otp = SimulatedAction::new("signup otp", std::time::Duration::from_millis(10));
    wizard.set_field(SignupField::Phone, "512-555-0199");
    wizard.set_field(SignupField::Code, "123456");
    let ticket = otp.start().unwrap();

    wizard.set_field(SignupField::Code, "654321");
    revoke_verification(&mut wizard, &mut otp);

    assert!(!otp.resolve(ticket));
    assert!(!otp.is_resolved());
    assert!(!wizard.fields().flag(SignupField::PhoneVerified));
}
