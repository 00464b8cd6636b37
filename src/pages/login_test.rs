use std::time::Duration;

use super::*;

fn action() -> SimulatedAction {
    SimulatedAction::new("test otp", Duration::from_millis(10))
}

#[test]
fn verify_needs_a_sent_code_and_six_digits() {
    let idle = action();
    assert!(!can_verify(false, "123456", &idle));
    assert!(!can_verify(true, "12345", &idle));
    assert!(can_verify(true, "123456", &idle));
}

#[test]
fn verify_is_disabled_while_pending_and_after_success() {
    let mut otp = action();
    let ticket = otp.start().expect("idle action starts");
    assert!(!can_verify(true, "123456", &otp));
    assert!(otp.resolve(ticket));
    assert!(!can_verify(true, "123456", &otp));
}

#[test]
fn resend_resets_verification() {
    let mut otp = action();
    let ticket = otp.start().expect("idle action starts");
    otp.reset();
    assert!(!otp.resolve(ticket));
    assert!(can_verify(true, "654321", &otp));
}
