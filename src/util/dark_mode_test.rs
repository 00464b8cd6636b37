#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_system_preference_is_false_outside_browser() {
    assert!(!read_system_preference());
}

#[test]
fn toggle_flips_dark_mode() {
    assert!(toggle(ThemeState { dark_mode: false }).dark_mode);
    assert!(!toggle(ThemeState { dark_mode: true }).dark_mode);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(ThemeState::default());
    apply(ThemeState { dark_mode: true });
}
