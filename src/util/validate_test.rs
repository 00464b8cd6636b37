use super::*;

// =============================================================
// Phone numbers
// =============================================================

#[test]
fn normalize_phone_strips_separators() {
    assert_eq!(normalize_phone("(512) 555-0199").as_deref(), Some("5125550199"));
    assert_eq!(normalize_phone(" +1 512.555.0199 ").as_deref(), Some("+15125550199"));
}

#[test]
fn normalize_phone_rejects_short_long_and_letters() {
    assert_eq!(normalize_phone("555-0199"), None);
    assert_eq!(normalize_phone("1234567890123456"), None);
    assert_eq!(normalize_phone("512-555-CHESS"), None);
    assert_eq!(normalize_phone(""), None);
}

#[test]
fn mask_phone_keeps_last_four() {
    assert_eq!(mask_phone("+15125550199"), "•••• 0199");
    assert_eq!(mask_phone("12"), "•••• 12");
}

// =============================================================
// Passcodes and email
// =============================================================

#[test]
fn otp_requires_six_digits() {
    assert!(is_valid_otp("123456"));
    assert!(is_valid_otp(" 123456 "));
    assert!(!is_valid_otp("12345"));
    assert!(!is_valid_otp("12345a"));
    assert!(!is_valid_otp("1234567"));
}

#[test]
fn email_shape_check() {
    assert!(is_valid_email("mira@example.com"));
    assert!(is_valid_email("events@rook.and.roast.example"));
    assert!(!is_valid_email("mira@localhost"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("mira@@example.com"));
    assert!(!is_valid_email("mira @example.com"));
    assert!(!is_valid_email("mira@example."));
    assert!(!is_valid_email("mira"));
}
