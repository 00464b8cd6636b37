//! Input checks used to gate wizard steps and form buttons.
//!
//! These only decide whether a control is enabled. Nothing is rejected with
//! an error message beyond the disabled state.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Length of a one-time passcode.
pub const OTP_LENGTH: usize = 6;

/// Phone number reduced to `+` and digits, or `None` when it cannot be one.
///
/// Accepts spaces, dashes, dots and parentheses as separators. The result has
/// between 10 and 15 digits.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let (plus, rest) = match raw.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", raw),
    };
    let mut digits = String::with_capacity(rest.len());
    for ch in rest.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return None,
        }
    }
    (10..=15).contains(&digits.len()).then(|| format!("{plus}{digits}"))
}

/// Whether `code` is a complete passcode (exactly [`OTP_LENGTH`] digits).
pub fn is_valid_otp(code: &str) -> bool {
    let code = code.trim();
    code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}

/// Loose shape check: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(raw: &str) -> bool {
    let raw = raw.trim();
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !raw.contains(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

/// Last four digits of a phone number for "code sent to ..." copy.
pub fn mask_phone(normalized: &str) -> String {
    let digits: Vec<char> = normalized.chars().filter(char::is_ascii_digit).collect();
    let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
    format!("•••• {tail}")
}
