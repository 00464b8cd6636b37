//! Display formatting for money, scores, ratings and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format cents as US dollars, e.g. `4500` -> `"$45.00"`, `250000` -> `"$2,500.00"`.
pub fn money(cents: u32) -> String {
    let dollars = cents / 100;
    let rest = cents % 100;
    format!("${}.{rest:02}", group_thousands(dollars))
}

/// Format cents as whole dollars when even, e.g. `250000` -> `"$2,500"`.
pub fn money_short(cents: u32) -> String {
    if cents % 100 == 0 { format!("${}", group_thousands(cents / 100)) } else { money(cents) }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a half-point score, e.g. `7` -> `"3½"`, `6` -> `"3"`, `1` -> `"½"`.
pub fn score(half_points: u16) -> String {
    match (half_points / 2, half_points % 2) {
        (0, 1) => "½".to_owned(),
        (whole, 1) => format!("{whole}½"),
        (whole, _) => whole.to_string(),
    }
}

/// Format a tenths-of-a-star rating, e.g. `47` -> `"4.7"`.
pub fn stars(tenths: u8) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Render a date range; single-day ranges collapse to one date.
pub fn date_range(start: &str, end: &str) -> String {
    if start == end { start.to_owned() } else { format!("{start} to {end}") }
}

/// Progress bar width for a fraction in `[0, 1]`, e.g. `0.5` -> `"width: 50%"`.
pub fn percent_width(fraction: f64) -> String {
    format!("width: {:.0}%", (fraction.clamp(0.0, 1.0) * 100.0))
}

/// Short invite reference shown after a simulated invite, e.g. `"INV-1A2B3C4D"`.
pub fn invite_reference(id: uuid::Uuid) -> String {
    let hex = id.simple().to_string();
    format!("INV-{}", hex[..8].to_ascii_uppercase())
}
