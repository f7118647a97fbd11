//! Number formatting for the summary table, rankings and chart labels.

/// Format an integer charge count with thousands separators.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(345_908), "345,908");
/// ```
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Format a monetary amount as a dollar string with thousands separators and
/// two decimal places.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_currency;
///
/// assert_eq!(format_currency(1_729_540.0), "$1,729,540.00");
/// assert_eq!(format_currency(7.5), "$7.50");
/// ```
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    let dollars = cents / 100;
    format!("${}.{:02}", group_thousands(&dollars.to_string()), cents % 100)
}

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ─────────────────────────────────────────────────────────────────────
