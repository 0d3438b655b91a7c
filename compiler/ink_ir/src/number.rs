//! Canonical number formatting.

/// Render a number the way the language prints it.
///
/// Integral values print without a fractional part; everything else prints
/// with at most eight fractional digits and no trailing zeros.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    if n.trunc() == n && n.abs() < 9.0e15 {
        return format!("{}", n as i64);
    }
    let fixed = format!("{n:.8}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
