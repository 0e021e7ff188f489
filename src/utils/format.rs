//! Number formatting for status output.

/// Formats a count with comma separators for thousands.
///
/// # Examples
///
/// ```
/// use log_insight_tools::utils::format::format_number;
///
/// assert_eq!(format_number(2000), "2,000");
/// assert_eq!(format_number(7), "7");
/// ```
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Share of `part` in `total` as a percentage, 0.0 when `total` is zero
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
