//! Timestamp parsing and time-bucket helpers.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDateTime, Timelike};

/// Most fractional-second digits a `%f` field may carry
const MAX_FRACTION_DIGITS: usize = 6;

/// Width of a time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Minute,
    Hour,
}

impl Granularity {
    /// Label layout for this granularity. Labels sort chronologically as strings.
    pub const fn label_pattern(self) -> &'static str {
        match self {
            Self::Minute => "%Y-%m-%d %H:%M",
            Self::Hour => "%Y-%m-%d %H:00:00",
        }
    }
}

/// Parse a log timestamp with a chrono format string.
///
/// Logs that omit the year get `implied_year` prepended before parsing, so
/// `"Jul 1 09:00:55"` with year 2024 parses as `2024-07-01 09:00:55`.
///
/// Stricter than chrono alone: a `%f` fraction longer than six digits and
/// second `60` are both rejected.
pub fn parse_log_timestamp(
    text: &str,
    pattern: &str,
    implied_year: Option<i32>,
) -> Result<NaiveDateTime> {
    if pattern.contains("%f") && fraction_digits(text) > MAX_FRACTION_DIGITS {
        bail!(
            "Failed to parse timestamp '{}': more than {} fractional digits",
            text,
            MAX_FRACTION_DIGITS
        );
    }

    let parsed = match implied_year {
        Some(year) => NaiveDateTime::parse_from_str(
            &format!("{} {}", year, text),
            &format!("%Y {}", pattern),
        ),
        None => NaiveDateTime::parse_from_str(text, pattern),
    };
    let dt =
        parsed.with_context(|| format!("Failed to parse timestamp '{}' as '{}'", text, pattern))?;

    // chrono encodes second 60 as an overflowing nanosecond field
    if dt.nanosecond() >= 1_000_000_000 {
        bail!("Failed to parse timestamp '{}': leap second", text);
    }
    Ok(dt)
}

/// Length of the digit run after the last `.` in `text`
fn fraction_digits(text: &str) -> usize {
    text.rsplit_once('.').map_or(0, |(_, tail)| {
        tail.chars().take_while(char::is_ascii_digit).count()
    })
}

/// Format the bucket a timestamp falls into
pub fn bucket_label(dt: &NaiveDateTime, granularity: Granularity) -> String {
    dt.format(granularity.label_pattern()).to_string()
}
