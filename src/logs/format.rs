//! Fixed per-format parsing and reporting rules.
//!
//! The four supported log families share one tokenize-and-aggregate routine.
//! What differs between them (token positions, keywords, timestamp layout,
//! report sections) is captured here as plain data.

use crate::utils::time::Granularity;

/// Supported log families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogFormat {
    /// Linux authentication log (`auth.log` / `secure`)
    Linux,
    /// Android logcat output (threadtime layout)
    Android,
    /// macOS system log
    Mac,
    /// Windows CBS/event log export
    Windows,
}

impl LogFormat {
    pub const ALL: [Self; 4] = [Self::Linux, Self::Android, Self::Mac, Self::Windows];

    /// Get the fixed rules for this format
    pub fn rules(self) -> &'static FormatRules {
        match self {
            Self::Linux => &LINUX,
            Self::Android => &ANDROID,
            Self::Mac => &MAC,
            Self::Windows => &WINDOWS,
        }
    }
}

/// How the actor (source) field is located in a tokenized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRule {
    /// Fixed token position. `fallback` is used when the token is absent and
    /// `strip_pid` drops a trailing `[pid]` suffix (`kernel[0]:` -> `kernel`).
    Token {
        index: usize,
        fallback: Option<&'static str>,
        strip_pid: bool,
    },
    /// First token starting with `prefix`, e.g. `rhost=10.0.0.5`.
    KeyValue { prefix: &'static str },
}

/// Leading timestamp layout and the bucket it is folded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampRule {
    /// Number of leading tokens that make up the timestamp
    pub tokens: usize,
    /// chrono format string applied to the space-joined tokens
    pub pattern: &'static str,
    /// Year assumed when the log line does not carry one
    pub implied_year: Option<i32>,
    pub granularity: Granularity,
}

/// Aggregate a report section is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Categories,
    Actors,
    Keywords,
    TimeBuckets,
    Anomalies,
}

/// Row order of a report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Order in which keys were first seen
    Insertion,
    /// Highest count first; ties keep first-seen order
    CountDescending,
    /// Ascending key order (chronological for bucket labels)
    KeyAscending,
}

/// One block of the console summary and the CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub count_heading: &'static str,
    pub table: Table,
    pub order: SortOrder,
    /// Console column width of the key
    pub key_width: usize,
}

/// Everything that distinguishes one log family from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRules {
    pub name: &'static str,
    /// Lines with fewer whitespace-separated tokens are skipped entirely
    pub min_tokens: usize,
    /// Lines not containing this substring are skipped entirely
    pub required_marker: Option<&'static str>,
    /// Substring that marks a failed authentication attempt
    pub failure_marker: Option<&'static str>,
    pub category_index: Option<usize>,
    pub actor: ActorRule,
    /// Index of the first message token; `None` disables keyword scanning
    pub message_start: Option<usize>,
    /// Case-sensitive substrings searched for in the message
    pub keywords: &'static [&'static str],
    pub timestamp: Option<TimestampRule>,
    pub sections: &'static [Section],
    pub default_output: &'static str,
}

const fn section(
    heading: &'static str,
    count_heading: &'static str,
    table: Table,
    order: SortOrder,
    key_width: usize,
) -> Section {
    Section {
        heading,
        count_heading,
        table,
        order,
        key_width,
    }
}

pub static LINUX: FormatRules = FormatRules {
    name: "Linux",
    min_tokens: 0,
    required_marker: Some("rhost="),
    failure_marker: Some("authentication failure"),
    category_index: None,
    actor: ActorRule::KeyValue { prefix: "rhost=" },
    message_start: None,
    keywords: &[],
    timestamp: None,
    sections: &[
        section(
            "IP Address",
            "Request Count",
            Table::Actors,
            SortOrder::CountDescending,
            20,
        ),
        section(
            "IP Address",
            "Failed Login Attempts",
            Table::Anomalies,
            SortOrder::Insertion,
            20,
        ),
    ],
    default_output: "Linux_log_analysis_results.csv",
};

pub static ANDROID: FormatRules = FormatRules {
    name: "Android",
    min_tokens: 5,
    required_marker: None,
    failure_marker: None,
    category_index: Some(4),
    actor: ActorRule::Token {
        index: 5,
        fallback: Some("Unknown"),
        strip_pid: false,
    },
    message_start: Some(6),
    keywords: &["Error", "Failure", "Crash"],
    timestamp: Some(TimestampRule {
        tokens: 2,
        pattern: "%m-%d %H:%M:%S.%f",
        implied_year: Some(1900),
        granularity: Granularity::Minute,
    }),
    sections: &[
        section("Log Priority", "Count", Table::Categories, SortOrder::Insertion, 15),
        section("Source", "Count", Table::Actors, SortOrder::Insertion, 15),
        section("Keyword", "Count", Table::Keywords, SortOrder::Insertion, 15),
        section(
            "Minute",
            "Activity Count",
            Table::TimeBuckets,
            SortOrder::KeyAscending,
            20,
        ),
    ],
    default_output: "Android_log_analysis_results.csv",
};

pub static MAC: FormatRules = FormatRules {
    name: "Mac",
    min_tokens: 5,
    required_marker: None,
    failure_marker: None,
    category_index: None,
    actor: ActorRule::Token {
        index: 3,
        fallback: None,
        strip_pid: true,
    },
    message_start: Some(4),
    keywords: &["Error", "Failure", "Critical", "unplug", "disconnect"],
    timestamp: Some(TimestampRule {
        tokens: 3,
        pattern: "%b %d %H:%M:%S",
        implied_year: Some(2024),
        granularity: Granularity::Hour,
    }),
    sections: &[
        section("Process", "Count", Table::Actors, SortOrder::Insertion, 15),
        section("Keyword", "Count", Table::Keywords, SortOrder::Insertion, 15),
        section(
            "Hour",
            "Activity Count",
            Table::TimeBuckets,
            SortOrder::KeyAscending,
            20,
        ),
    ],
    default_output: "Mac_log_analysis_results.csv",
};

// The seconds field ends in a comma (`10:00:00,`) and no fraction follows it.
pub static WINDOWS: FormatRules = FormatRules {
    name: "Windows",
    min_tokens: 4,
    required_marker: None,
    failure_marker: None,
    category_index: Some(2),
    actor: ActorRule::Token {
        index: 3,
        fallback: None,
        strip_pid: false,
    },
    message_start: Some(4),
    keywords: &["Error", "Failure", "Critical"],
    timestamp: Some(TimestampRule {
        tokens: 2,
        pattern: "%Y-%m-%d %H:%M:%S,",
        implied_year: None,
        granularity: Granularity::Hour,
    }),
    sections: &[
        section("Log Type", "Count", Table::Categories, SortOrder::Insertion, 15),
        section("Module", "Count", Table::Actors, SortOrder::Insertion, 15),
        section("Keyword", "Count", Table::Keywords, SortOrder::Insertion, 15),
        section(
            "Hour",
            "Activity Count",
            Table::TimeBuckets,
            SortOrder::KeyAscending,
            20,
        ),
    ],
    default_output: "Windows_log_analysis_enhanced_results.csv",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_lookup() {
        assert_eq!(LogFormat::Linux.rules().name, "Linux");
        assert_eq!(LogFormat::Android.rules().min_tokens, 5);
        assert_eq!(LogFormat::Mac.rules().min_tokens, 5);
        assert_eq!(LogFormat::Windows.rules().min_tokens, 4);
    }

    #[test]
    fn test_default_outputs_are_distinct() {
        let mut outputs: Vec<_> = LogFormat::ALL
            .iter()
            .map(|f| f.rules().default_output)
            .collect();
        outputs.sort_unstable();
        outputs.dedup();
        assert_eq!(outputs.len(), 4);
    }

    #[test]
    fn test_only_linux_reports_anomalies() {
        for format in LogFormat::ALL {
            let has_anomalies = format
                .rules()
                .sections
                .iter()
                .any(|s| s.table == Table::Anomalies);
            assert_eq!(has_anomalies, format == LogFormat::Linux);
        }
    }

    #[test]
    fn test_time_sections_sort_by_key() {
        for format in LogFormat::ALL {
            for section in format.rules().sections {
                if section.table == Table::TimeBuckets {
                    assert_eq!(section.order, SortOrder::KeyAscending);
                }
            }
        }
    }
}
