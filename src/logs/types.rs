//! Data structures produced by the line parser.

use thiserror::Error;

/// Fields extracted from one accepted log line.
///
/// Not every format fills every field. A `None` bucket means the line's
/// timestamp did not match the format's pattern; the remaining fields are
/// still counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLine {
    /// Log type / priority (Windows log type, Android priority)
    pub category: Option<String>,
    /// Source of the line: remote host, process, module or logcat tag
    pub actor: Option<String>,
    /// Keywords found in the message, each at most once, in keyword-list order
    pub keywords: Vec<&'static str>,
    /// Normalized time bucket label (minute or hour granularity)
    pub bucket: Option<String>,
    /// Whether the line records a failed authentication attempt
    pub failed_login: bool,
}

/// Why a line was left out of every aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("expected at least {required} tokens, found {found}")]
    TooFewTokens { required: usize, found: usize },

    #[error("line does not contain `{0}`")]
    MissingMarker(&'static str),
}

/// Result of running the tokenizer over one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Parsed(ParsedLine),
    Skipped(SkipReason),
}

impl LineOutcome {
    /// Get the parsed fields, if the line was accepted
    pub fn parsed(&self) -> Option<&ParsedLine> {
        match self {
            Self::Parsed(line) => Some(line),
            Self::Skipped(_) => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}
