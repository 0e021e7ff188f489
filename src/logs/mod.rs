//! Plain-text log line parsing.
//!
//! Each supported log family is described by a [`format::FormatRules`] record
//! (minimum token count, positional field indices, keyword list, timestamp
//! pattern). A single routine in [`parser`] applies those rules to a raw line
//! and yields either a [`types::ParsedLine`] or a typed skip reason.

pub mod format;
pub mod parser;
pub mod types;
