//! Line tokenizer and field extractor.
//!
//! Lines are split on runs of whitespace and fields are taken by position,
//! as described by the format's [`FormatRules`]. Parsing is total: every
//! line yields either a [`ParsedLine`] or a [`SkipReason`].

use crate::logs::format::{ActorRule, FormatRules, TimestampRule};
use crate::logs::types::{LineOutcome, ParsedLine, SkipReason};
use crate::utils::time::{bucket_label, parse_log_timestamp};

/// Parse one raw line according to `rules`.
///
/// # Examples
///
/// ```
/// use log_insight_tools::logs::format::WINDOWS;
/// use log_insight_tools::logs::parser::parse_line;
///
/// let outcome = parse_line(
///     "2024-01-01 10:00:00, ERROR ModuleA something Critical happened",
///     &WINDOWS,
/// );
/// let line = outcome.parsed().unwrap();
/// assert_eq!(line.category.as_deref(), Some("ERROR"));
/// assert_eq!(line.actor.as_deref(), Some("ModuleA"));
/// assert_eq!(line.keywords, vec!["Critical"]);
/// assert_eq!(line.bucket.as_deref(), Some("2024-01-01 10:00:00"));
/// ```
pub fn parse_line(line: &str, rules: &FormatRules) -> LineOutcome {
    if let Some(marker) = rules.required_marker {
        if !line.contains(marker) {
            return LineOutcome::Skipped(SkipReason::MissingMarker(marker));
        }
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < rules.min_tokens {
        return LineOutcome::Skipped(SkipReason::TooFewTokens {
            required: rules.min_tokens,
            found: tokens.len(),
        });
    }

    let category = rules
        .category_index
        .and_then(|i| tokens.get(i))
        .map(|t| (*t).to_string());

    let actor = extract_actor(&tokens, &rules.actor);

    let keywords = match rules.message_start {
        Some(start) => {
            let message = tokens.get(start..).unwrap_or_default().join(" ");
            match_keywords(&message, rules.keywords)
        }
        None => Vec::new(),
    };

    // Failed attempts are keyed by actor, so a line without one cannot count.
    let failed_login =
        actor.is_some() && rules.failure_marker.is_some_and(|m| line.contains(m));

    let bucket = rules
        .timestamp
        .as_ref()
        .and_then(|rule| extract_bucket(&tokens, rule));

    LineOutcome::Parsed(ParsedLine {
        category,
        actor,
        keywords,
        bucket,
        failed_login,
    })
}

fn extract_actor(tokens: &[&str], rule: &ActorRule) -> Option<String> {
    match *rule {
        ActorRule::Token {
            index,
            fallback,
            strip_pid,
        } => match tokens.get(index) {
            Some(token) if strip_pid => token.split('[').next().map(str::to_string),
            Some(token) => Some((*token).to_string()),
            None => fallback.map(str::to_string),
        },
        ActorRule::KeyValue { prefix } => tokens
            .iter()
            .find(|t| t.starts_with(prefix))
            .and_then(|t| t.split('=').nth(1))
            .filter(|value| !value.is_empty())
            .map(str::to_string),
    }
}

/// Keywords contained in `message`, by plain substring match.
fn match_keywords(message: &str, keywords: &'static [&'static str]) -> Vec<&'static str> {
    keywords
        .iter()
        .copied()
        .filter(|keyword| message.contains(keyword))
        .collect()
}

fn extract_bucket(tokens: &[&str], rule: &TimestampRule) -> Option<String> {
    let text = tokens.get(..rule.tokens)?.join(" ");
    let timestamp = parse_log_timestamp(&text, rule.pattern, rule.implied_year).ok()?;
    Some(bucket_label(&timestamp, rule.granularity))
}
