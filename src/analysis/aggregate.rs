//! Frequency tables and time-bucket histograms.
//!
//! Counts only ever increase during a run: keys are created on first sight
//! and never removed or decremented.

use crate::logs::types::ParsedLine;
use std::collections::{BTreeMap, HashMap};

/// Occurrence counts keyed by string, remembering first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `key`, creating it if absent
    pub fn record(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    /// Count for `key`, zero when never recorded
    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Entries by count, highest first; equal counts keep first-seen order
    pub fn sorted_by_count(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

/// Occurrence counts per time-bucket label, iterated in ascending label order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeHistogram {
    buckets: BTreeMap<String, usize>,
}

impl TimeHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: &str) {
        match self.buckets.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                self.buckets.insert(label.to_string(), 1);
            }
        }
    }

    pub fn get(&self, label: &str) -> usize {
        self.buckets.get(label).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.buckets.iter().map(|(label, count)| (label.as_str(), *count))
    }
}

/// All aggregates for one pipeline run.
///
/// Which tables fill up depends on the format: Linux uses `actors` (requests
/// per remote host) and `failed_logins`; the others use some of
/// `categories`, `actors`, `keywords` and `time_buckets`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregates {
    pub categories: FrequencyTable,
    pub actors: FrequencyTable,
    pub keywords: FrequencyTable,
    pub failed_logins: FrequencyTable,
    pub time_buckets: TimeHistogram,
}

impl Aggregates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one accepted line into every table it contributes to
    pub fn record(&mut self, line: &ParsedLine) {
        if let Some(category) = &line.category {
            self.categories.record(category);
        }
        if let Some(actor) = &line.actor {
            self.actors.record(actor);
            if line.failed_login {
                self.failed_logins.record(actor);
            }
        }
        for keyword in &line.keywords {
            self.keywords.record(keyword);
        }
        if let Some(bucket) = &line.bucket {
            self.time_buckets.record(bucket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_table_keeps_first_seen_order() {
        let mut table = FrequencyTable::new();
        for key in ["I", "D", "I", "E", "D", "I"] {
            table.record(key);
        }
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("I", 3), ("D", 2), ("E", 1)]);
        assert_eq!(table.total(), 6);
        assert_eq!(table.get("W"), 0);
    }

    #[test]
    fn test_sorted_by_count_is_stable() {
        let mut table = FrequencyTable::new();
        for key in ["b", "a", "c", "c", "a"] {
            table.record(key);
        }
        assert_eq!(table.sorted_by_count(), vec![("a", 2), ("c", 2), ("b", 1)]);
    }

    #[test]
    fn test_histogram_sorted_by_label() {
        let mut hist = TimeHistogram::new();
        hist.record("2016-09-28 05:00:00");
        hist.record("2016-09-28 04:00:00");
        hist.record("2016-09-28 05:00:00");
        hist.record("2016-09-27 23:00:00");

        let labels: Vec<_> = hist.iter().map(|(label, _)| label).collect();
        assert_eq!(
            labels,
            vec![
                "2016-09-27 23:00:00",
                "2016-09-28 04:00:00",
                "2016-09-28 05:00:00"
            ]
        );
        assert_eq!(hist.get("2016-09-28 05:00:00"), 2);
    }

    #[test]
    fn test_record_parsed_line() {
        let mut aggregates = Aggregates::new();
        aggregates.record(&ParsedLine {
            category: Some("ERROR".into()),
            actor: Some("ModuleA".into()),
            keywords: vec!["Critical"],
            bucket: Some("2024-01-01 10:00:00".into()),
            failed_login: false,
        });

        assert_eq!(aggregates.categories.get("ERROR"), 1);
        assert_eq!(aggregates.actors.get("ModuleA"), 1);
        assert_eq!(aggregates.keywords.get("Critical"), 1);
        assert_eq!(aggregates.time_buckets.get("2024-01-01 10:00:00"), 1);
        assert!(aggregates.failed_logins.is_empty());
    }

    #[test]
    fn test_failed_login_keyed_by_actor() {
        let mut aggregates = Aggregates::new();
        let line = ParsedLine {
            actor: Some("10.0.0.5".into()),
            failed_login: true,
            ..ParsedLine::default()
        };
        aggregates.record(&line);
        aggregates.record(&line);

        assert_eq!(aggregates.actors.get("10.0.0.5"), 2);
        assert_eq!(aggregates.failed_logins.get("10.0.0.5"), 2);
    }
}
