//! Failed-login anomaly rule.

use crate::analysis::aggregate::FrequencyTable;

/// Actors with more failed logins than this are flagged
pub const FAILED_LOGIN_THRESHOLD: usize = 10;

/// Actors whose failed-login count exceeds [`FAILED_LOGIN_THRESHOLD`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnomalySet {
    entries: Vec<(String, usize)>,
}

impl AnomalySet {
    /// Evaluate the rule over a complete failed-login table.
    ///
    /// Must run after the whole file is ingested. Flagged actors keep the
    /// table's first-seen order.
    pub fn detect(failed_logins: &FrequencyTable) -> Self {
        let entries = failed_logins
            .iter()
            .filter(|(_, count)| *count > FAILED_LOGIN_THRESHOLD)
            .map(|(actor, count)| (actor.to_string(), count))
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, actor: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(a, _)| a == actor)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(a, count)| (a.as_str(), *count))
    }
}
