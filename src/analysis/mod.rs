//! One-pass aggregation over a log file.
//!
//! - [`aggregate`] - Frequency tables and the time-bucket histogram
//! - [`anomaly`] - Failed-login threshold rule
//!
//! ```no_run
//! use log_insight_tools::analysis::analyze_file;
//! use log_insight_tools::logs::format::LogFormat;
//!
//! let analysis = analyze_file("Linux_2k.log", LogFormat::Linux.rules()).unwrap();
//! for (ip, count) in analysis.anomalies.iter() {
//!     println!("{ip}: {count} failed logins");
//! }
//! ```

pub mod aggregate;
pub mod anomaly;

use crate::analysis::aggregate::Aggregates;
use crate::analysis::anomaly::AnomalySet;
use crate::logs::format::FormatRules;
use crate::utils::processor::{scan_lines, LineProcessor, ProcessStats};
use anyhow::Result;
use std::io::BufRead;

/// Completed aggregation for one log file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub aggregates: Aggregates,
    pub anomalies: AnomalySet,
    pub stats: ProcessStats,
}

impl Analysis {
    fn finish(aggregates: Aggregates, stats: ProcessStats) -> Self {
        let anomalies = AnomalySet::detect(&aggregates.failed_logins);
        Self {
            aggregates,
            anomalies,
            stats,
        }
    }
}

/// Read `log_file` to completion and aggregate it with `rules`
pub fn analyze_file(log_file: &str, rules: &FormatRules) -> Result<Analysis> {
    let mut aggregates = Aggregates::new();
    let stats = LineProcessor::new(log_file, rules).process(|line| aggregates.record(line))?;
    Ok(Analysis::finish(aggregates, stats))
}

/// Aggregate lines from any buffered reader, without progress output
pub fn analyze_reader<R: BufRead>(reader: R, rules: &FormatRules) -> Result<Analysis> {
    let mut aggregates = Aggregates::new();
    let stats = scan_lines(reader, rules, |line| aggregates.record(line), |_, _| {})?;
    Ok(Analysis::finish(aggregates, stats))
}
