//! Single-file log analysis.
//!
//! Runs one format's pipeline end to end: scan the file, aggregate, apply
//! the failed-login rule, print the console summary and write the CSV.
//!
//! # Usage
//!
//! ```bash
//! # Linux auth log: requests per remote host and brute-force suspects
//! log-insight linux Linux_2k.log
//!
//! # Android logcat with a custom export path
//! log-insight android Android_2k.log --output reports/android.csv
//!
//! # Compressed inputs are decompressed on the fly
//! log-insight windows CBS.log.gz
//! ```
//!
//! # Output
//!
//! | format  | sections                                   |
//! |---------|--------------------------------------------|
//! | linux   | request count per IP, suspicious IPs       |
//! | android | priority, source, keyword, per-minute load |
//! | mac     | process, keyword, per-hour load            |
//! | windows | log type, module, keyword, per-hour load   |
//!
//! Nothing is written when the input cannot be read.

use crate::analysis::{analyze_file, Analysis};
use crate::logs::format::LogFormat;
use crate::report::{console, export, Report};
use anyhow::{Context, Result};

/// Analyze `log_file` and write the report.
///
/// The export goes to `output`, or to the format's default file name.
pub fn run(format: LogFormat, log_file: &str, output: Option<&str>) -> Result<Analysis> {
    let rules = format.rules();
    let output_file = output.unwrap_or(rules.default_output);

    let analysis = analyze_file(log_file, rules)?;
    analysis.stats.report();

    if !analysis.anomalies.is_empty() {
        tracing::warn!(
            flagged = analysis.anomalies.len(),
            "actors exceeded the failed-login threshold"
        );
    }

    let report = Report::build(rules, &analysis);

    console::write_summary(&report, &mut std::io::stdout().lock())
        .context("Failed to write summary")?;

    export::write_csv_file(&report, output_file)?;
    println!("\nResults saved to {}", output_file);

    Ok(analysis)
}
