//! # Log Insight Tools
//!
//! Command-line tools that summarize plain-text system logs from four
//! platforms and export the counts to CSV.
//!
//! ## Supported logs
//!
//! - **Linux** authentication logs - requests per remote host (`rhost=`) and
//!   hosts with more than 10 failed logins
//! - **Android** logcat - counts by priority, tag, keyword and minute
//! - **macOS** system log - counts by process, keyword and hour
//! - **Windows** CBS/event logs - counts by log type, module, keyword and hour
//!
//! ## Architecture
//!
//! - [`logs`] - Per-format rules and the shared line tokenizer
//! - [`analysis`] - Frequency tables, time histograms, failed-login rule
//! - [`report`] - Console summary and CSV export
//! - [`commands`] - End-to-end command drivers
//! - [`utils`] - File reading, progress, time helpers
//!
//! Every pipeline is a single sequential pass: read the file, parse each line,
//! update the aggregates, then render. Lines that do not fit the format are
//! skipped and counted, never treated as errors. Only I/O failures abort a run.
//!
//! ## Example Usage
//!
//! ```bash
//! log-insight linux Linux_2k.log
//! log-insight mac Mac_2k.log --output mac.csv
//! log-insight windows Windows_2k.log.zst
//! ```
//!
//! ## Library use
//!
//! ```
//! use log_insight_tools::analysis::analyze_reader;
//! use log_insight_tools::logs::format::LogFormat;
//! use std::io::Cursor;
//!
//! let log = "2024-01-01 10:00:00, ERROR ModuleA something Critical happened\n";
//! let analysis = analyze_reader(Cursor::new(log), LogFormat::Windows.rules()).unwrap();
//! assert_eq!(analysis.aggregates.categories.get("ERROR"), 1);
//! ```

pub mod analysis;
pub mod commands;
pub mod logs;
pub mod report;
pub mod utils;
