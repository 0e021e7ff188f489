//! Shared helpers used by the analysis commands.
//!
//! - [`reader`] - Log file reader with `.gz` / `.zst` decompression
//! - [`processor`] - Line-by-line scan of one log file with skip accounting
//! - [`progress`] - Progress bar wrapper
//! - [`time`] - Timestamp parsing and time-bucket labels
//! - [`format`] - Number formatting for status output

pub mod format;
pub mod processor;
pub mod progress;
pub mod reader;
pub mod time;
