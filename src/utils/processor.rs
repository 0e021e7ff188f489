//! Log file scanning.
//!
//! [`LineProcessor`] reads one log file to completion, runs every line through
//! the format's tokenizer, and hands accepted lines to a callback. Rejected
//! lines are counted, never surfaced as errors.

use crate::logs::format::FormatRules;
use crate::logs::parser::parse_line;
use crate::logs::types::{LineOutcome, ParsedLine};
use crate::utils::format::{format_number, percentage};
use crate::utils::progress::ProgressBar;
use crate::utils::reader::{open_buffered, Compression};
use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;

/// Statistics collected while scanning a log file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStats {
    /// Lines read from the file
    pub total_lines: usize,
    /// Lines accepted by the tokenizer
    pub parsed_lines: usize,
    /// Lines rejected (too few tokens, missing marker)
    pub skipped_lines: usize,
    /// Accepted lines whose timestamp did not parse
    pub timestamp_failures: usize,
}

impl ProcessStats {
    /// Print a summary of processing statistics to stderr
    pub fn report(&self) {
        eprintln!("\nProcessing Summary:");
        eprintln!("  Total lines: {}", format_number(self.total_lines));
        eprintln!("  Parsed lines: {}", format_number(self.parsed_lines));
        if self.skipped_lines > 0 {
            eprintln!(
                "  Skipped lines: {} ({:.2}%)",
                format_number(self.skipped_lines),
                percentage(self.skipped_lines, self.total_lines)
            );
        }
        if self.timestamp_failures > 0 {
            eprintln!(
                "  Unparsable timestamps: {}",
                format_number(self.timestamp_failures)
            );
        }
    }
}

/// Scans one log file with a fixed set of format rules
pub struct LineProcessor<'a> {
    file: &'a str,
    rules: &'a FormatRules,
    progress_label: String,
}

impl<'a> LineProcessor<'a> {
    pub fn new(file: &'a str, rules: &'a FormatRules) -> Self {
        Self {
            file,
            rules,
            progress_label: format!("Scanning {} log", rules.name),
        }
    }

    /// Read the whole file, calling `handler` for every accepted line.
    ///
    /// Fails only when the file cannot be opened or read.
    pub fn process<F>(self, handler: F) -> Result<ProcessStats>
    where
        F: FnMut(&ParsedLine),
    {
        eprintln!("[1/1] Processing: {}", self.file);

        let reader = open_buffered(self.file)?;

        let compressed = Compression::from_path(Path::new(self.file)).is_compressed();
        let file_size = std::fs::metadata(self.file)
            .ok()
            .filter(|_| !compressed)
            .map(|m| m.len() as usize);
        let progress = match file_size {
            Some(size) => ProgressBar::new(size, &self.progress_label),
            None => ProgressBar::new_spinner(&self.progress_label),
        };

        let stats = scan_lines(reader, self.rules, handler, |lines, bytes| {
            match file_size {
                Some(size) => progress.update(bytes.min(size)),
                None => progress.update(lines),
            }
        })
        .with_context(|| format!("Failed to read log file: {}", self.file))?;

        if let Some(size) = file_size {
            progress.update(size);
        }
        progress.finish_with_message(&format!(
            "Processed {} lines",
            format_number(stats.total_lines)
        ));

        tracing::info!(
            file = self.file,
            format = self.rules.name,
            total = stats.total_lines,
            parsed = stats.parsed_lines,
            skipped = stats.skipped_lines,
            "log scan complete"
        );

        Ok(stats)
    }
}

/// Run every line from `reader` through the tokenizer.
///
/// `on_progress` receives the line count and bytes consumed every 10k lines.
pub fn scan_lines<R, F, P>(
    reader: R,
    rules: &FormatRules,
    mut handler: F,
    mut on_progress: P,
) -> Result<ProcessStats>
where
    R: BufRead,
    F: FnMut(&ParsedLine),
    P: FnMut(usize, usize),
{
    let mut stats = ProcessStats::default();
    let mut bytes_read = 0;

    for line in reader.lines() {
        stats.total_lines += 1;
        let line =
            line.with_context(|| format!("Failed to read line {}", stats.total_lines))?;
        bytes_read += line.len() + 1;

        if stats.total_lines % 10_000 == 0 {
            on_progress(stats.total_lines, bytes_read);
        }

        match parse_line(&line, rules) {
            LineOutcome::Parsed(parsed) => {
                stats.parsed_lines += 1;
                if rules.timestamp.is_some() && parsed.bucket.is_none() {
                    stats.timestamp_failures += 1;
                }
                handler(&parsed);
            }
            LineOutcome::Skipped(reason) => {
                stats.skipped_lines += 1;
                tracing::debug!(line = stats.total_lines, %reason, "skipping line");
            }
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logs::format::{ANDROID, WINDOWS};
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_scan_counts_skips() {
        let input = "2016-09-28 04:30:30, Info CBS Loaded\n\
                     short line\n\
                     \n\
                     bad-date 04:30:30, Error CSI Failure\n";
        let mut actors = Vec::new();
        let stats = scan_lines(
            Cursor::new(input),
            &WINDOWS,
            |p| actors.push(p.actor.clone().unwrap()),
            |_, _| {},
        )
        .unwrap();

        assert_eq!(stats.total_lines, 4);
        assert_eq!(stats.parsed_lines, 2);
        assert_eq!(stats.skipped_lines, 2);
        assert_eq!(stats.timestamp_failures, 1);
        assert_eq!(actors, vec!["CBS", "CSI"]);
    }

    #[test]
    fn test_scan_empty_input() {
        let stats = scan_lines(Cursor::new(""), &ANDROID, |_| {}, |_, _| {}).unwrap();
        assert_eq!(stats, ProcessStats::default());
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let input: &[u8] = b"03-17 16:13:38.811 1702 2395 D Tag: ok\n\xff\xfe 1 2 3 4\n";
        let result = scan_lines(Cursor::new(input), &ANDROID, |_| {}, |_, _| {});
        assert!(result.is_err());
    }

    #[test]
    fn test_process_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "03-17 16:13:38.811  1702  2395 D WindowManager: Crash").unwrap();
        writeln!(temp, "03-17 16:13:38.820  1702  8671 I PowerManager: ok").unwrap();
        temp.flush().unwrap();

        let path = temp.path().to_string_lossy().to_string();
        let mut seen = 0;
        let stats = LineProcessor::new(&path, &ANDROID)
            .process(|_| seen += 1)
            .unwrap();

        assert_eq!(stats.parsed_lines, 2);
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_process_missing_file() {
        let result = LineProcessor::new("/nonexistent/Android_2k.log", &ANDROID).process(|_| {});
        assert!(result.is_err());
    }
}
