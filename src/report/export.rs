//! CSV export.
//!
//! Each section becomes a two-column header row followed by one row per key.
//! Sections are separated by a single empty line. An empty section keeps its
//! header and has no rows.

use crate::report::Report;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct CountRow<'a> {
    key: &'a str,
    count: usize,
}

/// Write `report` as CSV to `out`
pub fn write_csv<W: Write>(report: &Report, mut out: W) -> Result<()> {
    for (i, section) in report.sections.iter().enumerate() {
        if i > 0 {
            // An empty csv record renders as `""`, so the separator line is
            // written to the sink directly between per-section writers.
            out.write_all(b"\n")?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut out);
        writer.write_record([section.layout.heading, section.layout.count_heading])?;
        for (key, count) in &section.rows {
            writer.serialize(CountRow {
                key,
                count: *count,
            })?;
        }
        writer.flush()?;
    }

    out.flush()?;
    Ok(())
}

/// Write `report` to the CSV file at `path`, creating parent directories
pub fn write_csv_file(report: &Report, path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create output file: {}", path))?;
    write_csv(report, file).with_context(|| format!("Failed to write CSV: {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_reader;
    use crate::logs::format::{FormatRules, ANDROID, LINUX, MAC};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn export(input: &str, rules: &FormatRules) -> String {
        let analysis = analyze_reader(Cursor::new(input.to_string()), rules).unwrap();
        let mut out = Vec::new();
        write_csv(&Report::build(rules, &analysis), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_linux_export_without_anomalies() {
        let csv = export("sshd: rhost=10.0.0.5\nsshd: rhost=10.0.0.6\nsshd: rhost=10.0.0.6\n", &LINUX);
        assert_eq!(
            csv,
            "IP Address,Request Count\n\
             10.0.0.6,2\n\
             10.0.0.5,1\n\
             \n\
             IP Address,Failed Login Attempts\n"
        );
    }

    #[test]
    fn test_mac_export_sections() {
        let input = "Jul 1 10:00:01 host launchd[1]: Critical\n\
                     Jul 1 09:00:55 host kernel[0]: Error\n";
        let csv = export(input, &MAC);
        assert_eq!(
            csv,
            "Process,Count\n\
             host,2\n\
             \n\
             Keyword,Count\n\
             Critical,1\n\
             Error,1\n\
             \n\
             Hour,Activity Count\n\
             2024-07-01 09:00:00,1\n\
             2024-07-01 10:00:00,1\n"
        );
    }

    #[test]
    fn test_empty_section_keeps_header_and_separator() {
        let csv = export("03-17 16:13:38.811 1702 2395 I Tag: fine\n", &ANDROID);
        assert_eq!(
            csv,
            "Log Priority,Count\n\
             I,1\n\
             \n\
             Source,Count\n\
             Tag:,1\n\
             \n\
             Keyword,Count\n\
             \n\
             Minute,Activity Count\n\
             1900-03-17 16:13,1\n"
        );
    }

    #[test]
    fn test_keys_with_commas_are_quoted() {
        let csv = export("authentication failure rhost=a,b\n", &LINUX);
        assert!(csv.contains("\"a,b\",1\n"));
    }

    #[test]
    fn test_write_csv_file_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out.csv");
        let analysis = analyze_reader(Cursor::new("sshd: rhost=h\n"), &LINUX).unwrap();

        write_csv_file(&Report::build(&LINUX, &analysis), path.to_str().unwrap()).unwrap();
        assert!(path.exists());
    }
}
