//! Column-aligned console summary.

use crate::report::{Report, ReportSection};
use std::io::{self, Write};

const ANOMALIES_FOUND: &str = "Suspicious Activity Detected:";
const NO_ANOMALIES: &str = "No Suspicious Activity Detected.";

/// Write the human-readable summary of `report` to `out`
pub fn write_summary<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    for (i, section) in report.sections.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        if section.is_anomalies() {
            if section.rows.is_empty() {
                writeln!(out, "{}", NO_ANOMALIES)?;
                continue;
            }
            writeln!(out, "{}", ANOMALIES_FOUND)?;
        }
        write_section(section, out)?;
    }
    Ok(())
}

fn write_section<W: Write>(section: &ReportSection, out: &mut W) -> io::Result<()> {
    let width = section.layout.key_width;
    writeln!(
        out,
        "{:<width$}{}",
        section.layout.heading,
        section.layout.count_heading,
        width = width + 1
    )?;
    for (key, count) in &section.rows {
        writeln!(out, "{:<width$} {}", key, count, width = width)?;
    }
    Ok(())
}
