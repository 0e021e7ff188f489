//! Report rendering.
//!
//! A [`Report`] is the ordered list of sections a format declares, with rows
//! already pulled from the aggregates and sorted. [`console`] and [`export`]
//! render the same report to stdout and to CSV.

pub mod console;
pub mod export;

use crate::analysis::Analysis;
use crate::logs::format::{FormatRules, Section, SortOrder, Table};

/// A section with its rows resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub layout: Section,
    pub rows: Vec<(String, usize)>,
}

impl ReportSection {
    pub fn is_anomalies(&self) -> bool {
        self.layout.table == Table::Anomalies
    }
}

/// Everything needed to render one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub sections: Vec<ReportSection>,
}

impl Report {
    pub fn build(rules: &FormatRules, analysis: &Analysis) -> Self {
        let sections = rules
            .sections
            .iter()
            .map(|layout| ReportSection {
                layout: *layout,
                rows: section_rows(layout, analysis),
            })
            .collect();
        Self { sections }
    }
}

fn section_rows(layout: &Section, analysis: &Analysis) -> Vec<(String, usize)> {
    let aggregates = &analysis.aggregates;
    let mut rows: Vec<(String, usize)> = match layout.table {
        Table::Categories => owned(aggregates.categories.iter()),
        Table::Actors => owned(aggregates.actors.iter()),
        Table::Keywords => owned(aggregates.keywords.iter()),
        Table::TimeBuckets => owned(aggregates.time_buckets.iter()),
        Table::Anomalies => owned(analysis.anomalies.iter()),
    };

    match layout.order {
        SortOrder::Insertion => {}
        SortOrder::CountDescending => rows.sort_by(|a, b| b.1.cmp(&a.1)),
        SortOrder::KeyAscending => rows.sort_by(|a, b| a.0.cmp(&b.0)),
    }
    rows
}

fn owned<'a>(rows: impl Iterator<Item = (&'a str, usize)>) -> Vec<(String, usize)> {
    rows.map(|(key, count)| (key.to_string(), count)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_reader;
    use crate::logs::format::{LINUX, WINDOWS};
    use std::io::Cursor;

    #[test]
    fn test_linux_requests_sorted_by_count() {
        let input = "sshd: rhost=a\nsshd: rhost=b\nsshd: rhost=b\nsshd: rhost=c\nsshd: rhost=c\n";
        let analysis = analyze_reader(Cursor::new(input), &LINUX).unwrap();
        let report = Report::build(&LINUX, &analysis);

        assert_eq!(report.sections.len(), 2);
        let keys: Vec<_> = report.sections[0].rows.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "c", "a"]);
        assert!(report.sections[1].is_anomalies());
        assert!(report.sections[1].rows.is_empty());
    }

    #[test]
    fn test_windows_sections_in_order() {
        let input = "2016-09-28 05:10:00, Info CBS Error\n\
                     2016-09-28 04:30:30, Warning CSI ok\n";
        let analysis = analyze_reader(Cursor::new(input), &WINDOWS).unwrap();
        let report = Report::build(&WINDOWS, &analysis);

        let headings: Vec<_> = report.sections.iter().map(|s| s.layout.heading).collect();
        assert_eq!(headings, vec!["Log Type", "Module", "Keyword", "Hour"]);
        assert_eq!(
            report.sections[0].rows,
            vec![("Info".to_string(), 1), ("Warning".to_string(), 1)]
        );
        assert_eq!(
            report.sections[3].rows,
            vec![
                ("2016-09-28 04:00:00".to_string(), 1),
                ("2016-09-28 05:00:00".to_string(), 1)
            ]
        );
    }
}
