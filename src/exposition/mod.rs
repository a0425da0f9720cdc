//! Parsing of the Prometheus exposition format.
//!
//! Only the documentation-relevant parts of the format are extracted: the
//! `HELP`/`TYPE` comment pairs and one representative sample line per
//! metric. pgagroal emits comments as `#HELP name text`; the exposition
//! standard spells them `# HELP name text`. Both forms are accepted.

use crate::annotations::{AnnotationInfo, Annotations};
use regex::Regex;
use std::sync::LazyLock;

static HELP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s*HELP\s+(\S+)\s+(.*)$").expect("invalid regex"));
static TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s*TYPE\s+(\S+)\s+(\S+)").expect("invalid regex"));

/// Type token reported when no matching `TYPE` declaration follows a `HELP`
/// line.
const UNKNOWN_TYPE: &str = "unknown";

/// One documented metric scraped from the exposition text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricRecord {
    pub name: String,

    /// One-line help text from the `HELP` comment.
    pub help: String,

    /// Raw type token from the `TYPE` comment, or `unknown`.
    pub metric_type: String,

    /// Best sample line for the metric, if any.
    pub example: Option<String>,

    /// Joined annotation; empty when the extra-info file has no block for
    /// this metric.
    pub extra: AnnotationInfo,
}

/// Parse exposition text into metric records, in `HELP` line order.
///
/// A `TYPE` declaration only counts when it names the same metric on the
/// line immediately following its `HELP` line. Metric name uniqueness is not
/// enforced; duplicate `HELP` lines produce duplicate records.
#[must_use]
pub fn parse(text: &str) -> Vec<MetricRecord> {
    let mut records = Vec::new();
    let mut lines = text.lines().peekable();

    while let Some(line) = lines.next() {
        let Some(captures) = HELP_REGEX.captures(line.trim()) else {
            continue;
        };

        let name = captures[1].to_string();
        let help = captures[2].to_string();

        let metric_type = lines
            .peek()
            .and_then(|next| declared_type(next, &name))
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string());

        let example = find_best_example(&name, text);

        records.push(MetricRecord {
            name,
            help,
            metric_type,
            example,
            extra: AnnotationInfo::default(),
        });
    }

    records
}

/// Attach annotations to metric records by name.
#[must_use]
pub fn join_annotations(records: Vec<MetricRecord>, annotations: &Annotations) -> Vec<MetricRecord> {
    records
        .into_iter()
        .map(|record| {
            let extra = annotations.lookup(&record.name);
            MetricRecord { extra, ..record }
        })
        .collect()
}

/// Extract the type token from a `TYPE` line declaring the given metric.
fn declared_type(line: &str, name: &str) -> Option<String> {
    let captures = TYPE_REGEX.captures(line)?;
    (&captures[1] == name).then(|| captures[2].to_string())
}

/// Pick the best sample line for a metric from the full exposition text.
///
/// Sample lines carrying a label set (`{`) outrank bare ones; the earliest
/// line at the highest priority wins.
fn find_best_example(name: &str, text: &str) -> Option<String> {
    let mut best: Option<(u8, &str)> = None;

    for line in text.lines() {
        if !line.starts_with(name) {
            continue;
        }

        let priority = if line.contains('{') { 2 } else { 1 };
        if best.is_none_or(|(best_priority, _)| priority > best_priority) {
            best = Some((priority, line));
        }
    }

    best.map(|(_, line)| line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations;

    const EXPOSITION: &str = "\
#HELP pgagroal_state The state of pgagroal
#TYPE pgagroal_state gauge
pgagroal_state 1
#HELP pgagroal_connection The connection information
#TYPE pgagroal_connection gauge
pgagroal_connection{id=\"0\",user=\"mydb\"} 1
pgagroal_connection{id=\"1\",user=\"mydb\"} 0
";

    #[test]
    fn test_one_record_per_help_line() {
        let records = parse(EXPOSITION);

        let help_lines = EXPOSITION.lines().filter(|line| line.starts_with("#HELP")).count();
        assert_eq!(records.len(), help_lines);
        assert_eq!(records[0].name, "pgagroal_state");
        assert_eq!(records[0].help, "The state of pgagroal");
        assert_eq!(records[1].name, "pgagroal_connection");
    }

    #[test]
    fn test_type_from_following_line() {
        let records = parse(EXPOSITION);
        assert_eq!(records[0].metric_type, "gauge");
        assert_eq!(records[1].metric_type, "gauge");
    }

    #[test]
    fn test_missing_type_line_is_unknown() {
        let records = parse("#HELP pgagroal_state The state of pgagroal\npgagroal_state 1\n");
        assert_eq!(records[0].metric_type, "unknown");
    }

    #[test]
    fn test_type_for_other_metric_is_unknown() {
        let text = "\
#HELP pgagroal_state The state of pgagroal
#TYPE pgagroal_other gauge
";
        let records = parse(text);
        assert_eq!(records[0].metric_type, "unknown");
    }

    #[test]
    fn test_type_not_immediately_following_is_unknown() {
        let text = "\
#HELP pgagroal_state The state of pgagroal
pgagroal_state 1
#TYPE pgagroal_state gauge
";
        let records = parse(text);
        assert_eq!(records[0].metric_type, "unknown");
    }

    #[test]
    fn test_spaced_comment_form_is_accepted() {
        let text = "\
# HELP pgagroal_state The state of pgagroal
# TYPE pgagroal_state gauge
pgagroal_state 1
";
        let records = parse(text);
        assert_eq!(records[0].name, "pgagroal_state");
        assert_eq!(records[0].help, "The state of pgagroal");
        assert_eq!(records[0].metric_type, "gauge");
    }

    #[test]
    fn test_labeled_example_outranks_bare() {
        let records = parse(EXPOSITION);
        assert_eq!(
            records[1].example.as_deref(),
            Some("pgagroal_connection{id=\"0\",user=\"mydb\"} 1")
        );
    }

    #[test]
    fn test_labeled_example_wins_regardless_of_order() {
        let text = "\
#HELP pgagroal_connection The connection information
#TYPE pgagroal_connection gauge
pgagroal_connection 2
pgagroal_connection{id=\"0\"} 1
";
        let records = parse(text);
        assert_eq!(records[0].example.as_deref(), Some("pgagroal_connection{id=\"0\"} 1"));
    }

    #[test]
    fn test_no_sample_line_means_no_example() {
        let records = parse("#HELP pgagroal_state The state of pgagroal\n");
        assert_eq!(records[0].example, None);
    }

    #[test]
    fn test_duplicate_help_lines_produce_duplicate_records() {
        let text = "\
#HELP pgagroal_state The state of pgagroal
#HELP pgagroal_state The state of pgagroal
";
        let records = parse(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, records[1].name);
    }

    #[test]
    fn test_join_attaches_annotations_by_name() {
        let annotations = annotations::parse("pgagroal_state\n+ The state.\n* 1: Running\n");
        let records = join_annotations(parse(EXPOSITION), &annotations);

        assert_eq!(records[0].extra.description, "The state.");
        assert_eq!(records[0].extra.details, vec!["* 1: Running".to_string()]);
        assert_eq!(records[1].extra, AnnotationInfo::default());
    }
}
