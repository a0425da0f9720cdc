//! Parsing of the extra-info annotation file.
//!
//! The file is line-oriented: a line starting with a metric name opens a
//! block for that metric, `+ ` lines carry description text, and `* ` lines
//! carry detail lines documenting label dimensions and enumerated values.
//! Every other line is ignored.

mod details;

pub use details::{DetailEntry, extract_attributes_and_values};

use crate::Result;
use ohno::IntoAppError;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static METRIC_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new("^pgagroal_[A-Za-z0-9_]+").expect("invalid regex"));

/// Hand-authored documentation for a single metric.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnotationInfo {
    /// Description text, one entry per `+ ` line, joined with newlines.
    pub description: String,

    /// Raw `* key: description` detail lines, in file order.
    pub details: Vec<String>,
}

/// Annotations for all metrics, keyed by metric name.
#[derive(Debug, Default)]
pub struct Annotations {
    by_name: HashMap<String, AnnotationInfo>,
}

impl Annotations {
    /// Look up the annotation for a metric.
    ///
    /// Metrics absent from the extra-info file yield an empty annotation, so
    /// downstream rendering can fall back to the exposition help text.
    #[must_use]
    pub fn lookup(&self, name: &str) -> AnnotationInfo {
        self.by_name.get(name).cloned().unwrap_or_default()
    }

    /// Number of annotated metrics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Parse an extra-info file into per-metric annotations.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Annotations> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).into_app_err_with(|| format!("unable to read extra info file '{}'", path.display()))?;
    Ok(parse(&text))
}

/// Parse extra-info text into per-metric annotations.
///
/// A line matching the metric-name pattern opens a new block and flushes the
/// previous one. `+ ` and `* ` lines accumulate into the open block; lines
/// outside any block are dropped.
#[must_use]
pub fn parse(text: &str) -> Annotations {
    let mut by_name = HashMap::new();
    let mut current: Option<(String, AnnotationInfo)> = None;

    for line in text.lines() {
        let line = line.trim_end();

        if METRIC_NAME_REGEX.is_match(line) {
            if let Some((name, info)) = current.take() {
                _ = by_name.insert(name, info);
            }
            current = Some((line.to_string(), AnnotationInfo::default()));
        } else if let Some(description) = line.strip_prefix("+ ") {
            if let Some((_, info)) = current.as_mut() {
                if !info.description.is_empty() {
                    info.description.push('\n');
                }
                info.description.push_str(description);
            }
        } else if line.starts_with("* ") {
            if let Some((_, info)) = current.as_mut() {
                info.details.push(line.to_string());
            }
        }
    }

    if let Some((name, info)) = current {
        _ = by_name.insert(name, info);
    }

    Annotations { by_name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_two_blocks() {
        let text = "\
pgagroal_state
+ The state of pgagroal.
+ 1 means running.
* value: The state value

pgagroal_active_connections
+ Number of active connections.
";

        let annotations = parse(text);
        assert_eq!(annotations.len(), 2);

        let state = annotations.lookup("pgagroal_state");
        assert_eq!(state.description, "The state of pgagroal.\n1 means running.");
        assert_eq!(state.details, vec!["* value: The state value".to_string()]);

        let active = annotations.lookup("pgagroal_active_connections");
        assert_eq!(active.description, "Number of active connections.");
        assert!(active.details.is_empty());
    }

    #[test]
    fn test_lookup_missing_metric_is_empty() {
        let annotations = parse("pgagroal_state\n+ The state.\n");

        let missing = annotations.lookup("pgagroal_no_such_metric");
        assert_eq!(missing, AnnotationInfo::default());
    }

    #[test]
    fn test_unrelated_lines_are_ignored() {
        let text = "\
# a comment
pgagroal_state
+ The state.
some stray prose
* 1: Running
";

        let annotations = parse(text);
        assert_eq!(annotations.len(), 1);

        let state = annotations.lookup("pgagroal_state");
        assert_eq!(state.description, "The state.");
        assert_eq!(state.details, vec!["* 1: Running".to_string()]);
    }

    #[test]
    fn test_lines_before_first_block_are_dropped() {
        let text = "+ orphan description\n* orphan: detail\npgagroal_state\n+ The state.\n";

        let annotations = parse(text);
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations.lookup("pgagroal_state").description, "The state.");
    }

    #[test]
    fn test_last_block_is_flushed() {
        let annotations = parse("pgagroal_state\n* value: The state value");
        assert_eq!(annotations.lookup("pgagroal_state").details.len(), 1);
    }

    #[test]
    fn test_parse_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pgagroal_state").unwrap();
        writeln!(file, "+ The state of pgagroal.").unwrap();

        let annotations = parse_file(file.path()).unwrap();
        assert_eq!(annotations.lookup("pgagroal_state").description, "The state of pgagroal.");
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("/nonexistent/extra.info");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unable to read"));
    }
}
