//! Attribute and value extraction from annotation detail lines.

use regex::Regex;
use std::sync::LazyLock;

static DETAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\s*([^:]+):\s*(.*)").expect("invalid regex"));
static NUMERIC_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("invalid regex"));

/// A single parsed `key: description` detail line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailEntry {
    pub key: String,
    pub description: String,
}

/// Split detail lines into attribute entries and value entries.
///
/// An attribute documents a label dimension (e.g. `state`); a value
/// documents one enumerated value of such a dimension and is recognized by
/// its purely numeric key (optionally with a decimal point). Encounter order
/// is preserved within each category, and lines that do not match the
/// `* key: description` shape are dropped.
#[must_use]
pub fn extract_attributes_and_values(details: &[String]) -> (Vec<DetailEntry>, Vec<DetailEntry>) {
    let mut attributes = Vec::new();
    let mut values = Vec::new();

    for line in details {
        if !line.starts_with("* ") {
            continue;
        }

        let Some(captures) = DETAIL_REGEX.captures(line) else {
            continue;
        };

        let entry = DetailEntry {
            key: captures[1].trim().to_string(),
            description: captures[2].trim().to_string(),
        };

        if NUMERIC_KEY_REGEX.is_match(&entry.key) {
            values.push(entry);
        } else {
            attributes.push(entry);
        }
    }

    (attributes, values)
}
