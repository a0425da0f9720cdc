//! Manual-format rendering.
//!
//! Produces the condensed layout included in the pgagroal manual: a
//! page-break marker for the PDF toolchain, one level-2 heading per metric,
//! and an attribute table that carries the enumerated values in its first
//! row.

use super::clean_description;
use crate::Result;
use crate::annotations::extract_attributes_and_values;
use crate::exposition::MetricRecord;
use core::fmt::Write;

/// Generate the manual-format document for all metrics, in input order.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn generate<W: Write>(records: &[MetricRecord], writer: &mut W) -> Result<()> {
    writeln!(writer, "\\newpage")?;
    writeln!(writer)?;
    writeln!(writer, "# Prometheus metrics")?;
    writeln!(writer)?;
    writeln!(writer, "[**pgagroal**][pgagroal] has the following [Prometheus][prometheus] built-in metrics.")?;
    writeln!(writer)?;

    for record in records {
        write_metric(record, writer)?;
    }

    Ok(())
}

fn write_metric<W: Write>(record: &MetricRecord, writer: &mut W) -> Result<()> {
    let cleaned = clean_description(&record.extra.description);
    let description = if cleaned.is_empty() { record.help.as_str() } else { cleaned.as_str() };

    writeln!(writer, "## {}", record.name)?;
    writeln!(writer)?;
    writeln!(writer, "{description}")?;
    writeln!(writer)?;

    let (attributes, values) = extract_attributes_and_values(&record.extra.details);
    if attributes.is_empty() {
        return Ok(());
    }

    if values.is_empty() {
        writeln!(writer, "| Attribute | Description |")?;
        writeln!(writer, "| :-------- | :---------- |")?;

        for attribute in &attributes {
            writeln!(writer, "| {} | {} |", attribute.key, attribute.description)?;
        }
    } else {
        // All value entries are concatenated into a single cell carried by
        // the first attribute row.
        let values_cell = values
            .iter()
            .map(|value| format!("{}: {}", value.key, value.description))
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(writer, "| Attribute | Description | Values |")?;
        writeln!(writer, "| :-------- | :---------- | :----- |")?;

        for (index, attribute) in attributes.iter().enumerate() {
            if index == 0 {
                writeln!(writer, "| {} | {} | {values_cell} |", attribute.key, attribute.description)?;
            } else {
                writeln!(writer, "| {} | {} | |", attribute.key, attribute.description)?;
            }
        }
    }

    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::AnnotationInfo;

    fn record(name: &str, help: &str, description: &str, details: &[&str]) -> MetricRecord {
        MetricRecord {
            name: name.to_string(),
            help: help.to_string(),
            metric_type: "gauge".to_string(),
            example: None,
            extra: AnnotationInfo {
                description: description.to_string(),
                details: details.iter().map(ToString::to_string).collect(),
            },
        }
    }

    #[test]
    fn test_document_preamble() {
        let mut doc = String::new();
        generate(&[], &mut doc).unwrap();

        assert!(doc.starts_with("\\newpage\n\n# Prometheus metrics\n\n"));
        assert!(doc.contains("[**pgagroal**][pgagroal]"));
    }

    #[test]
    fn test_description_falls_back_to_help() {
        let mut doc = String::new();
        generate(&[record("pgagroal_state", "The state of pgagroal", "", &[])], &mut doc).unwrap();

        assert!(doc.contains("## pgagroal_state\n\nThe state of pgagroal\n"));
    }

    #[test]
    fn test_no_attributes_means_no_table() {
        let mut doc = String::new();
        generate(&[record("pgagroal_state", "The state", "A description.", &[])], &mut doc).unwrap();

        assert!(!doc.contains("| Attribute |"));
    }

    #[test]
    fn test_two_column_table_without_values() {
        let mut doc = String::new();
        let metric = record("pgagroal_connection", "The connection information", "", &["* id: The identifier", "* user: The user"]);
        generate(&[metric], &mut doc).unwrap();

        assert!(doc.contains("| Attribute | Description |\n| :-------- | :---------- |\n"));
        assert!(doc.contains("| id | The identifier |\n| user | The user |\n"));
        assert!(!doc.contains("| Values |"));
    }

    #[test]
    fn test_values_land_in_first_attribute_row_only() {
        let mut doc = String::new();
        let metric = record(
            "pgagroal_connection",
            "The connection information",
            "",
            &["* id: The identifier", "* user: The user", "* 1: Active", "* 0: Idle"],
        );
        generate(&[metric], &mut doc).unwrap();

        assert!(doc.contains("| Attribute | Description | Values |\n"));
        assert!(doc.contains("| id | The identifier | 1: Active, 0: Idle |\n"));
        assert!(doc.contains("| user | The user | |\n"));
    }
}
