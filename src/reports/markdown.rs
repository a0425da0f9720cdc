//! General Markdown rendering.

use super::clean_description;
use crate::Result;
use crate::annotations::extract_attributes_and_values;
use crate::exposition::MetricRecord;
use core::fmt::Write;

/// Generate the general Markdown document, optionally with a table of
/// contents.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn generate<W: Write>(records: &[MetricRecord], include_toc: bool, writer: &mut W) -> Result<()> {
    writeln!(writer, "# Prometheus Metrics Documentation")?;
    writeln!(writer)?;
    writeln!(writer, "This document contains all available metrics from the pgagroal system.")?;
    writeln!(writer)?;

    if include_toc {
        writeln!(writer, "## Table of Contents")?;
        writeln!(writer)?;

        for record in records {
            writeln!(writer, "- [{0}](#{0})", record.name)?;
        }

        writeln!(writer)?;
        writeln!(writer, "**Total metrics: {}**", records.len())?;
        writeln!(writer)?;
        writeln!(writer, "---")?;
        writeln!(writer)?;
    }

    writeln!(writer, "## pgagroal Metrics")?;
    writeln!(writer)?;

    for record in records {
        write_metric(record, writer)?;
    }

    Ok(())
}

fn write_metric<W: Write>(record: &MetricRecord, writer: &mut W) -> Result<()> {
    writeln!(writer, "### {}", record.name)?;
    writeln!(writer)?;
    writeln!(writer, "{} Type is {}.", record.help, record.metric_type)?;
    writeln!(writer)?;

    // Unlike the manual format, the help text stays as the description
    // paragraph even though it already appears in the type line above.
    let cleaned = clean_description(&record.extra.description);
    if cleaned.is_empty() {
        writeln!(writer, "{}", record.help)?;
    } else {
        writeln!(writer, "{cleaned}")?;
    }
    writeln!(writer)?;

    let (attributes, _) = extract_attributes_and_values(&record.extra.details);
    if !attributes.is_empty() {
        writeln!(writer, "**Attributes:**")?;
        writeln!(writer)?;
        writeln!(writer, "| Attribute | Value |")?;
        writeln!(writer, "| :-------- | :---- |")?;

        for attribute in &attributes {
            writeln!(writer, "| {} | {} |", attribute.key, attribute.description)?;
        }

        writeln!(writer)?;
    }

    writeln!(writer, "**Example:**")?;
    writeln!(writer)?;
    if let Some(example) = &record.example {
        writeln!(writer, "```")?;
        writeln!(writer, "{example}")?;
        writeln!(writer, "```")?;
    } else {
        writeln!(writer, "(No example available)")?;
    }
    writeln!(writer)?;

    writeln!(writer, "---")?;
    writeln!(writer)?;
    Ok(())
}
