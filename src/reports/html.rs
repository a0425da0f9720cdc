//! HTML rendering.
//!
//! Mirrors the general Markdown layout with HTML tags and a fixed stylesheet.
//! The metric name is used verbatim as both the heading text and the anchor
//! id so that table-of-contents links always match their headings.

use super::clean_description;
use crate::Result;
use crate::annotations::extract_attributes_and_values;
use crate::exposition::MetricRecord;
use core::fmt::Write;

/// Generate the HTML document, optionally with a table of contents.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn generate<W: Write>(records: &[MetricRecord], include_toc: bool, writer: &mut W) -> Result<()> {
    let mut generator = HtmlGenerator::new(writer, include_toc);
    generator.generate(records)
}

struct HtmlGenerator<'a, W: Write> {
    writer: &'a mut W,
    include_toc: bool,
}

impl<'a, W: Write> HtmlGenerator<'a, W> {
    const fn new(writer: &'a mut W, include_toc: bool) -> Self {
        Self { writer, include_toc }
    }

    fn generate(&mut self, records: &[MetricRecord]) -> Result<()> {
        self.write_header()?;

        if self.include_toc {
            self.write_toc(records)?;
        }

        writeln!(self.writer, "<h2>pgagroal Metrics</h2>")?;
        for record in records {
            self.write_metric(record)?;
        }

        self.write_footer()
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "<html>")?;
        writeln!(self.writer, "  <head>")?;
        writeln!(self.writer, "    <title>pgagroal Prometheus Metrics Documentation</title>")?;
        self.write_styles()?;
        writeln!(self.writer, "  </head>")?;
        writeln!(self.writer, "  <body>")?;
        writeln!(self.writer, "  <h1>pgagroal Prometheus Metrics Documentation</h1>")?;
        writeln!(
            self.writer,
            "  <p>This document contains all available metrics from the pgagroal connection pooler system.</p>"
        )?;
        Ok(())
    }

    fn write_styles(&mut self) -> Result<()> {
        writeln!(self.writer, "    <style>")?;
        writeln!(self.writer, "      body {{ font-family: sans-serif; line-height: 1.4; padding: 15px; }}")?;
        writeln!(self.writer, "      h1 {{ border-bottom: 2px solid #ccc; padding-bottom: 5px;}}")?;
        writeln!(self.writer, "      h2 {{ border-bottom: 1px solid #eee; padding-bottom: 5px; margin-top: 25px;}}")?;
        writeln!(self.writer, "      h3 {{ border-bottom: 1px solid #f0f0f0; padding-bottom: 3px; margin-top: 20px;}}")?;
        writeln!(
            self.writer,
            "      table {{ border-collapse: collapse; width: 100%; margin: 15px 0; border: 1px solid #ccc; }}"
        )?;
        writeln!(
            self.writer,
            "      th, td {{ border: 1px solid #ddd; padding: 6px; text-align: left; vertical-align: top; word-wrap: break-word; }}"
        )?;
        writeln!(self.writer, "      th {{ background-color: #f9f9f9; font-weight: bold; }}")?;
        writeln!(
            self.writer,
            "      pre {{ background-color: #f8f8f8; padding: 8px; border: 1px solid #ddd; border-radius: 3px; overflow-x: auto; white-space: pre-wrap; word-wrap: break-word; }}"
        )?;
        writeln!(self.writer, "      ul {{ margin-top: 5px; padding-left: 25px; }}")?;
        writeln!(self.writer, "      li {{ margin-bottom: 4px; }}")?;
        writeln!(
            self.writer,
            "      .toc {{ margin-bottom: 20px; padding: 10px; background-color: #fdfdfd; border: 1px solid #eee;}}"
        )?;
        writeln!(self.writer, "      .toc h2 {{ border: none; margin-top: 0;}}")?;
        writeln!(self.writer, "      .toc ul {{ list-style-type: none; padding-left: 0; }}")?;
        writeln!(self.writer, "      .toc li a {{ text-decoration: none; }}")?;
        writeln!(self.writer, "      .toc li a:hover {{ text-decoration: underline; }}")?;
        writeln!(self.writer, "    </style>")?;
        Ok(())
    }

    fn write_toc(&mut self, records: &[MetricRecord]) -> Result<()> {
        writeln!(self.writer, "<div class=\"toc\">")?;
        writeln!(self.writer, "<h2>Table of Contents</h2>")?;
        writeln!(self.writer, "<ul>")?;

        for record in records {
            writeln!(self.writer, "  <li><a href=\"#{0}\">{0}</a></li>", record.name)?;
        }

        writeln!(self.writer, "</ul>")?;
        writeln!(self.writer, "<p>Total metrics: {}</p>", records.len())?;
        writeln!(self.writer, "</div>")?;
        Ok(())
    }

    fn write_metric(&mut self, record: &MetricRecord) -> Result<()> {
        // The name goes out verbatim as heading text and anchor id; any
        // escaping or slugification here would break the TOC links.
        writeln!(self.writer, "<h3 id=\"{0}\">{0}</h3>", record.name)?;
        writeln!(self.writer, "<p>{} Type is {}.</p>", record.help, record.metric_type)?;

        let cleaned = clean_description(&record.extra.description);
        if cleaned.is_empty() {
            writeln!(self.writer, "<p>{}</p>", record.help)?;
        } else {
            writeln!(self.writer, "<p>{cleaned}</p>")?;
        }

        let (attributes, _) = extract_attributes_and_values(&record.extra.details);
        if !attributes.is_empty() {
            writeln!(self.writer, "<p><strong>Attributes:</strong></p>")?;
            writeln!(self.writer, "<table>")?;
            writeln!(self.writer, "<thead><tr><th>Attribute</th><th>Value</th></tr></thead>")?;
            writeln!(self.writer, "<tbody>")?;

            for attribute in &attributes {
                writeln!(self.writer, "  <tr><td>{}</td><td>{}</td></tr>", attribute.key, attribute.description)?;
            }

            writeln!(self.writer, "</tbody>")?;
            writeln!(self.writer, "</table>")?;
        }

        writeln!(self.writer, "<p><strong>Example:</strong></p>")?;
        if let Some(example) = &record.example {
            writeln!(self.writer, "<pre>{example}</pre>")?;
        } else {
            writeln!(self.writer, "<p>(No example available)</p>")?;
        }

        writeln!(self.writer)?;
        Ok(())
    }

    fn write_footer(&mut self) -> Result<()> {
        writeln!(self.writer, "  </body>")?;
        writeln!(self.writer, "</html>")?;
        Ok(())
    }
}
