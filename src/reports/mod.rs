//! Documentation rendering.
//!
//! Three stateless renderers share the same metric records and differ only
//! in markup: the manual format (page-break marker, level-2 headings,
//! attribute/value tables), the general Markdown format, and the HTML
//! format. Each generator writes into a [`core::fmt::Write`] so callers can
//! render into a `String` and persist it with a single file write.

pub mod html;
pub mod manual;
pub mod markdown;

/// Collapse a multi-line annotation description into a single paragraph.
///
/// Newlines become spaces and runs of whitespace collapse to one space.
fn clean_description(description: &str) -> String {
    description.split_whitespace().collect::<Vec<_>>().join(" ")
}
