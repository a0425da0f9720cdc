//! A tool to generate reference documentation for pgagroal's Prometheus metrics.
//!
//! # Overview
//!
//! `promdoc` scrapes the metrics endpoint of a running [**pgagroal**](https://agroal.github.io/pgagroal/)
//! instance, enriches each metric with hand-authored descriptions from an
//! extra-info file, and renders the combined data as Markdown and HTML
//! reference documentation.
//!
//! The whole program is a linear pipeline: fetch the exposition text, parse
//! it, join it with the annotations, and render the selected documents.
//!
//! # Quick Start
//!
//! Generate Markdown and HTML documentation (with a table of contents) for a
//! pgagroal instance exposing metrics on port 2346:
//!
//! ```bash
//! promdoc 2346 extra.info
//! ```
//!
//! This fetches `http://localhost:2346/metrics` and writes `prometheus.md`
//! and `prometheus.html` to the current directory.
//!
//! # Output Formats
//!
//! **General Markdown** (`--md`): one section per metric with the metric
//! type, description, attribute table, and an example sample line.
//!
//! **HTML** (`--html`): the same content as the general Markdown document,
//! rendered as a standalone HTML page with static styling.
//!
//! **Manual format** (`--manual`): a condensed layout intended for inclusion
//! in the pgagroal manual — a page-break marker, one heading per metric, and
//! attribute/value tables. When `--manual` is given, the general Markdown
//! and HTML documents are not produced.
//!
//! **Table of contents** (`--toc`): prepends a linked metric list and a
//! total count to the general Markdown and HTML documents.
//!
//! When none of `--manual`, `--toc`, `--md`, or `--html` are given, the
//! default is `--md --html --toc`.
//!
//! # The Extra-Info File
//!
//! The extra-info file supplies documentation that the exposition format
//! cannot carry. It is line-oriented:
//!
//! ```text
//! pgagroal_connection
//! + The connection information, one sample per configured
//! + connection slot.
//! * id: The connection identifier
//! * user: The user name
//! * state: The connection state
//! * 1: Connection is active
//! * 0: Connection is not active
//! ```
//!
//! A line starting with a metric name opens a block for that metric. Lines
//! prefixed `+ ` accumulate into the description; lines prefixed `* ` are
//! detail lines. A detail line with a numeric key documents one enumerated
//! value of the metric; any other key documents a label dimension. All other
//! lines are ignored.
//!
//! Metrics without a block in the extra-info file fall back to the help text
//! from the exposition format.
//!
//! # Exit Codes
//!
//! - `0`: documentation generated
//! - `1`: the fetch failed, the response was empty, or the extra-info file
//!   is missing

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod annotations;

#[doc(hidden)]
pub mod exposition;

#[doc(hidden)]
pub mod fetch;

#[doc(hidden)]
pub mod reports;
