//! Documentation generation pipeline.
//!
//! A straight-line sequence with no retries: fetch the exposition text,
//! validate the inputs, parse and join, then render the selected outputs.
//! Every failure before rendering aborts the whole run, so no partial
//! document is ever left behind.

use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use ohno::bail;
use promdoc::Result;
use promdoc::annotations;
use promdoc::exposition;
use promdoc::fetch::fetch_metrics;
use promdoc::reports;
use std::fs;

/// Output file for the Markdown documents (manual and general).
const MARKDOWN_FILE: &str = "prometheus.md";

/// Output file for the HTML document.
const HTML_FILE: &str = "prometheus.html";

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Port the pgagroal metrics endpoint listens on
    #[arg(value_name = "PORT")]
    pub port: u16,

    /// Path to the extra-info file with per-metric descriptions
    #[arg(value_name = "PATH")]
    pub extra_info_file: Utf8PathBuf,

    /// Generate Markdown in the manual format (page-break marker, attribute
    /// tables); suppresses the general Markdown/HTML outputs
    #[arg(long, help_heading = "Output Selection")]
    pub manual: bool,

    /// Prepend a table of contents to the generated documents
    #[arg(long, help_heading = "Output Selection")]
    pub toc: bool,

    /// Generate the detailed Markdown output
    #[arg(long, help_heading = "Output Selection")]
    pub md: bool,

    /// Generate the HTML output
    #[arg(long, help_heading = "Output Selection")]
    pub html: bool,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// The resolved set of documents to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OutputSelection {
    manual: bool,
    toc: bool,
    md: bool,
    html: bool,
}

impl OutputSelection {
    /// Resolve the output flags, defaulting to Markdown + HTML with a table
    /// of contents when no output option was requested.
    fn resolve(args: &GenerateArgs) -> Self {
        if args.manual || args.toc || args.md || args.html {
            Self {
                manual: args.manual,
                toc: args.toc,
                md: args.md,
                html: args.html,
            }
        } else {
            Self {
                manual: false,
                toc: true,
                md: true,
                html: true,
            }
        }
    }
}

/// Run the whole pipeline: fetch, parse, join, render.
///
/// # Errors
///
/// Returns an error if the fetch fails, the response body is empty, or the
/// extra-info file is missing or unreadable.
pub async fn generate_docs(args: &GenerateArgs) -> Result<()> {
    init_logging(args.log_level);

    let outputs = OutputSelection::resolve(args);

    let body = fetch_metrics(args.port).await?;
    if body.trim().is_empty() {
        bail!("fetched metrics content is empty");
    }
    log::debug!("fetched {} bytes of exposition text", body.len());

    if !args.extra_info_file.exists() {
        bail!("extra info file '{}' not found", args.extra_info_file);
    }

    let annotations = annotations::parse_file(&args.extra_info_file)?;
    log::info!("parsed {} annotation blocks", annotations.len());

    let records = exposition::join_annotations(exposition::parse(&body), &annotations);
    log::info!("parsed {} metrics", records.len());

    if outputs.manual {
        let mut doc = String::new();
        reports::manual::generate(&records, &mut doc)?;
        fs::write(MARKDOWN_FILE, doc)?;
        println!("Manual documentation generated: {MARKDOWN_FILE}");
    } else {
        if outputs.md {
            let mut doc = String::new();
            reports::markdown::generate(&records, outputs.toc, &mut doc)?;
            fs::write(MARKDOWN_FILE, doc)?;
            println!("Markdown documentation generated: {MARKDOWN_FILE}");
        }

        if outputs.html {
            let mut doc = String::new();
            reports::html::generate(&records, outputs.toc, &mut doc)?;
            fs::write(HTML_FILE, doc)?;
            println!("HTML documentation generated: {HTML_FILE}");
        }
    }

    println!("Total metrics documented: {}", records.len());
    Ok(())
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    if log_level == LogLevel::None {
        return;
    }

    let level = match log_level {
        LogLevel::None => return, // Already checked above, but being explicit
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug) || matches!(log_level, LogLevel::Trace))
        .init();
}
