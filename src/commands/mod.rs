//! Command-line entry points.

mod generate;

pub use generate::{GenerateArgs, generate_docs};
