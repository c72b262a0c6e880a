//! loglex line assembler.
//!
//! Drives the scanner over a [`BufRead`](std::io::BufRead), groups tokens
//! into lines and classifies every line against a pattern catalog.
//!
//! ```text
//! input ──▶ Scanner ──▶ Parser ──▶ Catalog::classify ──▶ LineSink
//! ```
//!
//! The core never touches the process: illegal input and I/O failures come
//! back as [`ParseError`] values.

mod error;
mod options;
mod parser;
mod sink;

pub use error::ParseError;
pub use options::{IllegalPolicy, ParseOptions};
pub use parser::{Parser, RunSummary};
pub use sink::{ClassifiedLine, LineSink};

use loglex_patterns::Catalog;

/// Classify every line of `source` with the default options.
pub fn parse_str<'c>(
    source: &str,
    catalog: &'c Catalog,
) -> Result<Vec<ClassifiedLine<'c>>, ParseError> {
    let mut lines = Vec::new();
    Parser::new(source.as_bytes(), catalog).run(&mut lines)?;
    Ok(lines)
}
