//! Line printers.
//!
//! A [`Printer`] is the CLI's [`LineSink`]: it renders each classified line
//! in the configured [`Format`] and writes it out immediately.
//!
//! ```text
//! text   1: [ 12 : 30 : 00 ] started
//!          [timestamp]
//! debug  1: <punctuation>: [ <number>: 12 ...
//!          [timestamp]
//! json   {"number":1,"text":"[ 12 ...","tokens":[...],"matches":["timestamp"]}
//! ```

use std::io::{self, Write};

use loglex_ir::Line;
use loglex_parse::{ClassifiedLine, LineSink};

use crate::config::{CliConfig, Format};

/// Writes classified lines to `out`.
#[derive(Debug)]
pub struct Printer<W> {
    out: W,
    format: Format,
    matched_only: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, config: &CliConfig) -> Self {
        Printer {
            out,
            format: config.format,
            matched_only: config.matched_only,
        }
    }

    /// Flush and return the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_plain(&mut self, number: usize, body: &str, matches: &[&str]) -> io::Result<()> {
        writeln!(self.out, "{number}: {body}")?;
        if !matches.is_empty() {
            writeln!(self.out, "  [{}]", matches.join(", "))?;
        }
        Ok(())
    }

    fn write_json(&mut self, number: usize, line: &Line, matches: &[&str]) -> io::Result<()> {
        let record = LineJson {
            number,
            text: line.to_string(),
            tokens: line,
            matches,
        };
        serde_json::to_writer(&mut self.out, &record)?;
        writeln!(self.out)
    }
}

impl<'c, W: Write> LineSink<'c> for Printer<W> {
    fn accept(&mut self, classified: ClassifiedLine<'c>) -> io::Result<()> {
        if self.matched_only && !classified.is_match() {
            return Ok(());
        }
        let ClassifiedLine {
            number,
            line,
            matches,
        } = classified;
        match self.format {
            Format::Text => self.write_plain(number, &line.to_string(), &matches),
            Format::Debug => self.write_plain(number, &line.debug_string(), &matches),
            Format::Json => self.write_json(number, &line, &matches),
        }
    }
}

#[derive(serde::Serialize)]
struct LineJson<'a> {
    number: usize,
    text: String,
    tokens: &'a Line,
    matches: &'a [&'a str],
}
