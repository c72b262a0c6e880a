//! Line assembler.
//!
//! Pulls tokens from the scanner and groups them into lines:
//!
//! | Token | Action |
//! |-------|--------|
//! | Number, Word, Punctuation | append to the current line |
//! | Whitespace | drop |
//! | Newline | flush the current line |
//! | Illegal | stop, or drop under [`IllegalPolicy::Skip`] |
//! | EndOfStream | flush the current line, finish |
//!
//! Flushing classifies the line against the catalog and hands the result to
//! the sink. The line that ends at EndOfStream is flushed even when empty,
//! so `"a\n"` produces two lines.

use std::io::BufRead;

use loglex_ir::{Kind, Line, Token};
use loglex_lexer_core::Scanner;
use loglex_patterns::Catalog;

use crate::error::ParseError;
use crate::options::{IllegalPolicy, ParseOptions};
use crate::sink::{ClassifiedLine, LineSink};

/// Counts for a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines handed to the sink.
    pub lines: usize,
    /// Lines that matched at least one pattern.
    pub matched: usize,
    /// Illegal tokens dropped under [`IllegalPolicy::Skip`].
    pub skipped: usize,
}

/// Drives a [`Scanner`] over one input and assembles classified lines.
///
/// The parser holds one token of pushback on top of the scanner; see
/// [`unscan`](Self::unscan).
#[derive(Debug)]
pub struct Parser<'c, R> {
    scanner: Scanner<R>,
    catalog: &'c Catalog,
    options: ParseOptions,
    /// Token returned by the next `scan()` instead of a fresh one.
    pending: Option<Token>,
    line: Line,
    /// 1-based input line the scanner is on. Unlike `summary.lines`, every
    /// line break counts, including those inside one newline run.
    physical_line: usize,
    summary: RunSummary,
}

impl<'c, R: BufRead> Parser<'c, R> {
    pub fn new(input: R, catalog: &'c Catalog) -> Self {
        Self::with_options(input, catalog, ParseOptions::default())
    }

    pub fn with_options(input: R, catalog: &'c Catalog, options: ParseOptions) -> Self {
        Parser {
            scanner: Scanner::new(input),
            catalog,
            options,
            pending: None,
            line: Line::new(),
            physical_line: 1,
            summary: RunSummary::default(),
        }
    }

    /// Next token, from the pushback slot if it is full.
    pub fn scan(&mut self) -> Token {
        match self.pending.take() {
            Some(token) => token,
            None => self.scanner.next_token(),
        }
    }

    /// Push `token` back so the next [`scan`](Self::scan) returns it.
    ///
    /// The slot holds one token. Unscanning twice without a scan in between
    /// drops the first token (and trips a debug assertion).
    pub fn unscan(&mut self, token: Token) {
        debug_assert!(self.pending.is_none(), "pushback holds one token");
        self.pending = Some(token);
    }

    /// Kind of the next token, without consuming it.
    pub fn peek_kind(&mut self) -> Kind {
        let token = self.scan();
        let kind = token.kind;
        self.unscan(token);
        kind
    }

    /// Assemble lines until the input ends, handing each to `sink`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run<S>(mut self, sink: &mut S) -> Result<RunSummary, ParseError>
    where
        S: LineSink<'c> + ?Sized,
    {
        loop {
            let token = self.scan();
            match token.kind {
                Kind::EndOfStream => {
                    if let Some(err) = self.scanner.take_error() {
                        return Err(ParseError::Io(err));
                    }
                    self.flush(sink)?;
                    let RunSummary {
                        lines,
                        matched,
                        skipped,
                    } = self.summary;
                    tracing::debug!(lines, matched, skipped, "done");
                    return Ok(self.summary);
                }
                Kind::Illegal => self.illegal(token)?,
                Kind::Newline => {
                    self.physical_line += line_breaks(&token.lit);
                    self.flush(sink)?;
                }
                Kind::Whitespace => {}
                Kind::Number | Kind::Word | Kind::Punctuation => self.line.push(token),
            }
        }
    }

    fn illegal(&mut self, token: Token) -> Result<(), ParseError> {
        let line = self.physical_line;
        // Illegal tokens are one rune and the scanner has not moved past it.
        let offset = self.scanner.offset().saturating_sub(1);
        match self.options.on_illegal {
            IllegalPolicy::Abort => Err(ParseError::IllegalInput {
                lit: token.lit,
                line,
                offset,
            }),
            IllegalPolicy::Skip => {
                tracing::warn!(lit = ?token.lit, line, offset, "skipping illegal token");
                self.summary.skipped += 1;
                Ok(())
            }
        }
    }

    fn flush<S>(&mut self, sink: &mut S) -> Result<(), ParseError>
    where
        S: LineSink<'c> + ?Sized,
    {
        let line = self.line.take();
        let matches = self.catalog.classify(line.tokens());
        self.summary.lines += 1;
        if !matches.is_empty() {
            self.summary.matched += 1;
        }
        tracing::trace!(number = self.summary.lines, tokens = line.len(), "flush");
        sink.accept(ClassifiedLine {
            number: self.summary.lines,
            line,
            matches,
        })
        .map_err(ParseError::Sink)
    }
}

/// Line breaks in a newline run. `\r\n` is one break; a lone `\r` or `\n`
/// is one each.
fn line_breaks(lit: &str) -> usize {
    let mut breaks = 0;
    let mut chars = lit.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            chars.next_if_eq(&'\n');
        }
        breaks += 1;
    }
    breaks
}
