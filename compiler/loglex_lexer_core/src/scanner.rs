//! Maximal-munch scanner producing [`Token`]s.
//!
//! # Design
//!
//! The first rune of each token picks the class (see
//! [`start_kind`](crate::class::start_kind)). Run classes then consume
//! runes while they stay in the continuation class and push the first
//! rune outside it back onto the reader, so the scanner never looks more
//! than one rune ahead. Punctuation and illegal characters are always a
//! single rune.
//!
//! Illegal input is data, not an error: the scanner returns a
//! [`Kind::Illegal`] token and leaves the policy to its caller.

use std::io::{self, BufRead};

use loglex_ir::{Kind, Token};

use crate::class::{is_newline, is_numeric, is_whitespace, is_word_continue, start_kind};
use crate::reader::RuneReader;

/// Scanner over a buffered byte source.
#[derive(Debug)]
pub struct Scanner<R> {
    reader: RuneReader<R>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(input: R) -> Self {
        Scanner {
            reader: RuneReader::new(input),
        }
    }

    /// Produce the next token.
    ///
    /// Returns the end-of-stream token once the input is exhausted, and on
    /// every call after that.
    pub fn next_token(&mut self) -> Token {
        let Some(first) = self.reader.read() else {
            return Token::end_of_stream();
        };
        let token = match start_kind(first) {
            Kind::Whitespace => self.munch(first, Kind::Whitespace, is_whitespace),
            Kind::Newline => self.munch(first, Kind::Newline, is_newline),
            Kind::Word => self.munch(first, Kind::Word, is_word_continue),
            Kind::Number => self.munch(first, Kind::Number, is_numeric),
            kind => Token::new(kind, first),
        };
        tracing::trace!(kind = %token.kind, lit = ?token.lit, "scanned");
        token
    }

    /// Runes consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.reader.offset()
    }

    /// Take the I/O error that ended the stream early, if any.
    ///
    /// An end-of-stream token does not say whether the input was exhausted
    /// or failed; drivers check here once they see it.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.reader.take_error()
    }

    fn munch(&mut self, first: char, kind: Kind, continues: fn(char) -> bool) -> Token {
        let mut lit = String::from(first);
        while let Some(ch) = self.reader.read() {
            if !continues(ch) {
                self.reader.unread();
                break;
            }
            lit.push(ch);
        }
        Token::new(kind, lit)
    }
}

/// Yields tokens up to, not including, end of stream.
impl<R: BufRead> Iterator for Scanner<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_end_of_stream()).then_some(token)
    }
}

#[cfg(test)]
mod tests;
