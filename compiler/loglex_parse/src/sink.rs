//! Where completed lines go.

use std::io;

use loglex_ir::Line;
use loglex_patterns::Matches;

/// A completed line and the catalog patterns it matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedLine<'c> {
    /// 1-based ordinal of the line among those flushed.
    pub number: usize,
    pub line: Line,
    /// Matched pattern names, in catalog order.
    pub matches: Matches<'c>,
}

impl ClassifiedLine<'_> {
    #[inline]
    pub fn is_match(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Receives each classified line as soon as it is complete.
///
/// An error stops the run with [`ParseError::Sink`](crate::ParseError::Sink).
pub trait LineSink<'c> {
    fn accept(&mut self, line: ClassifiedLine<'c>) -> io::Result<()>;
}

impl<'c, F> LineSink<'c> for F
where
    F: FnMut(ClassifiedLine<'c>) -> io::Result<()>,
{
    fn accept(&mut self, line: ClassifiedLine<'c>) -> io::Result<()> {
        self(line)
    }
}

/// Collects every line.
impl<'c> LineSink<'c> for Vec<ClassifiedLine<'c>> {
    fn accept(&mut self, line: ClassifiedLine<'c>) -> io::Result<()> {
        self.push(line);
        Ok(())
    }
}
