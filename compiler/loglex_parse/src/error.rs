//! Errors that stop a run.

use std::io;

/// Why [`Parser::run`](crate::Parser::run) stopped early.
///
/// Unmatched lines are not errors. A run that returns `Err` has handed the
/// sink every line completed before the failure, and nothing after it.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A character outside every token class, under
    /// [`IllegalPolicy::Abort`](crate::IllegalPolicy::Abort).
    #[error("illegal token {lit:?} on line {line}")]
    IllegalInput {
        lit: String,
        /// 1-based line of the input holding the token. Blank lines count,
        /// so this can exceed the number of lines handed to the sink.
        line: usize,
        /// Runes preceding the token.
        offset: usize,
    },

    #[error("failed to read input: {0}")]
    Io(#[source] io::Error),

    #[error("failed to write line: {0}")]
    Sink(#[source] io::Error),
}
