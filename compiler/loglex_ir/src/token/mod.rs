//! Tokens produced by the scanner.

mod kind;
mod line;

pub use kind::{kind_names, Kind};
pub use line::Line;

use std::fmt;

/// A scanned token: its kind and the exact text it covers.
///
/// The literal is empty only for [`Kind::EndOfStream`] and for tokens built
/// with [`Line::from_kinds`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub kind: Kind,
    pub lit: String,
}

impl Token {
    #[inline]
    pub fn new(kind: Kind, lit: impl Into<String>) -> Self {
        Token {
            kind,
            lit: lit.into(),
        }
    }

    /// The zero-width end-of-stream token.
    pub fn end_of_stream() -> Self {
        Token {
            kind: Kind::EndOfStream,
            lit: String::new(),
        }
    }

    /// Returns `true` if this is the end-of-stream sentinel.
    #[inline]
    pub fn is_end_of_stream(&self) -> bool {
        self.kind == Kind::EndOfStream
    }

    /// `"<kind name>: <literal>"`, e.g. `<word>: abc`.
    pub fn debug_string(&self) -> String {
        format!("{}: {}", self.kind, self.lit)
    }
}

/// A token displays as its literal.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lit)
    }
}
