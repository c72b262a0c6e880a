//! Lexical categories and the process-wide name table.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// Lexical category of a token.
///
/// The set is closed: the scanner classifies every character of the input
/// into exactly one of these kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
#[repr(u8)]
pub enum Kind {
    /// A character outside every other class.
    Illegal,
    /// Input exhausted. Zero-width.
    EndOfStream,
    /// Run of spaces and tabs.
    Whitespace,
    /// Run of `\n` and `\r`.
    Newline,
    /// Run of ASCII digits.
    Number,
    /// Letter followed by letters, digits or `_ - + '`.
    Word,
    /// One ASCII punctuation character.
    Punctuation,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 7] = [
        Kind::Illegal,
        Kind::EndOfStream,
        Kind::Whitespace,
        Kind::Newline,
        Kind::Number,
        Kind::Word,
        Kind::Punctuation,
    ];

    /// Human-readable name, e.g. `<number>`.
    ///
    /// Looked up in the shared [`kind_names`] table.
    pub fn name(self) -> &'static str {
        kind_names().get(&self).copied().unwrap_or("<unknown>")
    }

    /// Returns `true` for kinds whose literal is a maximal run of one class.
    ///
    /// Punctuation and Illegal are always a single character; EndOfStream
    /// has no literal.
    pub const fn is_run(self) -> bool {
        matches!(
            self,
            Kind::Whitespace | Kind::Newline | Kind::Number | Kind::Word
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static KIND_NAMES: OnceLock<FxHashMap<Kind, &'static str>> = OnceLock::new();

/// Get the kind-name table (lazily initialized, never mutated).
pub fn kind_names() -> &'static FxHashMap<Kind, &'static str> {
    KIND_NAMES.get_or_init(|| {
        let mut names = FxHashMap::default();
        names.insert(Kind::Illegal, "<illegal>");
        names.insert(Kind::EndOfStream, "<eof>");
        names.insert(Kind::Whitespace, "<whitespace>");
        names.insert(Kind::Newline, "<newline>");
        names.insert(Kind::Number, "<number>");
        names.insert(Kind::Word, "<word>");
        names.insert(Kind::Punctuation, "<punctuation>");
        names
    })
}
