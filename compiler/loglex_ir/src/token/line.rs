//! A line of tokens.

use std::fmt;

use super::{Kind, Token};

/// The tokens between two newline boundaries, in scan order.
///
/// Whitespace and newline tokens are never members; the assembler drops the
/// former and flushes on the latter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Line {
    tokens: Vec<Token>,
}

impl Line {
    /// Create a new empty line.
    #[inline]
    pub fn new() -> Self {
        Line { tokens: Vec::new() }
    }

    /// Build a line of kinds only, every literal empty.
    ///
    /// Mostly useful in tests, where only the shape of a line matters.
    pub fn from_kinds(kinds: impl IntoIterator<Item = Kind>) -> Self {
        kinds
            .into_iter()
            .map(|kind| Token::new(kind, String::new()))
            .collect()
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Take the tokens out, leaving the line empty.
    pub fn take(&mut self) -> Line {
        std::mem::take(self)
    }

    /// Token debug strings joined by single spaces.
    pub fn debug_string(&self) -> String {
        self.tokens
            .iter()
            .map(Token::debug_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromIterator<Token> for Line {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Line {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Literals joined by single spaces.
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((first, rest)) = self.tokens.split_first() {
            fmt::Display::fmt(first, f)?;
            for token in rest {
                write!(f, " {token}")?;
            }
        }
        Ok(())
    }
}
