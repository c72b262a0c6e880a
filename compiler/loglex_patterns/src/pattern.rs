//! Positional token patterns.

use loglex_ir::{Kind, Token};

/// One position of a [`Pattern`].
///
/// Without a literal the element is a wildcard for any token of `kind`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Element {
    pub kind: Kind,
    pub lit: Option<String>,
}

impl Element {
    /// Any token of `kind`.
    pub fn any(kind: Kind) -> Self {
        Element { kind, lit: None }
    }

    /// A token of `kind` whose literal is exactly `lit`.
    pub fn exact(kind: Kind, lit: impl Into<String>) -> Self {
        Element {
            kind,
            lit: Some(lit.into()),
        }
    }

    pub fn matches(&self, token: &Token) -> bool {
        if self.kind != token.kind {
            return false;
        }
        match &self.lit {
            Some(lit) => *lit == token.lit,
            None => true,
        }
    }
}

/// A named, fixed-length token sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    name: String,
    elements: Vec<Element>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, elements: Vec<Element>) -> Self {
        Pattern {
            name: name.into(),
            elements,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if the first `self.len()` tokens match element by
    /// element. Tokens past the pattern are ignored; a shorter line never
    /// matches.
    pub fn matches_prefix(&self, tokens: &[Token]) -> bool {
        if tokens.len() < self.elements.len() {
            return false;
        }
        self.elements
            .iter()
            .zip(tokens)
            .all(|(element, token)| element.matches(token))
    }
}
