//! Ordered pattern catalog.
//!
//! Patterns are tried in registration order and are not mutually
//! exclusive: a line reports every pattern whose prefix it matches. Adding
//! a pattern is a data change; [`Catalog::classify`] never special-cases a
//! name.

use std::collections::hash_map::Entry;
use std::sync::OnceLock;

use loglex_ir::{Kind, Token};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::pattern::{Element, Pattern};

/// Name of the bracketed `[HH:MM:SS]` pattern.
pub const TIMESTAMP: &str = "timestamp";
/// Name of the `N-N` pattern.
pub const TIMERANGE: &str = "timerange";

/// Names of the patterns a line matched, in catalog order.
pub type Matches<'a> = SmallVec<[&'a str; 4]>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("pattern `{0}` is already registered")]
    DuplicateName(String),
}

/// Patterns in registration order, indexed by name.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    patterns: Vec<Pattern>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Create a catalog holding the built-in patterns, `timestamp` first.
    pub fn builtin() -> Self {
        let mut catalog = Catalog::new();
        catalog.push(timestamp_pattern());
        catalog.push(timerange_pattern());
        catalog
    }

    /// Append a pattern. Names are unique within a catalog.
    pub fn register(&mut self, pattern: Pattern) -> Result<(), CatalogError> {
        if self.index.contains_key(pattern.name()) {
            return Err(CatalogError::DuplicateName(pattern.name().to_string()));
        }
        self.push(pattern);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.index.get(name).map(|&i| &self.patterns[i])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    /// Pattern names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::name)
    }

    /// Names of every pattern matching a prefix of `tokens`.
    ///
    /// Pure: the same tokens always produce the same result.
    pub fn classify(&self, tokens: &[Token]) -> Matches<'_> {
        let mut matches = Matches::new();
        for pattern in &self.patterns {
            let matched = pattern.matches_prefix(tokens);
            tracing::trace!(pattern = pattern.name(), matched, "compared");
            if matched {
                tracing::debug!(pattern = pattern.name(), "line matched");
                matches.push(pattern.name());
            }
        }
        matches
    }

    fn push(&mut self, pattern: Pattern) {
        match self.index.entry(pattern.name().to_string()) {
            Entry::Occupied(_) => {}
            Entry::Vacant(slot) => {
                slot.insert(self.patterns.len());
                self.patterns.push(pattern);
            }
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Get the shared built-in catalog (lazily initialized, never mutated).
pub fn builtin_catalog() -> &'static Catalog {
    BUILTIN.get_or_init(Catalog::builtin)
}

fn timestamp_pattern() -> Pattern {
    Pattern::new(
        TIMESTAMP,
        vec![
            Element::exact(Kind::Punctuation, "["),
            Element::any(Kind::Number),
            Element::exact(Kind::Punctuation, ":"),
            Element::any(Kind::Number),
            Element::exact(Kind::Punctuation, ":"),
            Element::any(Kind::Number),
            Element::exact(Kind::Punctuation, "]"),
        ],
    )
}

fn timerange_pattern() -> Pattern {
    Pattern::new(
        TIMERANGE,
        vec![
            Element::any(Kind::Number),
            Element::exact(Kind::Punctuation, "-"),
            Element::any(Kind::Number),
        ],
    )
}
