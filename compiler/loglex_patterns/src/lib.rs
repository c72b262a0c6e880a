//! Line patterns for loglex.
//!
//! A [`Pattern`] is a named sequence of [`Element`]s compared positionally
//! against the start of a line. A [`Catalog`] holds patterns in
//! registration order and classifies a line against all of them.
//!
//! # Built-in patterns
//!
//! | Name | Shape |
//! |------|-------|
//! | `timestamp` | `[ NUMBER : NUMBER : NUMBER ]` |
//! | `timerange` | `NUMBER - NUMBER` |

mod catalog;
mod pattern;

pub use catalog::{builtin_catalog, Catalog, CatalogError, Matches, TIMERANGE, TIMESTAMP};
pub use pattern::{Element, Pattern};
