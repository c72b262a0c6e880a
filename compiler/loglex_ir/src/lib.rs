//! loglex IR - token model shared by the scanner, matcher and assembler.
//!
//! - [`Kind`]: the closed set of lexical categories
//! - [`Token`]: a kind paired with the literal text it was scanned from
//! - [`Line`]: the tokens between two newline boundaries
//!
//! Every type is plain owned data with `Clone, Eq, Hash, Debug`. With the
//! `serde` feature enabled, tokens and lines also implement `Serialize`.

mod token;

pub use token::{kind_names, Kind, Line, Token};
