//! Low-level scanner for loglex.
//!
//! Turns a byte stream into [`Token`](loglex_ir::Token)s using maximal-munch
//! character-class rules. The scanner knows nothing about lines or
//! patterns; those live in `loglex_parse` and `loglex_patterns`.
//!
//! # Layers
//!
//! - [`RuneReader`]: UTF-8 decoding over any `BufRead`, one rune of pushback
//! - [`class`]: the ASCII character-class predicates
//! - [`Scanner`]: dispatch on the first rune's class, then munch the run

pub mod class;
mod reader;
mod scanner;

pub use reader::RuneReader;
pub use scanner::Scanner;
