//! ASCII character classes.
//!
//! Every predicate is ASCII only. Control characters other than tab, `\n`
//! and `\r`, DEL, and all non-ASCII characters belong to no class and scan
//! as [`Kind::Illegal`].

use loglex_ir::Kind;

/// Space or tab.
#[inline]
pub const fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}

/// `\n` or `\r`. Mixed runs collapse into one newline token.
#[inline]
pub const fn is_newline(ch: char) -> bool {
    matches!(ch, '\n' | '\r')
}

#[inline]
pub const fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

#[inline]
pub const fn is_numeric(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// The four printable ASCII ranges between the alphanumerics.
#[inline]
pub const fn is_punct(ch: char) -> bool {
    matches!(ch, '!'..='/' | ':'..='@' | '['..='`' | '{'..='~')
}

/// Punctuation allowed inside a word after its first letter.
#[inline]
pub const fn is_word_punct(ch: char) -> bool {
    matches!(ch, '_' | '-' | '+' | '\'')
}

/// Characters that may continue a word.
#[inline]
pub const fn is_word_continue(ch: char) -> bool {
    is_alpha(ch) || is_numeric(ch) || is_word_punct(ch)
}

/// Classify the first character of a token.
///
/// Classes are checked in a fixed priority order: whitespace, newline,
/// alphabetic, numeric, punctuation. Anything else is [`Kind::Illegal`].
pub const fn start_kind(ch: char) -> Kind {
    if is_whitespace(ch) {
        Kind::Whitespace
    } else if is_newline(ch) {
        Kind::Newline
    } else if is_alpha(ch) {
        Kind::Word
    } else if is_numeric(ch) {
        Kind::Number
    } else if is_punct(ch) {
        Kind::Punctuation
    } else {
        Kind::Illegal
    }
}
