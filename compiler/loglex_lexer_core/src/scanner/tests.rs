use pretty_assertions::assert_eq;

use super::*;

/// Helper: scan a source string and collect all tokens (excluding end of stream).
fn scan(source: &str) -> Vec<Token> {
    Scanner::new(source.as_bytes()).collect()
}

/// Helper: scan and return `(kind, literal)` pairs.
fn scan_pairs(source: &str) -> Vec<(Kind, String)> {
    scan(source).into_iter().map(|t| (t.kind, t.lit)).collect()
}

fn pair(kind: Kind, lit: &str) -> (Kind, String) {
    (kind, lit.to_string())
}

// === End of stream ===

#[test]
fn empty_input_is_end_of_stream() {
    let mut scanner = Scanner::new(&b""[..]);
    assert_eq!(scanner.next_token(), Token::end_of_stream());
    // Sticky.
    assert_eq!(scanner.next_token(), Token::end_of_stream());
    assert_eq!(scanner.offset(), 0);
}

#[test]
fn end_of_stream_has_empty_literal() {
    let mut scanner = Scanner::new(&b"x"[..]);
    assert_eq!(scanner.next_token().lit, "x");
    let eos = scanner.next_token();
    assert_eq!(eos.kind, Kind::EndOfStream);
    assert_eq!(eos.lit, "");
}

#[test]
fn next_token_matches_iterator() {
    let source = "[1:2:3] x\n";
    let mut scanner = Scanner::new(source.as_bytes());
    let mut by_hand = Vec::new();
    loop {
        let token = scanner.next_token();
        if token.is_end_of_stream() {
            break;
        }
        by_hand.push(token);
    }
    assert_eq!(by_hand, scan(source));
    // Iterator adapters stay available alongside the inherent method.
    let lits: Vec<String> = Scanner::new(&b"a b"[..])
        .scan(0usize, |count, token| {
            *count += 1;
            Some(format!("{count}:{}", token.lit))
        })
        .collect();
    assert_eq!(lits, vec!["1:a", "2: ", "3:b"]);
}

// === Maximal munch ===

#[test]
fn whitespace_run_is_one_token() {
    assert_eq!(
        scan_pairs(" \t  x"),
        vec![pair(Kind::Whitespace, " \t  "), pair(Kind::Word, "x")]
    );
}

#[test]
fn newline_run_mixes_cr_and_lf() {
    assert_eq!(
        scan_pairs("a\r\n\n\rb"),
        vec![
            pair(Kind::Word, "a"),
            pair(Kind::Newline, "\r\n\n\r"),
            pair(Kind::Word, "b"),
        ]
    );
}

#[test]
fn digit_run_is_one_number() {
    assert_eq!(
        scan_pairs("20240101:"),
        vec![pair(Kind::Number, "20240101"), pair(Kind::Punctuation, ":")]
    );
}

#[test]
fn next_scan_starts_after_run() {
    let mut scanner = Scanner::new(&b"123 x"[..]);
    assert_eq!(scanner.next_token(), Token::new(Kind::Number, "123"));
    assert_eq!(scanner.offset(), 3);
    assert_eq!(scanner.next_token(), Token::new(Kind::Whitespace, " "));
    assert_eq!(scanner.offset(), 4);
}

#[test]
fn run_at_end_of_input() {
    assert_eq!(scan_pairs("   "), vec![pair(Kind::Whitespace, "   ")]);
    assert_eq!(scan_pairs("42"), vec![pair(Kind::Number, "42")]);
}

// === Words ===

#[test]
fn word_continues_through_digits_and_word_punct() {
    assert_eq!(scan_pairs("abc_123"), vec![pair(Kind::Word, "abc_123")]);
    assert_eq!(
        scan_pairs("don't x-ray C++ a_b-c+d'e9"),
        vec![
            pair(Kind::Word, "don't"),
            pair(Kind::Whitespace, " "),
            pair(Kind::Word, "x-ray"),
            pair(Kind::Whitespace, " "),
            pair(Kind::Word, "C++"),
            pair(Kind::Whitespace, " "),
            pair(Kind::Word, "a_b-c+d'e9"),
        ]
    );
}

#[test]
fn word_cannot_start_with_digit() {
    assert_eq!(
        scan_pairs("123abc"),
        vec![pair(Kind::Number, "123"), pair(Kind::Word, "abc")]
    );
}

#[test]
fn word_stops_at_other_punctuation() {
    assert_eq!(
        scan_pairs("key=value."),
        vec![
            pair(Kind::Word, "key"),
            pair(Kind::Punctuation, "="),
            pair(Kind::Word, "value"),
            pair(Kind::Punctuation, "."),
        ]
    );
}

#[test]
fn leading_word_punct_is_punctuation() {
    assert_eq!(
        scan_pairs("-x _y"),
        vec![
            pair(Kind::Punctuation, "-"),
            pair(Kind::Word, "x"),
            pair(Kind::Whitespace, " "),
            pair(Kind::Punctuation, "_"),
            pair(Kind::Word, "y"),
        ]
    );
}

// === Punctuation ===

#[test]
fn punctuation_is_never_merged() {
    assert_eq!(
        scan_pairs("::"),
        vec![pair(Kind::Punctuation, ":"), pair(Kind::Punctuation, ":")]
    );
    assert_eq!(scan("[](){}").len(), 6);
}

#[test]
fn number_range_tokens() {
    assert_eq!(
        scan_pairs("100-200"),
        vec![
            pair(Kind::Number, "100"),
            pair(Kind::Punctuation, "-"),
            pair(Kind::Number, "200"),
        ]
    );
}

#[test]
fn bracketed_timestamp_tokens() {
    let kinds: Vec<Kind> = scan("[12:30:00] started").iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            Kind::Punctuation,
            Kind::Number,
            Kind::Punctuation,
            Kind::Number,
            Kind::Punctuation,
            Kind::Number,
            Kind::Punctuation,
            Kind::Whitespace,
            Kind::Word,
        ]
    );
}

// === Illegal ===

#[test]
fn control_character_is_illegal() {
    assert_eq!(
        scan_pairs("a\u{7}b"),
        vec![
            pair(Kind::Word, "a"),
            pair(Kind::Illegal, "\u{7}"),
            pair(Kind::Word, "b"),
        ]
    );
}

#[test]
fn nul_is_illegal_not_end_of_stream() {
    assert_eq!(
        scan_pairs("a\0b"),
        vec![
            pair(Kind::Word, "a"),
            pair(Kind::Illegal, "\0"),
            pair(Kind::Word, "b"),
        ]
    );
}

#[test]
fn non_ascii_rune_is_one_illegal_token() {
    assert_eq!(
        scan_pairs("caf\u{e9}!"),
        vec![
            pair(Kind::Word, "caf"),
            pair(Kind::Illegal, "\u{e9}"),
            pair(Kind::Punctuation, "!"),
        ]
    );
}

#[test]
fn invalid_utf8_is_illegal_replacement() {
    let tokens: Vec<Token> = Scanner::new(&[b'a', 0xFF][..]).collect();
    assert_eq!(
        tokens,
        vec![
            Token::new(Kind::Word, "a"),
            Token::new(Kind::Illegal, char::REPLACEMENT_CHARACTER),
        ]
    );
}

// === Properties ===

#[test]
fn literals_reassemble_source() {
    let sources = [
        "",
        "x",
        "[12:30:00] GET /index.html 200",
        "  \t\n\r\n  ",
        "a\u{7}b\0c",
        "don't-stop 100-200 ::",
        "r\u{e9}sum\u{e9} \u{65e5}\u{672c}",
    ];
    for source in sources {
        let rebuilt: String = scan(source).iter().map(|t| t.lit.as_str()).collect();
        assert_eq!(rebuilt, source);
    }
}

#[test]
fn every_token_has_nonempty_literal() {
    for tok in scan("a 1\n[\u{7}]") {
        assert!(!tok.lit.is_empty(), "empty literal for {tok:?}");
    }
}

mod proptest_scanner {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn literals_concatenate_to_input(source in "\\PC{0,64}") {
            let rebuilt: String = scan(&source).iter().map(|t| t.lit.as_str()).collect();
            prop_assert_eq!(rebuilt, source);
        }

        #[test]
        fn adjacent_run_tokens_never_share_a_kind(source in "[ \\t\\r\\na-z0-9_+'\\-:\\[\\]]{0,64}") {
            let tokens = scan(&source);
            for pair in tokens.windows(2) {
                if pair[0].kind.is_run() {
                    prop_assert_ne!(pair[0].kind, pair[1].kind, "unmerged run in {:?}", source);
                }
            }
        }

        #[test]
        fn single_rune_kinds_are_one_char(source in "[!-/:-@\\[-`{-~a-z0-9 ]{0,64}") {
            for tok in scan(&source) {
                if matches!(tok.kind, Kind::Punctuation | Kind::Illegal) {
                    prop_assert_eq!(tok.lit.chars().count(), 1);
                }
            }
        }

        #[test]
        fn homogeneous_digit_run(n in 1usize..64, tail in "[a-z!]") {
            let source = format!("{}{}", "7".repeat(n), tail);
            let mut scanner = Scanner::new(source.as_bytes());
            let first = scanner.next_token();
            prop_assert_eq!(first.kind, Kind::Number);
            prop_assert_eq!(first.lit.len(), n);
            prop_assert_eq!(scanner.offset(), n);
        }
    }
}
