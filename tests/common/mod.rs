#![allow(dead_code)]

use zimu::{Token, TokenKind, tokenize};

/// Compact view of a token for table-style assertions.
pub type Expected<'a> = (TokenKind, &'a str, usize, usize);

pub fn lex(input: &str) -> Vec<Token> {
    tokenize(input, "test")
}

pub fn kinds(input: &str) -> Vec<TokenKind> {
    lex(input).iter().map(|t| t.kind).collect()
}

pub fn literals(input: &str) -> Vec<String> {
    lex(input).into_iter().map(|t| t.literal).collect()
}

/// Assert that `input` lexes to exactly `expected`, including the final
/// `Eof`.
pub fn assert_tokens(input: &str, expected: &[Expected<'_>]) {
    let tokens = lex(input);
    let got: Vec<Expected<'_>> = tokens
        .iter()
        .map(|t| {
            (
                t.kind,
                t.literal.as_str(),
                t.location.line,
                t.location.column,
            )
        })
        .collect();
    assert_eq!(
        got, expected,
        "token mismatch:\n--- input ---\n{input}\n--- got ---\n{got:#?}"
    );
}
