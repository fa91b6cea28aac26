//! Lexer for the zimu scripting language.
//!
//! Source text is turned into a stream of typed tokens, each carrying the
//! filename, line, and column of its first character.
//!
//! # Quick start
//!
//! ```
//! use zimu::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("let five = 5;", "<doc>");
//! let tok = lexer.next_token();
//! assert_eq!(tok.kind, TokenKind::Let);
//! assert_eq!(tok.literal, "let");
//! assert_eq!((tok.location.line, tok.location.column), (1, 1));
//! ```
//!
//! Malformed input never fails; unknown characters come back as
//! `Illegal` tokens in the stream:
//!
//! ```
//! use zimu::{tokenize, TokenKind};
//!
//! let kinds: Vec<_> = tokenize("a @ b", "<doc>").iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Identifier, TokenKind::Illegal, TokenKind::Identifier, TokenKind::Eof]
//! );
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::fs;
use std::io;
use std::path::Path;

pub mod lexer;
pub mod repl;
pub mod token;

pub use lexer::{Lexer, Tokens, tokenize};
pub use repl::{LineNumbering, ReplConfig};
pub use token::{Location, Token, TokenKind, classify_word};

/// Errors raised by the drivers around the lexer.
///
/// Lexing itself cannot fail; these only cover reading input and
/// writing output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A source file could not be read.
    #[error("{path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Terminal input or output failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Read a file and tokenize it with one lexer, so line numbers run
/// across the whole file. The path is used as the token filename.
pub fn lex_file(path: impl AsRef<Path>) -> Result<Vec<Token>, Error> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let input = fs::read_to_string(path).map_err(|source| Error::Read {
        path: name.clone(),
        source,
    })?;
    Ok(tokenize(&input, &name))
}
