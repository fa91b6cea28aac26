use std::iter::FusedIterator;

use log::{debug, trace};

use crate::token::{Location, Token, TokenKind, classify_word};

/// Tokenize a whole source string.
///
/// The returned vector always ends with exactly one `Eof` token.
#[must_use]
pub fn tokenize(input: &str, filename: &str) -> Vec<Token> {
    Lexer::new(input, filename).tokens().collect()
}

/// Scanner producing one token per call over an owned source buffer.
///
/// The cursor is a pair of byte offsets into `input`; `ch` mirrors the
/// byte under `position`, or `0` once the input is exhausted.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: String,
    position: usize,
    read_position: usize,
    ch: u8,
    line: usize,
    column: usize,
    filename: String,
}

impl Lexer {
    /// Create a lexer positioned on the first character at line 1,
    /// column 1.
    pub fn new(input: impl Into<String>, filename: impl Into<String>) -> Self {
        Self::starting_at_line(input, filename, 1)
    }

    /// Create a lexer whose first line is numbered `line`.
    ///
    /// Drivers that feed one line at a time use this to keep line numbers
    /// running across a session. `line` is clamped to at least 1.
    pub fn starting_at_line(
        input: impl Into<String>,
        filename: impl Into<String>,
        line: usize,
    ) -> Self {
        let input = input.into();
        let ch = input.as_bytes().first().copied().unwrap_or(0);
        Self {
            input,
            position: 0,
            read_position: 1,
            ch,
            line: line.max(1),
            column: 1,
            filename: filename.into(),
        }
    }

    /// Produce the next token.
    ///
    /// Once the input is exhausted every call returns an `Eof` token at
    /// the same location.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let location = self.location();

        if self.at_end() {
            return Token::new(TokenKind::Eof, String::new(), location);
        }

        let token = match self.ch {
            b'(' => self.single(TokenKind::LParen, location),
            b')' => self.single(TokenKind::RParen, location),
            b'{' => self.single(TokenKind::LBrace, location),
            b'}' => self.single(TokenKind::RBrace, location),
            b',' => self.single(TokenKind::Comma, location),
            b';' => self.single(TokenKind::Semicolon, location),
            b'+' => self.single(TokenKind::Plus, location),
            b'-' => self.single(TokenKind::Minus, location),
            b'*' => self.single(TokenKind::Asterisk, location),
            b'/' => self.single(TokenKind::Slash, location),
            // no `<=` or `>=` in this version of the language
            b'<' => self.single(TokenKind::Lt, location),
            b'>' => self.single(TokenKind::Gt, location),
            b'=' => self.single_or_double(TokenKind::Assign, TokenKind::Equal, location),
            b'!' => self.single_or_double(TokenKind::Bang, TokenKind::NotEq, location),
            c if is_word_byte(c) => self.read_word(location),
            c if c.is_ascii_digit() => self.read_int(location),
            _ => self.read_illegal(location),
        };

        trace!("{token}");
        token
    }

    /// Iterate over the remaining tokens, ending after the first `Eof`.
    pub const fn tokens(&mut self) -> Tokens<'_> {
        Tokens {
            lexer: self,
            finished: false,
        }
    }

    /// Location of the cursor.
    #[must_use]
    pub fn location(&self) -> Location {
        Location {
            filename: self.filename.clone(),
            line: self.line,
            column: self.column,
        }
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    const fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek(&self) -> u8 {
        self.input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0)
    }

    /// Consume the character under the cursor and update line/column.
    fn read_char(&mut self) {
        if self.at_end() {
            return;
        }

        let width = if self.ch.is_ascii() {
            1
        } else {
            self.input[self.position..]
                .chars()
                .next()
                .map_or(1, char::len_utf8)
        };

        if self.ch == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.position += width;
        self.read_position = self.position + 1;
        self.ch = self
            .input
            .as_bytes()
            .get(self.position)
            .copied()
            .unwrap_or(0);
    }

    fn skip_whitespace(&mut self) {
        // A tab is one column, whatever width a terminal renders it at.
        // Column numbers are part of the token output and stay that way.
        while matches!(self.ch, b' ' | b'\t' | b'\r' | b'\n') {
            self.read_char();
        }
    }

    fn single(&mut self, kind: TokenKind, location: Location) -> Token {
        let literal = char::from(self.ch).to_string();
        self.read_char();
        Token::new(kind, literal, location)
    }

    fn single_or_double(
        &mut self,
        single: TokenKind,
        double: TokenKind,
        location: Location,
    ) -> Token {
        if self.peek() != b'=' {
            return self.single(single, location);
        }

        let start = self.position;
        self.read_char();
        self.read_char();
        Token::new(double, self.input[start..self.position].to_string(), location)
    }

    fn read_run(&mut self, accept: fn(u8) -> bool) -> String {
        let start = self.position;
        while !self.at_end() && accept(self.ch) {
            self.read_char();
        }
        self.input[start..self.position].to_string()
    }

    fn read_word(&mut self, location: Location) -> Token {
        let word = self.read_run(is_word_byte);
        Token::new(classify_word(&word), word, location)
    }

    fn read_int(&mut self, location: Location) -> Token {
        let digits = self.read_run(|c| c.is_ascii_digit());
        Token::new(TokenKind::Int, digits, location)
    }

    fn read_illegal(&mut self, location: Location) -> Token {
        let start = self.position;
        self.read_char();
        let literal = self.input[start..self.position].to_string();
        debug!("illegal character {literal:?} at {location}");
        Token::new(TokenKind::Illegal, literal, location)
    }
}

/// Identifiers are letters and underscores only; digits end the run.
const fn is_word_byte(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Iterator returned by [`Lexer::tokens`].
#[derive(Debug)]
pub struct Tokens<'a> {
    lexer: &'a mut Lexer,
    finished: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.lexer.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}
