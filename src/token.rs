use std::fmt;

/// Source location of a token's first character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub filename: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,

    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `/`
    Slash,
    /// `*`
    Asterisk,
    /// `!`
    Bang,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Equal,
    /// `!=`
    NotEq,

    /// Run of decimal digits.
    Int,
    /// Run of ASCII letters and underscores that is not a keyword.
    Identifier,

    /// `let`
    Let,
    /// `fn`
    Function,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `true`
    True,
    /// `false`
    False,

    /// End of input. Repeats on every call once reached.
    Eof,
    /// A character that starts no token.
    Illegal,
}

impl TokenKind {
    /// Upper-case name used when printing tokens.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Slash => "SLASH",
            Self::Asterisk => "ASTERISK",
            Self::Bang => "BANG",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Equal => "EQUAL",
            Self::NotEq => "NOT_EQ",
            Self::Int => "INT",
            Self::Identifier => "IDENTIFIER",
            Self::Let => "LET",
            Self::Function => "FUNCTION",
            Self::Return => "RETURN",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
        }
    }

    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Let
                | Self::Function
                | Self::Return
                | Self::If
                | Self::Else
                | Self::True
                | Self::False
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const KEYWORDS: [(&str, TokenKind); 7] = [
    ("let", TokenKind::Let),
    ("fn", TokenKind::Function),
    ("return", TokenKind::Return),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
];

/// Classify a scanned word as a keyword or a plain identifier.
///
/// Matching is exact and case-sensitive: `Let` and `letx` are both
/// identifiers.
#[must_use]
pub fn classify_word(word: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == word)
        .map_or(TokenKind::Identifier, |&(_, kind)| kind)
}

/// A single token with its kind, source text, and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: Location,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, literal: String, location: Location) -> Self {
        Self {
            kind,
            literal,
            location,
        }
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    #[must_use]
    pub const fn is_illegal(&self) -> bool {
        matches!(self.kind, TokenKind::Illegal)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.literal, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_classify() {
        assert_eq!(classify_word("let"), TokenKind::Let);
        assert_eq!(classify_word("fn"), TokenKind::Function);
        assert_eq!(classify_word("return"), TokenKind::Return);
        assert_eq!(classify_word("if"), TokenKind::If);
        assert_eq!(classify_word("else"), TokenKind::Else);
        assert_eq!(classify_word("true"), TokenKind::True);
        assert_eq!(classify_word("false"), TokenKind::False);
    }

    #[test]
    fn near_keywords_are_identifiers() {
        for word in ["Let", "LET", "letx", "le", "fnn", "iff", "_if", "function"] {
            assert_eq!(classify_word(word), TokenKind::Identifier, "{word}");
        }
    }

    #[test]
    fn keyword_table_agrees_with_is_keyword() {
        for (word, kind) in KEYWORDS {
            assert!(kind.is_keyword(), "{word}");
        }
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
    }

    #[test]
    fn display_formats() {
        let token = Token::new(
            TokenKind::NotEq,
            "!=".to_string(),
            Location {
                filename: "<repl>".to_string(),
                line: 2,
                column: 7,
            },
        );
        assert_eq!(token.to_string(), "NOT_EQ \"!=\" at <repl>:2:7");
        assert_eq!(token.location.to_string(), "<repl>:2:7");
    }
}
