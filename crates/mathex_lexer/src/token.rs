use std::fmt;

/// Represents a token's location in the source text.
///
/// Tracks line and column numbers (1-based) and the byte offset (0-based).
/// The parser threads locations through for error reporting; they play no
/// part in parsing decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number in the source
    pub line: usize,
    /// The 1-based column number in the source
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

/// The classification of a lexed token.
///
/// `Word` is a run of letters that the parser resolves against the operator
/// registry; it may contain several juxtaposed names (`xsin` is the variable
/// `x` followed by the function `sin`). `Symbol` is any other non-space
/// character.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    Number(f64),
    Word(String),
    Symbol(char),
    LeftParen,
    RightParen,
    Comma,
    Error(String),
}

/// A token in the source text: its classification, lexeme, and location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The type of the token
    pub token_type: TokenType,
    /// The original source text of the token
    pub lexeme: String,
    /// The location of the token in the source
    pub location: Location,
}

impl Token {
    /// Creates a new token.
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S, location: Location) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.token_type, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.line, self.column, self.offset)
    }
}
