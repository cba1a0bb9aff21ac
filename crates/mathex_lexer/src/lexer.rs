//! Lexer for mathex expressions using the 'logos' crate.
//! Recognizes numbers, letter runs, parentheses, commas, and bare symbols.

use crate::token::{Location, Token, TokenType};
use log::trace;
use logos::Logos;

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum RawToken {
    // Numbers may start with a bare decimal point: `.12` is `0.12`.
    #[regex(r"[0-9]+(\.[0-9]*)?", |lex| lex.slice().parse().ok())]
    #[regex(r"\.[0-9]+", |lex| lex.slice().parse().ok())]
    Number(f64),

    // A run of letters; the parser splits it against the operator registry.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Word(String),

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,

    // Any other visible character is a candidate operator symbol. The lexer
    // does not know the registered operator set, so it never rejects one.
    #[regex(r"[^ \t\r\n0-9a-zA-Z(),]", |lex| lex.slice().chars().next())]
    Symbol(char),
}

/// Expression lexer: an iterator of [`Token`]s with location tracking.
pub struct Lexer<'source> {
    /// The logos lexer instance
    logos_lexer: logos::Lexer<'source, RawToken>,
    /// Current line number (1-based)
    line: usize,
    /// Current column number (1-based)
    column: usize,
    /// Current byte offset in source
    offset: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'source str) -> Self {
        Self {
            logos_lexer: RawToken::lexer(source),
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Convert a RawToken to our semantic Token type
    fn convert_token(&self, raw: RawToken, lexeme: &str) -> Token {
        let location = Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        };

        let token_type = match raw {
            RawToken::Number(value) => TokenType::Number(value),
            RawToken::Word(word) => TokenType::Word(word),
            RawToken::LParen => TokenType::LeftParen,
            RawToken::RParen => TokenType::RightParen,
            RawToken::Comma => TokenType::Comma,
            RawToken::Symbol(c) => TokenType::Symbol(c),
        };

        Token::new(token_type, lexeme, location)
    }

    /// Update line and column numbers based on the consumed lexeme
    fn update_position(&mut self, lexeme: &str) {
        for c in lexeme.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.offset += c.len_utf8();
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.logos_lexer.next()?;
        let lexeme = self.logos_lexer.slice().to_string();

        // Skipped whitespace still advances the position bookkeeping.
        let start = self.logos_lexer.span().start;
        if start > self.offset {
            let skipped = self.logos_lexer.source()[self.offset..start].to_string();
            self.update_position(&skipped);
        }

        let token = match raw {
            Ok(raw) => self.convert_token(raw, &lexeme),
            Err(_) => Token::new(
                TokenType::Error(format!("invalid token at {}:{}", self.line, self.column)),
                lexeme.clone(),
                Location {
                    line: self.line,
                    column: self.column,
                    offset: self.offset,
                },
            ),
        };
        self.update_position(&lexeme);
        trace!("lexed {token}");
        Some(token)
    }
}
