//! Lexer for mathex expressions.
//!
//! Splits raw source text into classified tokens with source positions. The
//! lexer is deliberately dumb about operators: any non-space character that
//! is not a number, word, parenthesis, or comma comes out as a [`token::TokenType::Symbol`]
//! token, and the parser decides whether the symbol names a registered
//! operator. That keeps user-registered operator symbols out of the lexer.

pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Location, Token, TokenType};
