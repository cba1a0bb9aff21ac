//! Parse and evaluate infix math expressions.
//!
//! This crate is the user-facing facade: it re-exports the AST, parser, and
//! evaluator so most users need only one dependency.
//!
//! # Example
//!
//! ```
//! use mathex::{eval, parse, Bindings};
//!
//! let tree = parse("3x + 1").unwrap();
//! assert_eq!(tree.variables(), vec!["x".to_string()]);
//!
//! let bindings = Bindings::from([("x".to_string(), 2.0)]);
//! assert_eq!(eval("3x + 1", &bindings), Ok(7.0));
//! ```

pub use mathex_ast::{ArityError, AstNode, Operator, OperatorNode, Precedence};
pub use mathex_eval::{eval, eval_tree, Bindings, EvalError};
pub use mathex_lexer::token::{Location, Token, TokenType};
pub use mathex_parser::{parse, ParseError, Parser, ParserConfig};
