use mathex_ast::ArityError;
use mathex_lexer::token::Location;
use thiserror::Error;

/// Errors produced while parsing an expression.
///
/// The operator-resolution engine itself only ever raises `Syntax` and
/// `Arity`; the remaining variants come from the driver while it resolves
/// lexemes against the operator registry and the configured variable set.
/// Every error is terminal for the parse attempt: the engine keeps no
/// recoverable partial state.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// The expression is structurally invalid: unbalanced groups, a comma
    /// outside a function call, trailing operators, empty input, or more
    /// than one tree remaining at the end.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// An operator was resolved against the wrong number of operands.
    #[error(transparent)]
    Arity(#[from] ArityError),

    /// A symbol with no registered operator.
    #[error("unknown symbol `{symbol}` at {location}")]
    UnknownSymbol { symbol: char, location: Location },

    /// A variable name excluded by the configured valid-variable set.
    #[error("variable `{name}` is not allowed at {location}")]
    InvalidVariable { name: String, location: Location },
}

impl ParseError {
    pub(crate) fn syntax<S: Into<String>>(message: S) -> Self {
        ParseError::Syntax(message.into())
    }
}
