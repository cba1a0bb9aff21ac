//! Abstract Syntax Tree (AST) for mathex expressions.
//!
//! This crate defines the node and operator types used to represent parsed
//! math expressions, along with utilities for traversing the tree.

pub mod ast;
pub mod conversions;
pub mod operator;
pub mod visit;

// Re-export commonly used types
pub use ast::{ArityError, AstNode, OperatorNode};
pub use operator::{Operator, Precedence};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A result type for AST serialization helpers.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, serde_json::Error>;

/// Serializes an AST node to a pretty-printed JSON string.
///
/// # Example
///
/// ```
/// use mathex_ast::AstNode;
/// use mathex_ast::to_json;
///
/// let expr = AstNode::literal(42.0);
/// let json = to_json(&expr).unwrap();
/// assert!(json.contains("Literal"));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
}

/// Deserializes an AST node from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    serde_json::from_str(json)
}
