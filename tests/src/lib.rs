//! Shared helpers for the integration suites.

use mathex_ast::{AstNode, Operator};
use mathex_parser::Parser;

pub fn lit(value: f64) -> AstNode {
    AstNode::literal(value)
}

pub fn var(name: &str) -> AstNode {
    AstNode::variable(name)
}

/// Builds an operator node, panicking on an arity mismatch. Test trees are
/// written by hand, so a mismatch is a bug in the test itself.
pub fn node(operator: Operator, args: Vec<AstNode>) -> AstNode {
    AstNode::operator(operator, args).expect("test tree obeys arity")
}

/// The default-set operator registered for `symbol`, resolved the way the
/// parser would resolve it in binary position.
pub fn core(symbol: &str) -> Operator {
    Parser::new()
        .registry()
        .resolve(symbol, false)
        .expect("operator in the default set")
        .clone()
}

/// Like [`core`], but resolved in unary position.
pub fn core_unary(symbol: &str) -> Operator {
    Parser::new()
        .registry()
        .resolve(symbol, true)
        .expect("unary operator in the default set")
        .clone()
}
