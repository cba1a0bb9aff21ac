//! Convenience conversions into [`AstNode`] leaves.

use crate::ast::AstNode;

impl From<f64> for AstNode {
    fn from(value: f64) -> Self {
        AstNode::literal(value)
    }
}

impl From<&str> for AstNode {
    fn from(name: &str) -> Self {
        AstNode::variable(name)
    }
}

impl From<String> for AstNode {
    fn from(name: String) -> Self {
        AstNode::variable(name)
    }
}
