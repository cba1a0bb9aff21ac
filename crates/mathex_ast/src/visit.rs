//! Visitor pattern for traversing expression trees.
//!
//! Implement [`Visitor`] and hand it to [`walk`] to run an operation over a
//! tree. The default method implementations recurse into operator operands
//! and return `Ok(Default::default())` for leaves.

use crate::ast::{AstNode, OperatorNode};

/// The result type for visitor operations.
pub type VisitResult<T = ()> = Result<T, VisitError>;

/// An error raised by a visitor implementation.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    #[error("{0}")]
    Custom(String),
}

impl VisitError {
    /// Creates a new custom error with the given message.
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        VisitError::Custom(msg.into())
    }
}

/// A visitor over expression trees.
pub trait Visitor {
    /// The output type produced per visited node.
    type Output: Default;

    fn visit_literal(&mut self, _value: f64) -> VisitResult<Self::Output> {
        Ok(Default::default())
    }

    fn visit_variable(&mut self, _name: &str) -> VisitResult<Self::Output> {
        Ok(Default::default())
    }

    fn visit_operator(&mut self, node: &OperatorNode) -> VisitResult<Self::Output> {
        for arg in &node.args {
            walk(self, arg)?;
        }
        Ok(Default::default())
    }
}

/// Dispatches a visitor over one node.
pub fn walk<V: Visitor + ?Sized>(visitor: &mut V, node: &AstNode) -> VisitResult<V::Output> {
    match node {
        AstNode::Literal(value) => visitor.visit_literal(*value),
        AstNode::Variable(name) => visitor.visit_variable(name),
        AstNode::Operator(op) => visitor.visit_operator(op),
    }
}
