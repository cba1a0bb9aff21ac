//! AST node definitions and the validating node factories.

use std::fmt;

use crate::operator::Operator;
use crate::visit::{self, VisitResult, Visitor};

/// Raised when an operator is combined with the wrong number of operands.
///
/// Trees are only ever built through [`AstNode::operator`], so every tree
/// that exists satisfies the arity invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("operator `{symbol}` takes {expected} operand(s), but {found} were supplied")]
pub struct ArityError {
    pub symbol: String,
    pub expected: usize,
    pub found: usize,
}

/// A node in a parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AstNode {
    /// A numeric constant, e.g. `3.14`.
    Literal(f64),
    /// A named value left unresolved until evaluation, e.g. `x`.
    Variable(String),
    /// An operator applied to exactly `operator.arity()` operands.
    Operator(Box<OperatorNode>),
}

/// An operator application. `args` are ordered left to right as written in
/// the source, and the node owns them outright: the tree is never shared.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatorNode {
    pub operator: Operator,
    pub args: Vec<AstNode>,
}

impl AstNode {
    /// Creates a literal node.
    pub fn literal(value: f64) -> Self {
        AstNode::Literal(value)
    }

    /// Creates a variable node.
    pub fn variable<S: Into<String>>(name: S) -> Self {
        AstNode::Variable(name.into())
    }

    /// Creates an operator node, validating the operand count against the
    /// operator's arity. This is the only way to build an operator node, so
    /// a malformed tree cannot be constructed.
    pub fn operator(operator: Operator, args: Vec<AstNode>) -> Result<Self, ArityError> {
        if args.len() != operator.arity() {
            return Err(ArityError {
                symbol: operator.symbol().to_string(),
                expected: operator.arity(),
                found: args.len(),
            });
        }
        Ok(AstNode::Operator(Box::new(OperatorNode { operator, args })))
    }

    /// Collects the free variable names in this tree, in first-appearance
    /// order, without duplicates.
    pub fn variables(&self) -> Vec<String> {
        struct Collector {
            names: Vec<String>,
        }

        impl Visitor for Collector {
            type Output = ();

            fn visit_variable(&mut self, name: &str) -> VisitResult {
                if !self.names.iter().any(|n| n == name) {
                    self.names.push(name.to_string());
                }
                Ok(())
            }
        }

        let mut collector = Collector { names: Vec::new() };
        // The collector never fails.
        let _ = visit::walk(&mut collector, self);
        collector.names
    }
}

impl fmt::Display for AstNode {
    /// Renders a fully parenthesized infix form of the tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Literal(value) => write!(f, "{value}"),
            AstNode::Variable(name) => write!(f, "{name}"),
            AstNode::Operator(node) => match (&node.operator, node.args.as_slice()) {
                (Operator::Binary { symbol, .. }, [left, right]) => {
                    write!(f, "({left} {symbol} {right})")
                }
                (Operator::Unary { symbol, .. }, [operand]) => write!(f, "{symbol}({operand})"),
                (operator, args) => {
                    write!(f, "{}(", operator.symbol())?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ")")
                }
            },
        }
    }
}
