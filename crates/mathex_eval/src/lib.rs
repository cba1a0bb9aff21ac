//! Numeric evaluation of mathex expression trees.
//!
//! Evaluation is a plain recursive walk: literals are themselves, variables
//! are looked up in the caller's bindings, and operator nodes apply the
//! built-in meaning of their operator to the evaluated operands. Trees built
//! through [`AstNode::operator`] already satisfy the arity invariant, so the
//! evaluator matches on operand slices without re-counting them.

use std::collections::HashMap;

use log::trace;
use mathex_ast::{AstNode, Operator};
use mathex_parser::ParseError;
use thiserror::Error;

/// Variable bindings for one evaluation, by name.
pub type Bindings = HashMap<String, f64>;

/// Errors produced while evaluating an expression.
#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    /// The source failed to parse; only raised by [`eval`].
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A variable in the tree has no binding.
    #[error("variable `{name}` is not bound to a value")]
    UndefinedVariable { name: String },

    /// An operator with no built-in meaning, e.g. a custom operator
    /// registered for parsing only.
    #[error("operator `{symbol}` has no evaluation rule")]
    UnknownOperator { symbol: String },
}

/// Parses `source` with the default parser and evaluates the result.
pub fn eval(source: &str, bindings: &Bindings) -> Result<f64, EvalError> {
    let tree = mathex_parser::parse(source)?;
    eval_tree(&tree, bindings)
}

/// Evaluates an already-parsed tree against the given bindings.
pub fn eval_tree(tree: &AstNode, bindings: &Bindings) -> Result<f64, EvalError> {
    match tree {
        AstNode::Literal(value) => Ok(*value),
        AstNode::Variable(name) => {
            bindings
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone() })
        }
        AstNode::Operator(node) => {
            let args = node
                .args
                .iter()
                .map(|arg| eval_tree(arg, bindings))
                .collect::<Result<Vec<f64>, EvalError>>()?;
            apply(&node.operator, &args)
        }
    }
}

/// Applies a built-in operator to its evaluated operands.
///
/// `log` is the natural logarithm and `cosin` is the cosine, matching the
/// names in the default operator set.
fn apply(operator: &Operator, args: &[f64]) -> Result<f64, EvalError> {
    let value = match (operator.symbol(), args) {
        ("-", [operand]) => -operand,
        ("+", [left, right]) => left + right,
        ("-", [left, right]) => left - right,
        ("*", [left, right]) => left * right,
        ("/", [left, right]) => left / right,
        ("^", [left, right]) => left.powf(*right),
        ("log", [operand]) => operand.ln(),
        ("sin", [operand]) => operand.sin(),
        ("cosin", [operand]) => operand.cos(),
        ("tan", [operand]) => operand.tan(),
        _ => {
            return Err(EvalError::UnknownOperator {
                symbol: operator.symbol().to_string(),
            })
        }
    };
    trace!("{} over {args:?} = {value}", operator.symbol());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bind(pairs: &[(&str, f64)]) -> Bindings {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn evaluates_arithmetic() {
        let none = Bindings::new();
        assert_eq!(eval("1 + 2 * 3", &none), Ok(7.0));
        assert_eq!(eval("(1 + 2) * 3", &none), Ok(9.0));
        // All binary operators group left by default, exponent included.
        assert_eq!(eval("2 ^ 3 ^ 2", &none), Ok(64.0));
        assert_eq!(eval("7 / 2", &none), Ok(3.5));
    }

    #[test]
    fn evaluates_unary_minus() {
        let none = Bindings::new();
        assert_eq!(eval("-3", &none), Ok(-3.0));
        assert_eq!(eval("4 - -3", &none), Ok(7.0));
        assert_eq!(eval("--12", &none), Ok(12.0));
    }

    #[test]
    fn evaluates_variables_from_bindings() {
        let bindings = bind(&[("x", 2.0), ("y", 5.0)]);
        assert_eq!(eval("3x + y", &bindings), Ok(11.0));
        assert_eq!(eval("xy", &bindings), Ok(10.0));
    }

    #[test]
    fn evaluates_function_operators() {
        let none = Bindings::new();
        assert_eq!(eval("sin(0)", &none), Ok(0.0));
        assert_eq!(eval("cosin(0)", &none), Ok(1.0));
        assert_eq!(eval("tan(0)", &none), Ok(0.0));
        assert_eq!(eval("log(1)", &none), Ok(0.0));
    }

    #[test]
    fn reports_unbound_variables() {
        let bindings = bind(&[("x", 2.0)]);
        assert_eq!(
            eval("x + z", &bindings),
            Err(EvalError::UndefinedVariable {
                name: "z".to_string(),
            })
        );
    }

    #[test]
    fn reports_operators_without_an_evaluation_rule() {
        let mut parser = mathex_parser::Parser::new();
        parser.add_operator(Operator::unary("Blah", "$"));
        let tree = parser.parse("$1").unwrap();
        assert_eq!(
            eval_tree(&tree, &Bindings::new()),
            Err(EvalError::UnknownOperator {
                symbol: "$".to_string(),
            })
        );
    }

    #[test]
    fn propagates_parse_errors() {
        assert!(matches!(
            eval("1 +", &Bindings::new()),
            Err(EvalError::Parse(_))
        ));
    }
}
