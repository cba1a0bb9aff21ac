//! The operator registry: the default operator set plus user registrations.

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;
use mathex_ast::operator::{Operator, Precedence};

lazy_static! {
    /// The default operator set every parser starts with.
    static ref CORE_OPERATORS: Vec<Operator> = vec![
        Operator::binary("Sum", "+", Precedence::Low),
        Operator::binary("Difference", "-", Precedence::Low),
        Operator::binary("Product", "*", Precedence::Normal),
        Operator::binary("Quotient", "/", Precedence::Normal),
        Operator::binary("Exponent", "^", Precedence::High),
        Operator::unary("Unary Minus", "-"),
        Operator::function("Natural Log", "log", 1),
        Operator::function("Sine", "sin", 1),
        Operator::function("Cosine", "cosin", 1),
        Operator::function("Tangent", "tan", 1),
    ];
}

/// Maps source symbols to operators. A symbol may carry more than one
/// operator as long as at most one per kind-class is meaningful at a given
/// position; `-` maps to both binary subtraction and unary negation, and
/// the resolver picks one based on the engine's disambiguation query.
#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    by_symbol: HashMap<String, Vec<Operator>>,
}

impl OperatorRegistry {
    /// An empty registry with no operators at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry loaded with the default operator set.
    pub fn with_core_operators() -> Self {
        let mut registry = Self::empty();
        for operator in CORE_OPERATORS.iter() {
            registry.register(operator.clone());
        }
        registry
    }

    /// Registers an operator under its symbol. Later registrations of the
    /// same symbol and kind shadow earlier ones.
    pub fn register(&mut self, operator: Operator) {
        debug!("registering operator `{}` ({})", operator.symbol(), operator.name());
        self.by_symbol
            .entry(operator.symbol().to_string())
            .or_default()
            .push(operator);
    }

    /// Resolves a symbol to an operator. When `prefer_unary` is set the
    /// unary registration wins (if any); otherwise the binary/function one
    /// does. Falls back to whatever kind is registered, so a symbol with
    /// only a unary registration still resolves after an operand (where
    /// implicit multiplication will splice in the product).
    pub fn resolve(&self, symbol: &str, prefer_unary: bool) -> Option<&Operator> {
        let candidates = self.by_symbol.get(symbol)?;
        candidates
            .iter()
            .rev()
            .find(|op| op.is_unary() == prefer_unary)
            .or_else(|| candidates.iter().next_back())
    }

    /// Finds the longest registered symbol that `text` starts with. Used to
    /// carve operator names out of a run of letters (`xsin` → `x`, `sin`).
    pub fn longest_symbol_match(&self, text: &str) -> Option<&Operator> {
        self.by_symbol
            .iter()
            .filter(|(symbol, _)| text.starts_with(symbol.as_str()))
            .max_by_key(|(symbol, _)| symbol.len())
            .and_then(|(_, candidates)| candidates.last())
    }
}
