//! The operator model: the three operator kinds and their metadata.

use std::fmt;

/// Relative binding strength of a binary operator.
///
/// When two operators compete for an operand (`2 + 3 * 7`), the one with the
/// higher precedence is resolved first. Only the ordering matters; the
/// numeric values reported by [`Precedence::value`] exist for logging.
///
/// Operators of equal precedence are grouped according to the parser's
/// associativity setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precedence {
    Low,
    Normal,
    Medium,
    High,
}

impl Precedence {
    /// A small ordinal for display purposes.
    pub fn value(self) -> u8 {
        match self {
            Precedence::Low => 1,
            Precedence::Normal => 2,
            Precedence::Medium => 3,
            Precedence::High => 4,
        }
    }
}

/// An operator that can appear in an expression.
///
/// The kind set is closed: prefix unary operators, infix binary operators,
/// and named functions invoked with call syntax. Unary operators always bind
/// tighter than any binary operator, so they carry no precedence of their
/// own. A function's arity is explicit and may exceed two.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Unary {
        name: String,
        symbol: String,
    },
    Binary {
        name: String,
        symbol: String,
        precedence: Precedence,
    },
    Function {
        name: String,
        symbol: String,
        arity: usize,
    },
}

impl Operator {
    /// Creates a prefix unary operator.
    pub fn unary<N: Into<String>, S: Into<String>>(name: N, symbol: S) -> Self {
        Operator::Unary {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// Creates an infix binary operator with the given precedence.
    pub fn binary<N: Into<String>, S: Into<String>>(
        name: N,
        symbol: S,
        precedence: Precedence,
    ) -> Self {
        Operator::Binary {
            name: name.into(),
            symbol: symbol.into(),
            precedence,
        }
    }

    /// Creates a function operator taking `arity` comma-separated arguments.
    pub fn function<N: Into<String>, S: Into<String>>(name: N, symbol: S, arity: usize) -> Self {
        Operator::Function {
            name: name.into(),
            symbol: symbol.into(),
            arity,
        }
    }

    /// The number of operands this operator consumes.
    pub fn arity(&self) -> usize {
        match self {
            Operator::Unary { .. } => 1,
            Operator::Binary { .. } => 2,
            Operator::Function { arity, .. } => *arity,
        }
    }

    /// The source symbol this operator is written as, e.g. `+` or `sin`.
    pub fn symbol(&self) -> &str {
        match self {
            Operator::Unary { symbol, .. }
            | Operator::Binary { symbol, .. }
            | Operator::Function { symbol, .. } => symbol,
        }
    }

    /// The human-readable operator name, e.g. `Sum`.
    pub fn name(&self) -> &str {
        match self {
            Operator::Unary { name, .. }
            | Operator::Binary { name, .. }
            | Operator::Function { name, .. } => name,
        }
    }

    /// Returns true if this is a prefix unary operator.
    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::Unary { .. })
    }

    /// Returns true if this is an infix binary operator.
    pub fn is_binary(&self) -> bool {
        matches!(self, Operator::Binary { .. })
    }

    /// Returns true if this is a function operator.
    pub fn is_function(&self) -> bool {
        matches!(self, Operator::Function { .. })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_ordering() {
        assert!(Precedence::Low < Precedence::Normal);
        assert!(Precedence::Normal < Precedence::Medium);
        assert!(Precedence::Medium < Precedence::High);
        assert_eq!(Precedence::Low.value(), 1);
        assert_eq!(Precedence::High.value(), 4);
    }

    #[test]
    fn test_arity_is_a_function_of_kind() {
        assert_eq!(Operator::unary("Negate", "-").arity(), 1);
        assert_eq!(Operator::binary("Sum", "+", Precedence::Low).arity(), 2);
        assert_eq!(Operator::function("Max", "max", 3).arity(), 3);
    }

    #[test]
    fn test_accessors() {
        let op = Operator::binary("Product", "*", Precedence::Normal);
        assert_eq!(op.symbol(), "*");
        assert_eq!(op.name(), "Product");
        assert!(op.is_binary());
        assert!(!op.is_unary());
        assert_eq!(op.to_string(), "*");
    }
}
