//! The operator-resolution engine.
//!
//! A single-pass, shunting-yard-style state machine. The driver classifies
//! each lexeme, then feeds the engine one token per pass; the engine keeps
//! two stacks (produced AST nodes, and pending operators interleaved with
//! group/call markers) and incrementally reduces them into a single tree.
//!
//! One processor handles exactly one parse: after [`OperatorProcessor::finish`]
//! returns, the processor accepts nothing further, and a failed parse leaves
//! no recoverable state behind.

use log::{debug, trace};
use mathex_ast::operator::{Operator, Precedence};
use mathex_ast::{ArityError, AstNode};
use mathex_lexer::token::Location;

use super::error::ParseError;

/// The classification of the token handled in one pass. Used to detect
/// implicit-multiplication sites and to answer the unary-minus query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Literal,
    Variable,
    UnaryOp,
    BinaryOp,
    FunctionOp,
    OpenParen,
    Comma,
    CloseParen,
}

/// A close symbol ends an expression run: either an argument separator or a
/// group/call terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseSymbol {
    Comma,
    Paren,
}

/// One slot on the operator stack: a pending operator, or a sentinel marker
/// delimiting a parenthesized group or a function's argument list.
#[derive(Debug, Clone)]
enum StackEntry {
    Op(Operator),
    /// A `(` group awaiting its `)`.
    OpenGroup,
    /// Start of a function's argument list. `operand_mark` is the operand
    /// stack depth when the call opened; once the closing paren has reduced
    /// everything above it, the depth delta is the argument count. Keeping
    /// the mark per call (rather than one global counter) stays correct for
    /// nested calls.
    FunctionStart { operand_mark: usize },
}

/// The engine. Fed one token per pass by the driver.
pub struct OperatorProcessor {
    implicit_multiply: bool,
    left_associative: bool,
    /// The operator inserted for implicit multiplication.
    product: Operator,
    /// Nodes awaiting combination; top is the most recently produced.
    operands: Vec<AstNode>,
    /// Pending operators and markers; top is the most recently pushed.
    operators: Vec<StackEntry>,
    /// Classification of the previous pass's token.
    kind_last: Option<TokenKind>,
    /// Classification of the current pass's token.
    kind_current: Option<TokenKind>,
    done: bool,
}

impl OperatorProcessor {
    /// Creates an engine for one parse. `product` is the binary operator
    /// spliced in where implicit multiplication applies.
    pub fn new(implicit_multiply: bool, left_associative: bool, product: Operator) -> Self {
        Self {
            implicit_multiply,
            left_associative,
            product,
            operands: Vec::new(),
            operators: Vec::new(),
            kind_last: None,
            kind_current: None,
            done: false,
        }
    }

    /// Called by the driver before classifying the next input token. Shifts
    /// the current classification into the previous slot.
    pub fn start_pass(&mut self) -> Result<(), ParseError> {
        if self.done {
            return Err(ParseError::syntax("token received after the expression was finished"));
        }
        self.kind_last = self.kind_current.take();
        Ok(())
    }

    /// Should a bare minus sign be treated as unary negation?
    ///
    /// True unless the previous token could complete a left operand (a
    /// literal, a variable, or a close paren), in which case the minus is a
    /// plausible binary subtraction.
    pub fn should_treat_minus_as_unary(&self) -> bool {
        !matches!(
            self.kind_last,
            Some(TokenKind::Literal | TokenKind::Variable | TokenKind::CloseParen)
        )
    }

    /// Adds a literal operand.
    pub fn add_literal(&mut self, value: f64, at: Location) -> Result<(), ParseError> {
        trace!("literal {value} at {at}");
        self.kind_current = Some(TokenKind::Literal);
        self.maybe_implicit_multiply()?;
        self.operands.push(AstNode::literal(value));
        Ok(())
    }

    /// Adds a variable operand.
    pub fn add_variable(&mut self, name: String, at: Location) -> Result<(), ParseError> {
        trace!("variable {name} at {at}");
        self.kind_current = Some(TokenKind::Variable);
        self.maybe_implicit_multiply()?;
        self.operands.push(AstNode::variable(name));
        Ok(())
    }

    /// Adds an operator, dispatching on its kind.
    ///
    /// A unary operator is simply pushed; it outranks everything and is
    /// reduced as soon as its operand is complete. A binary operator first
    /// reduces every pending operator that binds at least as tightly
    /// (strictly more tightly in right-associative mode). A function pushes
    /// itself plus a start-of-arguments marker; the driver is expected to
    /// consume the call's opening paren itself, since the marker plays the
    /// open-group role.
    pub fn add_operator(&mut self, operator: Operator, at: Location) -> Result<(), ParseError> {
        trace!("operator {} at {at}", operator.symbol());
        match &operator {
            Operator::Unary { .. } => {
                self.kind_current = Some(TokenKind::UnaryOp);
                self.maybe_implicit_multiply()?;
                self.operators.push(StackEntry::Op(operator));
                Ok(())
            }
            Operator::Binary { precedence, .. } => {
                self.kind_current = Some(TokenKind::BinaryOp);
                let precedence = *precedence;
                self.push_binary(operator, precedence)
            }
            Operator::Function { .. } => {
                self.kind_current = Some(TokenKind::FunctionOp);
                self.maybe_implicit_multiply()?;
                let operand_mark = self.operands.len();
                self.operators.push(StackEntry::Op(operator));
                self.operators.push(StackEntry::FunctionStart { operand_mark });
                Ok(())
            }
        }
    }

    /// Opens a parenthesized group.
    pub fn add_open_paren(&mut self, at: Location) -> Result<(), ParseError> {
        trace!("open group at {at}");
        self.kind_current = Some(TokenKind::OpenParen);
        self.maybe_implicit_multiply()?;
        self.operators.push(StackEntry::OpenGroup);
        Ok(())
    }

    /// Handles a close symbol (`,` or `)`): reduces every pending operator
    /// down to the innermost marker, then settles the marker.
    ///
    /// A comma leaves a start-of-function marker in place so later arguments
    /// accumulate against the same call; a comma whose innermost marker is
    /// not a function start is malformed. A close paren discards an open
    /// group, or completes a function call, validating the supplied argument
    /// count against the function's declared arity.
    pub fn add_close_symbol(&mut self, close: CloseSymbol, at: Location) -> Result<(), ParseError> {
        trace!("close {close:?} at {at}");
        self.kind_current = Some(match close {
            CloseSymbol::Comma => TokenKind::Comma,
            CloseSymbol::Paren => TokenKind::CloseParen,
        });
        self.maybe_implicit_multiply()?;

        while matches!(self.operators.last(), Some(StackEntry::Op(_))) {
            if let Some(StackEntry::Op(operator)) = self.operators.pop() {
                self.reduce(operator)?;
            }
        }

        match close {
            CloseSymbol::Comma => match self.operators.last() {
                Some(StackEntry::FunctionStart { .. }) => Ok(()),
                _ => Err(ParseError::syntax(format!(
                    "`,` outside of a function argument list at {at}"
                ))),
            },
            CloseSymbol::Paren => match self.operators.pop() {
                Some(StackEntry::OpenGroup) => Ok(()),
                Some(StackEntry::FunctionStart { operand_mark }) => {
                    self.finish_call(operand_mark, at)
                }
                Some(StackEntry::Op(_)) | None => {
                    Err(ParseError::syntax(format!("unmatched `)` at {at}")))
                }
            },
        }
    }

    /// Drains the remaining operator stack and returns the finished tree.
    /// Any marker still on the stack, or anything other than exactly one
    /// remaining operand, is a malformed expression. Afterwards the engine
    /// accepts no further tokens.
    pub fn finish(&mut self) -> Result<AstNode, ParseError> {
        if self.done {
            return Err(ParseError::syntax("expression already finished"));
        }
        self.done = true;

        while let Some(entry) = self.operators.pop() {
            match entry {
                StackEntry::Op(operator) => self.reduce(operator)?,
                StackEntry::OpenGroup => {
                    return Err(ParseError::syntax("unbalanced `(`"));
                }
                StackEntry::FunctionStart { .. } => {
                    return Err(ParseError::syntax("unterminated function call"));
                }
            }
        }

        let root = self
            .operands
            .pop()
            .ok_or_else(|| ParseError::syntax("empty expression"))?;
        if !self.operands.is_empty() {
            return Err(ParseError::syntax(
                "expression does not reduce to a single tree",
            ));
        }
        Ok(root)
    }

    /// Reduces pending operators that outrank `precedence`, then pushes the
    /// incoming binary operator. Shared by explicit binary operators and the
    /// silent implicit-multiplication path.
    fn push_binary(&mut self, operator: Operator, precedence: Precedence) -> Result<(), ParseError> {
        loop {
            let pops = match self.operators.last() {
                // Unary operators always bind tighter than any binary.
                Some(StackEntry::Op(Operator::Unary { .. })) => true,
                Some(StackEntry::Op(Operator::Binary { precedence: top, .. })) => {
                    if self.left_associative {
                        *top >= precedence
                    } else {
                        *top > precedence
                    }
                }
                // Function operators sit beneath a FunctionStart marker and
                // are reduced by their closing paren, never compared here.
                _ => false,
            };
            if !pops {
                break;
            }
            if let Some(StackEntry::Op(top)) = self.operators.pop() {
                self.reduce(top)?;
            }
        }
        self.operators.push(StackEntry::Op(operator));
        Ok(())
    }

    /// Pops a completed function call: the marker has already been removed,
    /// the function operator sits on top, and everything reduced since the
    /// marker's operand mark is an argument.
    fn finish_call(&mut self, operand_mark: usize, at: Location) -> Result<(), ParseError> {
        let operator = match self.operators.pop() {
            Some(StackEntry::Op(operator @ Operator::Function { .. })) => operator,
            _ => {
                return Err(ParseError::syntax(format!(
                    "malformed function call at {at}"
                )))
            }
        };

        let supplied = self
            .operands
            .len()
            .checked_sub(operand_mark)
            .ok_or_else(|| ParseError::syntax(format!("malformed function call at {at}")))?;
        if supplied != operator.arity() {
            return Err(ArityError {
                symbol: operator.symbol().to_string(),
                expected: operator.arity(),
                found: supplied,
            }
            .into());
        }
        self.reduce(operator)
    }

    /// Pops an operator's worth of operands (most recent = rightmost child),
    /// combines them into one node, and pushes the node back.
    fn reduce(&mut self, operator: Operator) -> Result<(), ParseError> {
        let arity = operator.arity();
        if self.operands.len() < arity {
            return Err(ArityError {
                symbol: operator.symbol().to_string(),
                expected: arity,
                found: self.operands.len(),
            }
            .into());
        }
        debug!("reduce {} over {arity} operand(s)", operator.symbol());
        let args = self.operands.split_off(self.operands.len() - arity);
        let node = AstNode::operator(operator, args)?;
        self.operands.push(node);
        Ok(())
    }

    /// Splices in a product operator where two operand-like tokens sit side
    /// by side (`3x`, `(1)(2)`, `2$1`). The insertion goes through the same
    /// reduction path as an explicit binary operator but leaves the
    /// last/current token-kind bookkeeping untouched, so the adjacency check
    /// for the next token still sees the true last token.
    fn maybe_implicit_multiply(&mut self) -> Result<(), ParseError> {
        if !self.implicit_multiply {
            return Ok(());
        }
        let left = matches!(
            self.kind_last,
            Some(TokenKind::CloseParen | TokenKind::Variable | TokenKind::Literal)
        );
        let right = matches!(
            self.kind_current,
            Some(
                TokenKind::OpenParen
                    | TokenKind::UnaryOp
                    | TokenKind::FunctionOp
                    | TokenKind::Literal
                    | TokenKind::Variable
            )
        );
        if left && right {
            trace!("inserting implicit product");
            let product = self.product.clone();
            let precedence = match &product {
                Operator::Binary { precedence, .. } => *precedence,
                _ => Precedence::Normal,
            };
            self.push_binary(product, precedence)?;
        }
        Ok(())
    }
}
