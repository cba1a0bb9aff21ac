//! Parser for infix math expressions.
//!
//! The [`Parser`] is a thin driver: it lexes the source, resolves each
//! lexeme against the [`OperatorRegistry`], asks the engine whether a bare
//! minus is unary or binary, and feeds the engine one classified token per
//! pass. All precedence, associativity, implicit-multiplication, and arity
//! logic lives in [`processor::OperatorProcessor`].

use log::debug;
use mathex_ast::ast::AstNode;
use mathex_ast::operator::Operator;
use mathex_lexer::lexer::Lexer;
use mathex_lexer::token::{Location, TokenType};

mod error;
pub mod processor;
mod registry;

pub use error::ParseError;
pub use processor::{CloseSymbol, OperatorProcessor};
pub use registry::OperatorRegistry;

/// Configuration for a [`Parser`].
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Insert a product operator between adjacent operand-like tokens
    /// (`3x`, `(1)(2)`). On by default.
    pub implicit_multiply: bool,
    /// Group equal-precedence binary operators leftmost-first. On by
    /// default; turn off for right associativity.
    pub left_associative: bool,
    /// When set, restricts variables to these names; longer names win over
    /// single letters when carving variables out of a run of letters.
    pub valid_variables: Option<Vec<String>>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            implicit_multiply: true,
            left_associative: true,
            valid_variables: None,
        }
    }
}

/// An expression parser: configuration plus an operator registry.
///
/// `parse` borrows the parser immutably and builds a fresh engine per call,
/// so one parser may serve concurrent parses.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
    registry: OperatorRegistry,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// A parser with the default configuration and operator set.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// A parser with the given configuration and the default operator set.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            registry: OperatorRegistry::with_core_operators(),
        }
    }

    /// Registers a custom operator on top of the default set.
    pub fn add_operator(&mut self, operator: Operator) {
        self.registry.register(operator);
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Parses `source` into a single expression tree.
    pub fn parse(&self, source: &str) -> Result<AstNode, ParseError> {
        debug!("parsing {source:?}");
        let product = self
            .registry
            .resolve("*", false)
            .cloned()
            .ok_or_else(|| ParseError::syntax("no product operator registered"))?;
        let mut engine = OperatorProcessor::new(
            self.config.implicit_multiply,
            self.config.left_associative,
            product,
        );

        // Set right after a function operator: its argument list must open
        // immediately, and the engine's start-of-function marker already
        // plays the open-group role, so the paren is consumed here rather
        // than fed to the engine.
        let mut pending_call = false;

        for token in Lexer::new(source) {
            let at = token.location;
            if pending_call {
                if token.token_type == TokenType::LeftParen {
                    pending_call = false;
                    continue;
                }
                return Err(ParseError::syntax(format!(
                    "expected `(` after function name at {at}"
                )));
            }
            match token.token_type {
                TokenType::Number(value) => {
                    engine.start_pass()?;
                    engine.add_literal(value, at)?;
                }
                TokenType::Word(word) => {
                    pending_call = self.feed_word(&mut engine, &word, at)?;
                }
                TokenType::Symbol(symbol) => {
                    engine.start_pass()?;
                    let prefer_unary = engine.should_treat_minus_as_unary();
                    let operator = self
                        .registry
                        .resolve(&symbol.to_string(), prefer_unary)
                        .cloned()
                        .ok_or(ParseError::UnknownSymbol {
                            symbol,
                            location: at,
                        })?;
                    engine.add_operator(operator, at)?;
                }
                TokenType::LeftParen => {
                    engine.start_pass()?;
                    engine.add_open_paren(at)?;
                }
                TokenType::RightParen => {
                    engine.start_pass()?;
                    engine.add_close_symbol(CloseSymbol::Paren, at)?;
                }
                TokenType::Comma => {
                    engine.start_pass()?;
                    engine.add_close_symbol(CloseSymbol::Comma, at)?;
                }
                TokenType::Error(message) => return Err(ParseError::syntax(message)),
            }
        }
        if pending_call {
            return Err(ParseError::syntax(
                "expected `(` after function name at end of input",
            ));
        }
        engine.finish()
    }

    /// Splits a run of letters into operator names and variables, feeding
    /// each piece to the engine as its own pass. Returns true when the word
    /// ended in a function operator whose `(` is still outstanding.
    fn feed_word(
        &self,
        engine: &mut OperatorProcessor,
        word: &str,
        at: Location,
    ) -> Result<bool, ParseError> {
        let mut rest = word;
        while !rest.is_empty() {
            if let Some(operator) = self.registry.longest_symbol_match(rest) {
                let operator = operator.clone();
                let matched = operator.symbol().len();
                let is_function = operator.is_function();
                engine.start_pass()?;
                engine.add_operator(operator, at)?;
                rest = &rest[matched..];
                if is_function {
                    if !rest.is_empty() {
                        return Err(ParseError::syntax(format!(
                            "function call must open with `(` at {at}"
                        )));
                    }
                    return Ok(true);
                }
                continue;
            }
            let name = self.take_variable(rest, at)?;
            let matched = name.len();
            engine.start_pass()?;
            engine.add_variable(name, at)?;
            rest = &rest[matched..];
        }
        Ok(false)
    }

    /// Carves one variable name off the front of a letter run.
    fn take_variable(&self, rest: &str, at: Location) -> Result<String, ParseError> {
        match &self.config.valid_variables {
            Some(valid) => valid
                .iter()
                .filter(|name| rest.starts_with(name.as_str()))
                .max_by_key(|name| name.len())
                .cloned()
                .ok_or_else(|| ParseError::InvalidVariable {
                    name: rest.chars().take(1).collect(),
                    location: at,
                }),
            None => match rest.chars().next() {
                Some(c) => Ok(c.to_string()),
                None => Err(ParseError::syntax(format!("empty variable at {at}"))),
            },
        }
    }
}

/// Parses `source` with the default configuration and operator set.
pub fn parse(source: &str) -> Result<AstNode, ParseError> {
    Parser::new().parse(source)
}
