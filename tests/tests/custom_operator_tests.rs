//! Custom operator registration through the facade.

use mathex::{eval_tree, Bindings, EvalError, Operator, ParseError, Parser};
use mathex_ast::ArityError;
use pretty_assertions::assert_eq;
use tests::{core, lit, node, var};

fn parser_with_extras() -> Parser {
    let mut parser = Parser::new();
    parser.add_operator(Operator::function("Max", "max", 2));
    parser.add_operator(Operator::function("Hyperbolic Sine", "sinh", 1));
    parser.add_operator(Operator::unary("Factorial-ish", "$"));
    parser
}

#[test]
fn custom_functions_parse_alongside_the_default_set() {
    let parser = parser_with_extras();
    assert_eq!(
        parser.parse("max(sinh(x), sin(x))").unwrap(),
        node(
            Operator::function("Max", "max", 2),
            vec![
                node(Operator::function("Hyperbolic Sine", "sinh", 1), vec![var("x")]),
                node(core("sin"), vec![var("x")]),
            ]
        )
    );
}

#[test]
fn longer_custom_names_shadow_shorter_defaults() {
    // `sinh` must not be carved into `sin` followed by a variable `h`.
    let parser = parser_with_extras();
    assert_eq!(
        parser.parse("sinh(1)").unwrap(),
        node(Operator::function("Hyperbolic Sine", "sinh", 1), vec![lit(1.0)])
    );
}

#[test]
fn custom_function_arity_is_enforced() {
    let parser = parser_with_extras();
    assert_eq!(
        parser.parse("max(1, 2, 3)"),
        Err(ParseError::Arity(ArityError {
            symbol: "max".to_string(),
            expected: 2,
            found: 3,
        }))
    );
}

#[test]
fn custom_operators_parse_but_do_not_evaluate() {
    let parser = parser_with_extras();
    let tree = parser.parse("$3").unwrap();
    assert_eq!(
        eval_tree(&tree, &Bindings::new()),
        Err(EvalError::UnknownOperator {
            symbol: "$".to_string(),
        })
    );
}
