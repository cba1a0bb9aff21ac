//! End-to-end tests through the facade: lex, parse, print, and evaluate.

use mathex::{eval, parse, Bindings};
use pretty_assertions::assert_eq;
use tests::{core, core_unary, lit, node, var};

#[test]
fn parse_then_eval_agrees_with_hand_computation() {
    let bindings = Bindings::from([("x".to_string(), 2.0), ("y".to_string(), 3.0)]);
    assert_eq!(eval("3x + y", &bindings), Ok(9.0));
    assert_eq!(eval("x^2y^2", &bindings), Ok(36.0));
    assert_eq!(eval("(x + y)(x - y)", &bindings), Ok(-5.0));
    assert_eq!(eval("-sin(0)x", &bindings), Ok(-0.0));
}

#[test]
fn display_output_reparses_to_the_same_tree() {
    for source in ["1 + 2 * 3", "-sin(3.14)", "x^2y^2", "(1 + 2) / x", "--12"] {
        let tree = parse(source).unwrap();
        let reparsed = parse(&tree.to_string()).unwrap();
        assert_eq!(reparsed, tree, "display of {source:?} did not reparse");
    }
}

#[test]
fn variables_are_reported_in_appearance_order() {
    let tree = parse("b + a * b + sin(c)").unwrap();
    assert_eq!(
        tree.variables(),
        vec!["b".to_string(), "a".to_string(), "c".to_string()]
    );
}

#[test]
fn whitespace_and_newlines_do_not_change_the_tree() {
    let compact = parse("1+2*x").unwrap();
    let spread = parse("  1 +\n\t2 * x\n").unwrap();
    assert_eq!(spread, compact);
}

#[test]
fn facade_tree_matches_hand_built_tree() {
    assert_eq!(
        parse("4 - -3").unwrap(),
        node(
            core("-"),
            vec![lit(4.0), node(core_unary("-"), vec![lit(3.0)])]
        )
    );
    assert_eq!(
        parse("xsin(y)").unwrap(),
        node(
            core("*"),
            vec![var("x"), node(core("sin"), vec![var("y")])]
        )
    );
}
