//! JSON serialization of parsed trees.

use mathex::parse;
use mathex_ast::{from_json, to_json, AstNode};
use pretty_assertions::assert_eq;

#[test]
fn parsed_trees_round_trip_through_json() {
    for source in ["1 + 2 * 3", "max(1, 2)", "-sin(x)", "3x"] {
        let mut parser = mathex::Parser::new();
        parser.add_operator(mathex::Operator::function("Max", "max", 2));
        let tree = parser.parse(source).unwrap();
        let json = to_json(&tree).unwrap();
        let back: AstNode = from_json(&json).unwrap();
        assert_eq!(back, tree, "JSON of {source:?} did not round-trip");
    }
}

#[test]
fn json_names_the_node_kinds() {
    let json = to_json(&parse("1 + x").unwrap()).unwrap();
    assert!(json.contains("Operator"));
    assert!(json.contains("Literal"));
    assert!(json.contains("Variable"));
}
