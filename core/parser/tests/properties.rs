//! FILENAME: core/parser/tests/properties.rs
//! PURPOSE: Structural properties that must hold for every input.

mod common;

use common::{operand_token_count, INVALID_INPUTS, VALID_INPUTS};
use expr_parser::{parse, tokenize, ParseError};

#[test]
fn leaf_count_matches_operand_tokens() {
    for input in VALID_INPUTS {
        let program = parse(input).unwrap();
        assert_eq!(
            program.leaf_count(),
            operand_token_count(input),
            "leaf count for {:?}",
            input
        );
    }
}

#[test]
fn internal_nodes_fewer_than_tokens() {
    for input in VALID_INPUTS {
        let program = parse(input).unwrap();
        let token_count = tokenize(input).unwrap().len();
        assert!(
            program.internal_count() < token_count,
            "{:?}: {} internal nodes, {} tokens",
            input,
            program.internal_count(),
            token_count
        );
    }
}

#[test]
fn tokenizing_is_idempotent() {
    for input in VALID_INPUTS {
        assert_eq!(tokenize(input).unwrap(), tokenize(input).unwrap());
    }
}

#[test]
fn token_sequence_ends_with_single_eof() {
    for input in VALID_INPUTS {
        let tokens = tokenize(input).unwrap();
        let eof_count = tokens.iter().filter(|t| t.is_eof()).count();
        assert_eq!(eof_count, 1);
        assert!(tokens.last().unwrap().is_eof());
    }
}

#[test]
fn printed_form_parses_to_same_tree() {
    for input in VALID_INPUTS {
        let program = parse(input).unwrap();
        let reparsed = parse(&program.to_string()).unwrap();
        assert_eq!(program, reparsed, "round trip of {:?}", input);
    }
}

#[test]
fn errors_point_at_offending_input() {
    for (input, position) in INVALID_INPUTS {
        let err: ParseError = parse(input).unwrap_err();
        assert_eq!(err.position(), *position, "error position for {:?}", input);
    }
}

#[test]
fn json_form_deserializes_to_same_tree() {
    for input in VALID_INPUTS {
        let program = parse(input).unwrap();
        let json = serde_json::to_string(&program).unwrap();
        let back: expr_parser::Program = serde_json::from_str(&json).unwrap();
        assert_eq!(program, back);
    }
}
