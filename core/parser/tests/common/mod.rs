//! FILENAME: core/parser/tests/common/mod.rs
//! PURPOSE: Shared inputs and helpers for the integration tests.

#![allow(dead_code)]

use expr_parser::{tokenize, TokenKind};

/// Well-formed expressions covering every grammar rule.
pub const VALID_INPUTS: &[&str] = &[
    "42",
    "3.14",
    "x",
    "-x",
    "+7",
    "2 + 3 * 4",
    "(2 + 3) * 4",
    "2 - 3 - 4",
    "2 ^ 3 ^ 2",
    "-2^2",
    "log(8, 2)",
    "sin()",
    "2 + 3.14 * sin(0.5)",
    "cos(x) ^ 2 + sin(x) ^ 2",
    "tan(-(a + b) / 2, c, log(d))",
    "((((1))))",
    "1 - 2 * x ^ 2 / 4 + y",
    "--+-.5 * _tmp9",
];

/// Malformed expressions with the offset the error must point at.
pub const INVALID_INPUTS: &[(&str, usize)] = &[
    ("", 0),
    ("2 +", 3),
    ("sin(1", 5),
    ("2 3", 2),
    ("(1 + 2", 6),
    ("1 + 2)", 5),
    ("log(1,)", 6),
    ("sin 1", 4),
    (")", 0),
    (",", 0),
    ("2 # 3", 2),
];

/// Number of literal and identifier tokens in `input`.
pub fn operand_token_count(input: &str) -> usize {
    tokenize(input)
        .unwrap()
        .iter()
        .filter(|t| {
            matches!(
                t.kind,
                TokenKind::Integer | TokenKind::Float | TokenKind::Identifier
            )
        })
        .count()
}
