//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the arithmetic expression parser.
//! CONTEXT: This module exposes the lexer, parser, and AST components
//! needed to convert expression strings into syntax trees.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Parser --> AST (Program)
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /, ^ (power, right-associative)
//! - Integer and decimal literals: 42, 3.14
//! - Identifiers: x, rate_2
//! - Function calls: sin(x), cos(x), tan(x), log(8, 2)
//! - Parentheses for grouping
//! - Unary signs: -5, +5

pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;


// Re-export commonly used types for convenience
pub use ast::{Associativity, BinaryOperator, Function, Node, Number, Program, UnaryOperator};
pub use config::ParserConfig;
pub use error::{ConfigError, LexicalError, ParseError, ParseResult, SyntaxError};
pub use lexer::{tokenize, Lexer};
pub use parser::{parse, parse_tokens, parse_with_config, Parser};
pub use printer::{print_ast, render_tree, write_tree};
pub use token::{Token, TokenKind};
