//! FILENAME: core/parser/src/error.rs
//! PURPOSE: Error types for tokenizing, parsing and loading parser configuration.
//! CONTEXT: Both lexical and syntax errors are fatal to the current parse. The first
//! error found is returned as-is; nothing is collected or recovered.

use thiserror::Error;

/// An input character the lexer does not recognize.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("unexpected character '{character}' at position {position}")]
pub struct LexicalError {
    pub character: char,
    pub position: usize,
}

/// A token that does not fit the grammar rule being parsed.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("{message} at position {position}")]
pub struct SyntaxError {
    pub message: String,
    pub position: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        SyntaxError {
            message: message.into(),
            position,
        }
    }
}

/// Any failure of the text-to-AST pipeline.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("lexical error: {0}")]
    Lexical(#[from] LexicalError),

    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// Character offset of the offending input.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Lexical(e) => e.position,
            ParseError::Syntax(e) => e.position,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid parser config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ParseResult<T> = Result<T, ParseError>;
