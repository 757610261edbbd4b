//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.
//! Each token keeps its source spelling and the character offset it started at,
//! which is only used to point diagnostics at the right place.

use crate::ast::{BinaryOperator, Function};
use std::fmt;

/// The closed set of token kinds recognized by the lexer.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Literals
    Integer,
    Float,
    Identifier,

    // Operators
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,

    // Delimiters
    LParen,
    RParen,
    Comma,

    // Reserved function names
    Sin,
    Cos,
    Tan,
    Log,

    // Special
    Eof,
}

impl TokenKind {
    /// Maps a reserved function-name kind to its function.
    pub fn function(self) -> Option<Function> {
        match self {
            TokenKind::Sin => Some(Function::Sin),
            TokenKind::Cos => Some(Function::Cos),
            TokenKind::Tan => Some(Function::Tan),
            TokenKind::Log => Some(Function::Log),
            _ => None,
        }
    }

    /// Maps an operator kind to the binary operator it spells.
    pub fn binary_operator(self) -> Option<BinaryOperator> {
        match self {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Subtract),
            TokenKind::Multiply => Some(BinaryOperator::Multiply),
            TokenKind::Divide => Some(BinaryOperator::Divide),
            TokenKind::Power => Some(BinaryOperator::Power),
            _ => None,
        }
    }

    /// Classifies a scanned word: reserved function names are matched exactly
    /// (case-sensitive), everything else is an identifier.
    pub fn for_word(word: &str) -> TokenKind {
        match word {
            "sin" => TokenKind::Sin,
            "cos" => TokenKind::Cos,
            "tan" => TokenKind::Tan,
            "log" => TokenKind::Log,
            _ => TokenKind::Identifier,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Power => "POWER",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Sin => "SIN",
            TokenKind::Cos => "COS",
            TokenKind::Tan => "TAN",
            TokenKind::Log => "LOG",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// A single lexical unit: its kind, source spelling and starting character offset.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            value: value.into(),
            position,
        }
    }

    /// The end-of-input marker, placed one past the last character.
    pub fn eof(position: usize) -> Self {
        Token::new(TokenKind::Eof, "", position)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Offset of the first character after this token.
    pub fn end(&self) -> usize {
        self.position + self.value.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            kind => write!(f, "{} '{}'", kind, self.value),
        }
    }
}
