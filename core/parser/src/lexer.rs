//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces the full sequence of Tokens.
//! CONTEXT: This is the first stage of the parsing pipeline. It skips whitespace,
//! reads integer and decimal literals, identifiers and the reserved function names,
//! and the single-character operators. The whole input is scanned eagerly before
//! parsing begins; the first unrecognized character aborts the scan.
//!
//! SUPPORTED TOKENS:
//! - Numbers: 42, 3.14, 3., .5 (no exponents, no sign)
//! - Identifiers: x, _tmp, rate2
//! - Functions: sin cos tan log (exact, case-sensitive)
//! - Single char: + - * / ^ ( ) ,

use crate::error::LexicalError;
use crate::token::{Token, TokenKind};
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    /// Character offset of the next unread character.
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
            position: 0,
        }
    }

    /// Scans the remaining input. The result always ends with exactly one EOF token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexicalError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            log::trace!(target: "lexer", "{} at {}", token, token.position);
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
        log::debug!(target: "lexer", "scanned {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Advances the lexer and returns the next token.
    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        self.skip_whitespace();

        let start = self.position;
        let ch = match self.bump() {
            Some(ch) => ch,
            None => return Ok(Token::eof(start)),
        };

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '^' => TokenKind::Power,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,

            ch if ch.is_ascii_digit() => return Ok(self.read_number(ch, start)),

            // A leading dot only starts a number when a digit follows it
            '.' if self.input.peek().is_some_and(|c| c.is_ascii_digit()) => {
                return Ok(self.read_number(ch, start));
            }

            ch if is_identifier_start(ch) => return Ok(self.read_word(ch, start)),

            character => {
                return Err(LexicalError {
                    character,
                    position: start,
                })
            }
        };

        Ok(Token::new(kind, ch.to_string(), start))
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.input.next()?;
        self.position += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn read_number(&mut self, first_char: char, start: usize) -> Token {
        let mut number_str = String::from(first_char);
        let mut has_dot = first_char == '.';

        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_digit() {
                number_str.push(ch);
            } else if ch == '.' && !has_dot {
                has_dot = true;
                number_str.push(ch);
            } else {
                break;
            }
            self.bump();
        }

        let kind = if has_dot {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        Token::new(kind, number_str, start)
    }

    fn read_word(&mut self, first_char: char, start: usize) -> Token {
        let mut word = String::from(first_char);

        while let Some(&ch) = self.input.peek() {
            if !is_identifier_continue(ch) {
                break;
            }
            word.push(ch);
            self.bump();
        }

        Token::new(TokenKind::for_word(&word), word, start)
    }
}

/// Scans `text` into its complete token sequence.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(text).tokenize()
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
