//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a sequence of Tokens into an AST.
//! CONTEXT: This is the second stage of the parsing pipeline. Structural constructs
//! (groups, calls, unary signs) are handled by recursive descent; chains of binary
//! operators are folded by precedence climbing, so there is no grammar rule per
//! precedence level.
//!
//! GRAMMAR:
//!   program        --> expression EOF
//!   expression     --> binary(0)
//!   binary(p)      --> primary ( OP binary(p') )*     // while prec(OP) >= p
//!   primary        --> INTEGER | FLOAT | IDENTIFIER
//!                    | FUNCTION "(" arguments? ")"
//!                    | "(" expression ")"
//!                    | "-" primary
//!                    | "+" primary
//!   arguments      --> expression ("," expression)*
//!
//! PRECEDENCE:  + -  = 1 (left)   * /  = 2 (left)   ^  = 3 (right)
//! p' is prec(OP) + 1 for left-associative operators and prec(OP) - 1 for `^`.
//! The lower threshold after `^` lets its right operand absorb further `^`
//! (right associativity) and also `*` and `/`, so `2^3*4` is `2^(3*4)`,
//! while `+` and `-` still end the exponent: `2^3+4` is `(2^3)+4`.
//! Unary signs take a single primary, so `-2^2` is `(-2)^2`.

use crate::ast::{Associativity, Node, Program};
use crate::config::ParserConfig;
use crate::error::{ParseResult, SyntaxError};
use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};

type SyntaxResult<T> = Result<T, SyntaxError>;

/// A single forward-only cursor over an immutable token sequence.
pub struct Parser {
    tokens: Vec<Token>,
    /// Index of the current (lookahead) token. Never moves past the EOF token.
    position: usize,
    /// Number of grammar rules currently on the call stack.
    depth: usize,
    config: ParserConfig,
}

impl Parser {
    /// Tokenizes `input` eagerly and positions the cursor on the first token.
    pub fn new(input: &str) -> ParseResult<Self> {
        let tokens = tokenize(input)?;
        Ok(Parser::from_tokens(tokens))
    }

    /// Builds a parser over an already tokenized input. A missing trailing EOF
    /// token is supplied so the cursor always has something to look at.
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let end = tokens.last().map_or(0, Token::end);
            tokens.push(Token::eof(end));
        }
        Parser {
            tokens,
            position: 0,
            depth: 0,
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Parses the whole token sequence into a Program.
    /// Fails on the first token that does not fit the grammar.
    pub fn parse(&mut self) -> Result<Program, SyntaxError> {
        self.position = 0;
        self.depth = 0;
        log::debug!(target: "parser", "parsing {} tokens", self.tokens.len());

        let expression = self.parse_expression()?;

        // Ensure we consumed all tokens
        if !self.current().is_eof() {
            let token = self.current();
            return Err(SyntaxError::new(
                format!("unexpected trailing token {}", token),
                token.position,
            ));
        }

        log::debug!(
            target: "parser",
            "parsed expression with {} nodes",
            expression.leaf_count() + expression.internal_count()
        );
        Ok(Program::new(expression))
    }

    fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// Moves to the next token, staying put once EOF is reached.
    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !token.is_eof() {
            self.position += 1;
        }
        token
    }

    /// Consumes the current token if it has the expected kind.
    fn expect(
        &mut self,
        expected: TokenKind,
        context: impl FnOnce() -> String,
    ) -> SyntaxResult<Token> {
        if self.current().kind == expected {
            Ok(self.advance())
        } else {
            let token = self.current();
            Err(SyntaxError::new(
                format!("{}, found {}", context(), token),
                token.position,
            ))
        }
    }

    /// Runs one grammar rule one level deeper, enforcing the configured limit.
    fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> SyntaxResult<T>) -> SyntaxResult<T> {
        if self.depth >= self.config.max_depth {
            return Err(SyntaxError::new(
                format!(
                    "expression nested too deeply (limit {})",
                    self.config.max_depth
                ),
                self.current().position,
            ));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Entry point for expression parsing.
    fn parse_expression(&mut self) -> SyntaxResult<Node> {
        self.parse_binary_expression(0)
    }

    /// Precedence climbing: folds operators of at least `min_precedence`
    /// into a left-growing chain.
    fn parse_binary_expression(&mut self, min_precedence: u8) -> SyntaxResult<Node> {
        self.nested(|p| {
            let mut left = p.parse_primary()?;

            while let Some(op) = p.current().kind.binary_operator() {
                let precedence = op.precedence();
                if precedence < min_precedence {
                    break;
                }
                p.advance();

                let next_min_precedence = match op.associativity() {
                    Associativity::Left => precedence + 1,
                    Associativity::Right => precedence - 1,
                };
                log::trace!(
                    target: "parser",
                    "operator {} (next min {})",
                    op,
                    next_min_precedence
                );

                let right = p.parse_binary_expression(next_min_precedence)?;
                left = Node::binary(left, op, right);
            }

            Ok(left)
        })
    }

    /// Parses primary expressions (literals, identifiers, calls, groups, signs).
    fn parse_primary(&mut self) -> SyntaxResult<Node> {
        self.nested(|p| {
            let token = p.current().clone();

            match token.kind {
                TokenKind::Integer | TokenKind::Float => {
                    p.advance();
                    parse_number(&token)
                }

                TokenKind::Identifier => {
                    p.advance();
                    Ok(Node::Identifier(token.value))
                }

                TokenKind::Sin | TokenKind::Cos | TokenKind::Tan | TokenKind::Log => {
                    p.parse_function_call(&token)
                }

                TokenKind::LParen => p.parse_parenthesized(&token),

                TokenKind::Minus => {
                    p.advance();
                    let operand = p.parse_primary()?;
                    Ok(Node::negate(operand))
                }

                // A leading '+' changes nothing and leaves no node behind
                TokenKind::Plus => {
                    p.advance();
                    p.parse_primary()
                }

                TokenKind::Eof => Err(SyntaxError::new(
                    "unexpected end of input, expected an expression",
                    token.position,
                )),

                _ => Err(SyntaxError::new(
                    format!("unexpected {}, expected an expression", token),
                    token.position,
                )),
            }
        })
    }

    /// Parses a call like log(8, 2). The name token is still current.
    fn parse_function_call(&mut self, name: &Token) -> SyntaxResult<Node> {
        let function = match name.kind.function() {
            Some(function) => function,
            None => {
                return Err(SyntaxError::new(
                    format!("{} is not a function name", name),
                    name.position,
                ))
            }
        };
        self.advance();

        self.expect(TokenKind::LParen, || {
            format!("expected '(' after function name '{}'", function)
        })?;

        let mut args = Vec::new();

        if self.current().kind != TokenKind::RParen {
            // Parse first argument
            args.push(self.parse_expression()?);

            // Parse remaining arguments separated by commas
            while self.current().kind == TokenKind::Comma {
                self.advance();
                args.push(self.parse_expression()?);
            }
        }

        self.expect(TokenKind::RParen, || {
            format!("expected ')' to close the arguments of '{}'", function)
        })?;

        log::trace!(target: "parser", "call {} with {} arguments", function, args.len());
        Ok(Node::call(function, args))
    }

    /// Parses '(' expression ')'. The group contributes no node of its own.
    fn parse_parenthesized(&mut self, open: &Token) -> SyntaxResult<Node> {
        self.advance();
        let expression = self.parse_expression()?;
        self.expect(TokenKind::RParen, || {
            format!("expected ')' to close '(' at position {}", open.position)
        })?;
        Ok(expression)
    }
}

fn parse_number(token: &Token) -> SyntaxResult<Node> {
    if token.kind == TokenKind::Integer {
        return token.value.parse::<i64>().map(Node::integer).map_err(|_| {
            SyntaxError::new(
                format!("integer literal '{}' is out of range", token.value),
                token.position,
            )
        });
    }
    token.value.parse::<f64>().map(Node::float).map_err(|_| {
        SyntaxError::new(
            format!("malformed number literal '{}'", token.value),
            token.position,
        )
    })
}

/// Convenience function to parse an expression string directly.
pub fn parse(input: &str) -> ParseResult<Program> {
    parse_with_config(input, &ParserConfig::default())
}

pub fn parse_with_config(input: &str, config: &ParserConfig) -> ParseResult<Program> {
    let mut parser = Parser::new(input)?.with_config(config.clone());
    Ok(parser.parse()?)
}

/// Parses a token sequence produced by some other front end.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Program, SyntaxError> {
    Parser::from_tokens(tokens).parse()
}
