//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for arithmetic expressions.
//! CONTEXT: After the Lexer tokenizes an expression string, the Parser converts
//! those tokens into this tree structure. Downstream consumers (printers,
//! evaluators, transformers) traverse it; this crate never mutates it again.
//!
//! SUPPORTED EXPRESSIONS:
//! - Literals: integers and decimals
//! - Identifiers: free variable references
//! - Binary operations: +, -, *, /, ^
//! - Unary operations: - (negation)
//! - Function calls: sin(x), cos(x), tan(x), log(8, 2)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root of a parsed input. Always holds exactly one expression.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Program {
    pub expression: Node,
}

impl Program {
    pub fn new(expression: Node) -> Self {
        Program { expression }
    }

    pub fn leaf_count(&self) -> usize {
        self.expression.leaf_count()
    }

    pub fn internal_count(&self) -> usize {
        self.expression.internal_count()
    }

    pub fn depth(&self) -> usize {
        self.expression.depth()
    }
}

/// A parsed expression. Every node owns its children outright.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Node {
    /// A numeric literal.
    Number(Number),

    /// A reference to an unbound variable.
    Identifier(String),

    /// A unary operation: op operand (e.g., -5).
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Node>,
    },

    /// A binary operation: left op right (e.g., 5 + 3).
    BinaryOp {
        left: Box<Node>,
        op: BinaryOperator,
        right: Box<Node>,
    },

    /// A call to one of the built-in functions. Arity is not checked here.
    FunctionCall { function: Function, args: Vec<Node> },
}

impl Node {
    pub fn integer(value: i64) -> Self {
        Node::Number(Number::Integer(value))
    }

    pub fn float(value: f64) -> Self {
        Node::Number(Number::Float(value))
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(name.into())
    }

    pub fn negate(operand: Node) -> Self {
        Node::UnaryOp {
            op: UnaryOperator::Negate,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Node, op: BinaryOperator, right: Node) -> Self {
        Node::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn call(function: Function, args: Vec<Node>) -> Self {
        Node::FunctionCall { function, args }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Number(_) | Node::Identifier(_))
    }

    /// Number of literal and identifier nodes in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Number(_) | Node::Identifier(_) => 1,
            Node::UnaryOp { operand, .. } => operand.leaf_count(),
            Node::BinaryOp { left, right, .. } => left.leaf_count() + right.leaf_count(),
            Node::FunctionCall { args, .. } => args.iter().map(Node::leaf_count).sum(),
        }
    }

    /// Number of operator and call nodes in this subtree.
    pub fn internal_count(&self) -> usize {
        match self {
            Node::Number(_) | Node::Identifier(_) => 0,
            Node::UnaryOp { operand, .. } => 1 + operand.internal_count(),
            Node::BinaryOp { left, right, .. } => {
                1 + left.internal_count() + right.internal_count()
            }
            Node::FunctionCall { args, .. } => {
                1 + args.iter().map(Node::internal_count).sum::<usize>()
            }
        }
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        match self {
            Node::Number(_) | Node::Identifier(_) => 1,
            Node::UnaryOp { operand, .. } => 1 + operand.depth(),
            Node::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Node::FunctionCall { args, .. } => {
                1 + args.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Numeric literal payload. Integer literals stay exact.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Float(n) => n,
        }
    }
}

/// Binary operators, listed from loosest to tightest binding.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Power,    // ^
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Associativity {
    Left,
    Right,
}

impl BinaryOperator {
    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
            BinaryOperator::Power => 3,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            BinaryOperator::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Power => "^",
        }
    }
}

/// Unary operators. A leading `+` never reaches the tree.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    Negate, // -
}

/// The built-in functions that have reserved names.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Log,
}

impl Function {
    pub const ALL: [Function; 4] = [Function::Sin, Function::Cos, Function::Tan, Function::Log];

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Log => "log",
        }
    }
}

impl FromStr for Function {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Function::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("unknown function: {}", s))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperator::Negate => write!(f, "-"),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            // Keep the decimal point so the printed form lexes back as FLOAT
            Number::Float(n) if n.fract() == 0.0 => write!(f, "{:.1}", n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

/// Fully parenthesized infix form. Re-parsing it yields the same tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(n) => write!(f, "{}", n),
            Node::Identifier(name) => write!(f, "{}", name),
            Node::UnaryOp { op, operand } => write!(f, "({}{})", op, operand),
            Node::BinaryOp { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Node::FunctionCall { function, args } => {
                write!(f, "{}(", function)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}
