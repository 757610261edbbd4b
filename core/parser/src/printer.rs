//! FILENAME: core/parser/src/printer.rs
//! PURPOSE: Renders a parsed Program as an indented tree for diagnostics.

use crate::ast::{Node, Program};
use std::fmt;

const INDENT: &str = "  ";

/// Renders one node per line, children indented two spaces under their parent.
///
/// ```text
/// Program
///   BinaryOp(+)
///     Number(2)
///     Identifier(x)
/// ```
pub fn render_tree(program: &Program) -> String {
    TreeView(program).to_string()
}

pub fn print_ast(program: &Program) {
    print!("{}", TreeView(program));
}

/// Writes the tree form of `program` into any text sink.
pub fn write_tree<W: fmt::Write>(program: &Program, out: &mut W) -> fmt::Result {
    writeln!(out, "Program")?;
    write_node(&program.expression, 1, out)
}

struct TreeView<'a>(&'a Program);

impl fmt::Display for TreeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(self.0, f)
    }
}

fn write_node<W: fmt::Write>(node: &Node, level: usize, out: &mut W) -> fmt::Result {
    let indent = INDENT.repeat(level);
    match node {
        Node::Number(n) => writeln!(out, "{}Number({})", indent, n),
        Node::Identifier(name) => writeln!(out, "{}Identifier({})", indent, name),
        Node::UnaryOp { op, operand } => {
            writeln!(out, "{}UnaryOp({})", indent, op)?;
            write_node(operand, level + 1, out)
        }
        Node::BinaryOp { left, op, right } => {
            writeln!(out, "{}BinaryOp({})", indent, op)?;
            write_node(left, level + 1, out)?;
            write_node(right, level + 1, out)
        }
        Node::FunctionCall { function, args } => {
            writeln!(out, "{}FunctionCall({})", indent, function)?;
            for arg in args {
                write_node(arg, level + 1, out)?;
            }
            Ok(())
        }
    }
}
