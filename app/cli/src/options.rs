//! FILENAME: app/cli/src/options.rs
//! PURPOSE: Command-line options for exprc.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use expr_parser::ParserConfig;
use log::LevelFilter;

/// Prints the token sequence and syntax tree of arithmetic expressions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, name = "exprc", bin_name = "exprc")]
pub struct Options {
    /// how to print each syntax tree
    #[arg(long, value_enum, default_value_t = OutputMode::Tree)]
    pub format: OutputMode,

    /// also print the token sequence
    #[arg(long)]
    pub tokens: bool,

    /// maximum nesting depth, overrides the config file
    #[arg(long, value_parser = parse_depth)]
    pub max_depth: Option<usize>,

    /// read parser settings from a JSON file
    #[arg(long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[arg(long, env = "EXPRC_LOG", value_name = "LEVEL", value_parser = parse_level)]
    pub log_level: Option<LevelFilter>,

    /// append log lines to FILE instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// expressions to parse; one per stdin line when none are given
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "EXPRESSION")]
    pub expressions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// indented tree, one node per line
    Tree,
    /// fully parenthesized expression
    Infix,
    /// the tree as JSON
    Json,
}

impl Options {
    /// Applies command-line overrides on top of a loaded config.
    pub fn parser_config(&self, base: ParserConfig) -> ParserConfig {
        match self.max_depth {
            Some(max_depth) => ParserConfig { max_depth },
            None => base,
        }
    }
}

fn parse_depth(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(format!("expected a positive integer, got '{}'", value)),
    }
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level '{}'", value))
}
