// exprc: prints the token sequence and syntax tree of arithmetic expressions

mod logging;
mod options;

use std::fs;
use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser as _;
use expr_parser::{render_tree, ParseError, Parser, ParserConfig, Program, Token};
use log::LevelFilter;

use options::{OutputMode, Options};

fn main() -> ExitCode {
    let options = Options::parse();

    let level = options.log_level.unwrap_or(LevelFilter::Warn);
    if let Err(e) = logging::init(level, options.log_file.as_deref()) {
        eprintln!("Warning: {}", e);
    }

    let config = match load_config(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    log::info!(target: "cli", "max_depth={}", config.max_depth);

    let inputs = if options.expressions.is_empty() {
        match read_stdin_lines() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("Error: failed to read stdin: {}", e);
                return ExitCode::from(2);
            }
        }
    } else {
        options.expressions.clone()
    };

    let mut failures = 0;
    for input in &inputs {
        if !run_one(input, &options, &config) {
            failures += 1;
        }
    }
    log::info!(
        target: "cli",
        "parsed {} inputs, {} failed",
        inputs.len(),
        failures
    );
    log::logger().flush();

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn load_config(options: &Options) -> Result<ParserConfig, String> {
    let base = match &options.config_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read config {:?}: {}", path, e))?;
            ParserConfig::from_json(&json).map_err(|e| e.to_string())?
        }
        None => ParserConfig::default(),
    };
    Ok(options.parser_config(base))
}

fn read_stdin_lines() -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Parses and prints one input. Returns false when the input is rejected.
fn run_one(input: &str, options: &Options, config: &ParserConfig) -> bool {
    let mut parser = match Parser::new(input) {
        Ok(parser) => parser.with_config(config.clone()),
        Err(e) => {
            report_error(input, &e);
            return false;
        }
    };

    if options.tokens {
        print!("{}", list_tokens(parser.tokens()));
    }

    match parser.parse() {
        Ok(program) => match render_program(&program, options.format) {
            Ok(text) => {
                print!("{}", text);
                true
            }
            Err(e) => {
                eprintln!("Error: failed to serialize tree: {}", e);
                false
            }
        },
        Err(e) => {
            report_error(input, &ParseError::from(e));
            false
        }
    }
}

/// One line per token: its offset, then the token itself.
fn list_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{:>4}  {}\n", token.position, token))
        .collect()
}

fn render_program(program: &Program, mode: OutputMode) -> Result<String, serde_json::Error> {
    Ok(match mode {
        OutputMode::Tree => render_tree(program),
        OutputMode::Infix => format!("{}\n", program),
        OutputMode::Json => format!("{}\n", serde_json::to_string_pretty(program)?),
    })
}

/// Prints the error with a caret under the offending character.
fn report_error(input: &str, error: &ParseError) {
    eprintln!("error: {}", error);
    eprintln!("  {}", input);
    eprintln!("  {}^", " ".repeat(error.position()));
}
