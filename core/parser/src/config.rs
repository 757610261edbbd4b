//! FILENAME: core/parser/src/config.rs
//! PURPOSE: Tunable limits for the parser.
//! CONTEXT: The grammar is recursive, so deeply nested input such as
//! "((((...))))" or "------1" would otherwise grow the call stack without bound.
//! The depth limit turns that into an ordinary syntax error.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum number of nested grammar rules active at once. Every operand
    /// and every operator chain counts as one rule, so one unary sign costs one
    /// level and one parenthesized group or call argument costs two. With the
    /// default of 256, `1` may carry at most 254 leading signs or sit inside at
    /// most 127 groups.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Reads a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
