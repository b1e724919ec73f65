//! JSON boundary for hosts that exchange strings rather than Rust types.
//!
//! Errors are reported in-band as `{"error": "..."}` so callers only ever
//! deal with one shape of string.

use serde::Deserialize;

use crate::parser::{self, ParserConfig};

/// Input for [`parse_query_json`]
#[derive(Debug, Deserialize)]
pub struct ParseInput {
    pub query: String,
    #[serde(default)]
    pub config: ParserConfig,
}

fn error_json(message: String) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Compile a keyword query described by a JSON document.
///
/// Input: `{"query": "x = 1", "config": {"max_depth": 8}}`, `config` optional.
/// Output: `{"expression": [...], "selectors": [...]}` or `{"error": "..."}`.
pub fn parse_query_json(input: &str) -> String {
    let parsed: ParseInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return error_json(format!("invalid parse input: {}", e)),
    };

    match parser::parse_with_config(&parsed.query, &parsed.config) {
        Ok(query) => match query.to_json() {
            Ok(json) => json,
            Err(e) => error_json(format!("serialization failed: {}", e)),
        },
        Err(e) => error_json(e.to_string()),
    }
}
