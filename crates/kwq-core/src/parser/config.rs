//! Parser configuration

use serde::{Deserialize, Serialize};

/// Default limit on parenthesis nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Hard upper bound on `max_depth`. Larger requests are capped to this.
pub const MAX_DEPTH_CEILING: usize = 512;

/// Tunables for the expression compiler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Deepest parenthesis nesting accepted. Each level is one stack frame.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Nesting limit actually enforced, never above [`MAX_DEPTH_CEILING`]
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(MAX_DEPTH_CEILING)
    }
}
