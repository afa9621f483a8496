//! Parser configuration

use serde::{Deserialize, Serialize};

/// Default bound on nested groups and `not` prefixes
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default bound on the height of a compiled predicate tree
pub const DEFAULT_MAX_HEIGHT: usize = 1024;

/// Options controlling how filter text is compiled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum nesting of parenthesized groups and `not` prefixes
    pub max_depth: usize,
    /// Maximum height of the compiled tree, counting every `and`, `or` and
    /// `not` node between the root and a leaf
    pub max_height: usize,
    /// Decode the dash surface syntax before lexing.
    ///
    /// Turn off when the caller already holds canonical,
    /// whitespace-separated text.
    pub decode_dashes: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_height: DEFAULT_MAX_HEIGHT,
            decode_dashes: true,
        }
    }
}

impl ParserConfig {
    /// Configuration for canonical input (no dash decoding)
    pub fn canonical() -> Self {
        Self {
            decode_dashes: false,
            ..Self::default()
        }
    }

    /// Set the nesting bound
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the tree height bound
    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }
}
