//! Rendering configuration
//! 
//! The defaults produce the canonical tree format. A depth limit can be set by
//! callers that render trees built from untrusted input.

use serde::{Deserialize, Serialize};

/// Indent unit prefixed once per nesting level
pub const INDENT_STR: &str = "|   ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// String repeated once per indentation level
    pub indent: String,
    /// Deepest indentation level allowed, `None` for unbounded
    pub max_depth: Option<usize>,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self {
            indent: INDENT_STR.to_string(),
            max_depth: None,
        }
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Build the prefix for a line at `level`
    pub fn indentation(&self, level: usize) -> String {
        self.indent.repeat(level)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}
