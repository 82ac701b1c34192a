//! Compile-time configuration.

use serde::{Deserialize, Serialize};

/// Default bound on array nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Hard ceiling on array nesting. Larger `max_depth` values are clamped to it
/// so that building, evaluating and dropping a tree stay within the stack.
pub const MAX_SAFE_DEPTH: usize = 1024;

/// Options accepted by [`compile_with`](crate::compile_with).
///
/// Deserializable so hosts can load it from a JSON config file; missing
/// fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Deepest array nesting accepted before failing with `RecursionLimit`.
    /// Values above [`MAX_SAFE_DEPTH`] act as `MAX_SAFE_DEPTH`.
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompileOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The nesting bound actually enforced.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(MAX_SAFE_DEPTH)
    }
}
