//! Configuration for the minimax searcher.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Minimax`](super::Minimax) searcher.
///
/// # Examples
///
/// ```
/// use ttt_minimax::search::SearchConfig;
///
/// let config = SearchConfig::new().with_parallel_root(true);
/// assert!(config.parallel_root);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Evaluate the subtrees of the root actions on the rayon thread pool.
    ///
    /// Values are gathered back in row-major order before the best action is
    /// picked, so the decision matches the sequential search exactly.
    pub parallel_root: bool,
}

impl SearchConfig {
    /// Sequential search
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether root subtrees are searched concurrently.
    pub fn with_parallel_root(mut self, parallel: bool) -> Self {
        self.parallel_root = parallel;
        self
    }
}
