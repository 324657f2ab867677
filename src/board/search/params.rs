#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Depth used when the caller does not ask for one
pub const DEFAULT_DEPTH: u32 = 3;

/// Search settings supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SearchConfig {
    /// Plies to search below the root. Depth 0 scores each root reply statically.
    pub depth: u32,
    /// Worker threads for the root fan-out; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchConfig {
            depth,
            ..SearchConfig::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            threads: None,
        }
    }
}
