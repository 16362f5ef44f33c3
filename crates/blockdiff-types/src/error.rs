//! Error types shared by the blockdiff crates.

use crate::block::BlockKey;

/// Errors that can occur while diffing, projecting, or querying decorations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// A numeric diff category outside {-1, 0, 1} was used.
    #[error("unknown diff category code {0}")]
    InvalidCategory(i64),

    /// The texts contain more distinct groups than one diff call can encode.
    #[error("too many distinct groups for one diff call (limit {limit}); diff per block instead")]
    GroupLimitExceeded { limit: usize },

    /// A block sequence repeats a key.
    #[error("duplicate block key: {0}")]
    DuplicateBlockKey(BlockKey),

    /// A structural change that is neither an addition nor a removal.
    #[error("unsupported structural change for block {key}: {reason}")]
    UnsupportedStructuralChange { key: BlockKey, reason: String },

    /// Configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl DiffError {
    /// Create an unsupported structural change error.
    pub fn unsupported(key: BlockKey, reason: impl Into<String>) -> Self {
        Self::UnsupportedStructuralChange {
            key,
            reason: reason.into(),
        }
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
