use serde::{Deserialize, Serialize};

/// How the flat text was assembled from its blocks.
///
/// Projection assumes exactly `separator` sits between two consecutive
/// blocks of the flat text and nowhere else. If the caller joined its blocks
/// differently, every range after the first block boundary shifts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub separator: String,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_BLOCK_SEPARATOR.to_string(),
        }
    }
}

/// One newline between blocks.
pub const DEFAULT_BLOCK_SEPARATOR: &str = "\n";

impl ProjectionConfig {
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Separator length in characters.
    pub fn separator_len(&self) -> usize {
        self.separator.chars().count()
    }
}
