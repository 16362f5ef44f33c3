use serde::{Deserialize, Serialize};

use blockdiff_types::{DiffError, DiffResult};

use crate::delimiter::DelimiterKind;
use crate::encoder::GroupId;

/// Tuning knobs of the group diff that do not depend on the delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Maximum distinct groups per diff call. Inputs above it are rejected.
    pub max_groups: usize,
    /// Move delimiters shared by the tail of a delete/insert pair into the
    /// following equal entry.
    pub align_delimiters: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            max_groups: GroupId::CAPACITY,
            align_delimiters: true,
        }
    }
}

/// Configuration for word (or line) diffs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordDiffConfig {
    pub delimiter: DelimiterKind,
    #[serde(flatten)]
    pub options: DiffOptions,
}

impl WordDiffConfig {
    /// Line-granularity diffs: groups are closed by `'\n'`.
    pub fn line_mode() -> Self {
        Self {
            delimiter: DelimiterKind::Newline,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> DiffResult<()> {
        self.delimiter.validate()?;
        if self.options.max_groups == 0 {
            return Err(DiffError::Config("max_groups must be at least 1".into()));
        }
        Ok(())
    }
}
