//! Diff operations and the diff script they form.

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// The three diff categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffOp {
    /// Text present on both sides.
    Equal,
    /// Text present only in the "after" text.
    Insert,
    /// Text present only in the "before" text.
    Delete,
}

impl DiffOp {
    /// All categories, in decoration order.
    pub const ALL: [DiffOp; 3] = [DiffOp::Equal, DiffOp::Insert, DiffOp::Delete];

    /// The classic numeric code: -1 delete, 0 equal, 1 insert.
    pub fn code(self) -> i64 {
        match self {
            Self::Delete => -1,
            Self::Equal => 0,
            Self::Insert => 1,
        }
    }

    /// Parse a numeric code, rejecting anything outside {-1, 0, 1}.
    pub fn from_code(code: i64) -> DiffResult<Self> {
        match code {
            -1 => Ok(Self::Delete),
            0 => Ok(Self::Equal),
            1 => Ok(Self::Insert),
            other => Err(DiffError::InvalidCategory(other)),
        }
    }

    /// Lowercase name, as used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Insert => "insert",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for DiffOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(op, text)` pair of a diff script.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffEntry {
    pub op: DiffOp,
    pub text: String,
}

impl DiffEntry {
    pub fn new(op: DiffOp, text: impl Into<String>) -> Self {
        Self {
            op,
            text: text.into(),
        }
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// An ordered list of diff entries turning "before" into "after".
///
/// Entries are always maximal and non-empty: [`DiffScript::push`] merges
/// into the previous entry when the op repeats and drops empty text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffScript {
    entries: Vec<DiffEntry>,
}

impl DiffScript {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a script from arbitrary entries, coalescing as it goes.
    pub fn from_entries(entries: impl IntoIterator<Item = DiffEntry>) -> Self {
        let mut script = Self::new();
        for entry in entries {
            script.push(entry.op, &entry.text);
        }
        script
    }

    /// Append text under `op`, extending the last entry if it has the same op.
    pub fn push(&mut self, op: DiffOp, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.entries.last_mut() {
            Some(last) if last.op == op => last.text.push_str(text),
            _ => self.entries.push(DiffEntry::new(op, text)),
        }
    }

    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the script contains no insertions or deletions.
    pub fn is_identical(&self) -> bool {
        self.entries.iter().all(|e| e.op == DiffOp::Equal)
    }

    /// Reconstruct the "before" text (every entry except inserts).
    pub fn before_text(&self) -> String {
        self.side_text(DiffOp::Insert)
    }

    /// Reconstruct the "after" text (every entry except deletes).
    pub fn after_text(&self) -> String {
        self.side_text(DiffOp::Delete)
    }

    /// Number of entries carrying the given op.
    pub fn count(&self, op: DiffOp) -> usize {
        self.entries.iter().filter(|e| e.op == op).count()
    }

    /// Number of insert and delete entries.
    pub fn changed_entries(&self) -> usize {
        self.count(DiffOp::Insert) + self.count(DiffOp::Delete)
    }

    pub fn into_entries(self) -> Vec<DiffEntry> {
        self.entries
    }

    fn side_text(&self, skip: DiffOp) -> String {
        self.entries
            .iter()
            .filter(|e| e.op != skip)
            .map(|e| e.text.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a DiffScript {
    type Item = &'a DiffEntry;
    type IntoIter = std::slice::Iter<'a, DiffEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_the_classic_convention() {
        assert_eq!(DiffOp::Delete.code(), -1);
        assert_eq!(DiffOp::Equal.code(), 0);
        assert_eq!(DiffOp::Insert.code(), 1);
        for op in DiffOp::ALL {
            assert_eq!(DiffOp::from_code(op.code()).unwrap(), op);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(DiffOp::from_code(2), Err(DiffError::InvalidCategory(2)));
        assert_eq!(DiffOp::from_code(-5), Err(DiffError::InvalidCategory(-5)));
    }

    #[test]
    fn push_coalesces_and_skips_empty() {
        let mut script = DiffScript::new();
        script.push(DiffOp::Equal, "a ");
        script.push(DiffOp::Equal, "b ");
        script.push(DiffOp::Delete, "");
        script.push(DiffOp::Delete, "c");
        script.push(DiffOp::Insert, "d");
        assert_eq!(
            script.entries(),
            &[
                DiffEntry::new(DiffOp::Equal, "a b "),
                DiffEntry::new(DiffOp::Delete, "c"),
                DiffEntry::new(DiffOp::Insert, "d"),
            ]
        );
    }

    #[test]
    fn reconstructs_both_sides() {
        let script = DiffScript::from_entries([
            DiffEntry::new(DiffOp::Equal, "Shows how text "),
            DiffEntry::new(DiffOp::Delete, "was"),
            DiffEntry::new(DiffOp::Insert, "is"),
            DiffEntry::new(DiffOp::Equal, " changed"),
        ]);
        assert_eq!(script.before_text(), "Shows how text was changed");
        assert_eq!(script.after_text(), "Shows how text is changed");
        assert_eq!(script.changed_entries(), 2);
        assert!(!script.is_identical());
    }

    #[test]
    fn empty_script_is_identical() {
        let script = DiffScript::new();
        assert!(script.is_empty());
        assert!(script.is_identical());
        assert_eq!(script.after_text(), "");
    }

    #[test]
    fn serializes_ops_by_name() {
        let script = DiffScript::from_entries([DiffEntry::new(DiffOp::Insert, "x")]);
        let json = serde_json::to_string(&script).unwrap();
        assert_eq!(json, r#"[{"op":"insert","text":"x"}]"#);
    }

    #[test]
    fn char_len_counts_scalars_not_bytes() {
        assert_eq!(DiffEntry::new(DiffOp::Equal, "héllo").char_len(), 5);
    }
}
