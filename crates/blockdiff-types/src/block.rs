//! Blocks: keyed units of text (paragraphs, lines) on one side of a diff.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::op::DiffOp;

/// Opaque, comparable identifier of a block within one side's sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockKey(pub String);

impl BlockKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BlockKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Which side of the diff a view or block sequence belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffSide {
    Before,
    After,
}

impl DiffSide {
    /// The op whose text does not exist on this side.
    pub fn ignored_op(self) -> DiffOp {
        match self {
            Self::Before => DiffOp::Insert,
            Self::After => DiffOp::Delete,
        }
    }

    /// The only kind of modification this side can show.
    pub fn modified_op(self) -> DiffOp {
        match self {
            Self::Before => DiffOp::Delete,
            Self::After => DiffOp::Insert,
        }
    }
}

/// Structural marker for a block that was added or removed wholesale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockMarker {
    Added,
    Removed,
}

impl BlockMarker {
    /// `+1` for added, `-1` for removed.
    pub fn sign(self) -> i8 {
        match self {
            Self::Added => 1,
            Self::Removed => -1,
        }
    }
}

/// What a block holds. Atomic blocks (images, embeds) are opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    #[default]
    Text,
    Atomic,
}

/// Read access to a block owned by an external collaborator.
///
/// The engine only ever reads a block's key, text, and length.
pub trait Block {
    fn key(&self) -> &BlockKey;

    fn text(&self) -> &str;

    /// Length in characters.
    fn char_len(&self) -> usize {
        self.text().chars().count()
    }

    fn kind(&self) -> BlockKind {
        BlockKind::Text
    }
}

/// A plain owned block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub key: BlockKey,
    #[serde(default)]
    pub kind: BlockKind,
    pub text: String,
    /// Set by structural annotation when the block was added or removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_marker: Option<BlockMarker>,
}

impl ContentBlock {
    /// A text block.
    pub fn new(key: impl Into<BlockKey>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: BlockKind::Text,
            text: text.into(),
            diff_marker: None,
        }
    }

    /// An opaque atomic block (image, embed). Its text is a placeholder.
    pub fn atomic(key: impl Into<BlockKey>, placeholder: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Atomic,
            ..Self::new(key, placeholder)
        }
    }
}

impl Block for ContentBlock {
    fn key(&self) -> &BlockKey {
        &self.key
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn kind(&self) -> BlockKind {
        self.kind
    }
}

impl<B: Block + ?Sized> Block for &B {
    fn key(&self) -> &BlockKey {
        (**self).key()
    }

    fn text(&self) -> &str {
        (**self).text()
    }

    fn char_len(&self) -> usize {
        (**self).char_len()
    }

    fn kind(&self) -> BlockKind {
        (**self).kind()
    }
}

/// Split a flat text into text blocks at every `separator`.
///
/// Keys are positional (`b0`, `b1`, ...). An empty separator yields a
/// single block.
pub fn blocks_from_text(text: &str, separator: &str) -> Vec<ContentBlock> {
    if separator.is_empty() {
        return vec![ContentBlock::new("b0", text)];
    }
    text.split(separator)
        .enumerate()
        .map(|(i, part)| ContentBlock::new(format!("b{i}"), part))
        .collect()
}

/// Join block texts with `separator`, the inverse of [`blocks_from_text`].
pub fn assemble_text<B: Block>(blocks: &[B], separator: &str) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(block.text());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_ops() {
        assert_eq!(DiffSide::After.ignored_op(), DiffOp::Delete);
        assert_eq!(DiffSide::After.modified_op(), DiffOp::Insert);
        assert_eq!(DiffSide::Before.ignored_op(), DiffOp::Insert);
        assert_eq!(DiffSide::Before.modified_op(), DiffOp::Delete);
    }

    #[test]
    fn marker_signs() {
        assert_eq!(BlockMarker::Added.sign(), 1);
        assert_eq!(BlockMarker::Removed.sign(), -1);
    }

    #[test]
    fn split_and_join_round_trip() {
        let text = "first line\nsecond\n\nfourth";
        let blocks = blocks_from_text(text, "\n");
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0].key, BlockKey::new("b0"));
        assert_eq!(blocks[2].text, "");
        assert_eq!(assemble_text(&blocks, "\n"), text);
    }

    #[test]
    fn empty_separator_keeps_one_block() {
        let blocks = blocks_from_text("a\nb", "");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "a\nb");
    }

    #[test]
    fn block_length_is_in_characters() {
        let block = ContentBlock::new("k", "naïve café");
        assert_eq!(block.char_len(), 10);
        assert_eq!(block.kind(), BlockKind::Text);
        assert_eq!(ContentBlock::atomic("img", " ").kind(), BlockKind::Atomic);
    }

    #[test]
    fn deserializes_with_defaults() {
        let block: ContentBlock = serde_json::from_str(r#"{"key":"86ekh","text":"x"}"#).unwrap();
        assert_eq!(block.kind, BlockKind::Text);
        assert!(block.diff_marker.is_none());
    }
}
