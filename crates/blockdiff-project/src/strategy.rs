//! Decoration strategies: per-category range lookups guarded against stale
//! block content.
//!
//! A strategy answers "which ranges of this block should be highlighted as
//! equal / inserted / deleted?". It remembers each block's text as it was
//! when the mapping was built and yields nothing once that text changes, so
//! an edited block is never decorated at outdated offsets.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use blockdiff_types::{Block, BlockKey, DiffOp, DiffResult, DiffSide, TextRange};

use crate::projection::{BlockRangeMapping, SideMappings};

/// Block texts captured when a mapping was built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockSnapshot {
    texts: HashMap<BlockKey, String>,
}

impl BlockSnapshot {
    pub fn capture<B: Block>(blocks: &[B]) -> Self {
        Self {
            texts: blocks
                .iter()
                .map(|b| (b.key().clone(), b.text().to_string()))
                .collect(),
        }
    }

    /// Whether `key` still holds exactly the captured text.
    pub fn is_fresh(&self, key: &BlockKey, current_text: &str) -> bool {
        self.texts.get(key).is_some_and(|t| t == current_text)
    }
}

/// One category's decoration capability.
#[derive(Clone, Debug)]
pub enum DecorationStrategy {
    /// Never yields ranges (deletions on the after side, insertions on the
    /// before side).
    Empty,
    /// Yields the cached ranges while the block is unchanged.
    Mapped {
        mapping: Arc<BlockRangeMapping>,
        snapshot: Arc<BlockSnapshot>,
    },
}

impl DecorationStrategy {
    /// Ranges to highlight in the block `key` whose text is now
    /// `current_text`.
    ///
    /// Returns `None` for unknown blocks and for blocks whose text differs
    /// from the text the mapping was built from.
    pub fn ranges(&self, key: &BlockKey, current_text: &str) -> Option<&[TextRange]> {
        match self {
            Self::Empty => None,
            Self::Mapped { mapping, snapshot } => {
                let ranges = mapping.get(key)?;
                snapshot.is_fresh(key, current_text).then_some(ranges)
            }
        }
    }

    pub fn ranges_for<B: Block>(&self, block: &B) -> Option<&[TextRange]> {
        self.ranges(block.key(), block.text())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A highlighted range of one block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Decoration {
    pub key: BlockKey,
    pub op: DiffOp,
    pub range: TextRange,
}

/// The three strategies of one side.
#[derive(Clone, Debug)]
pub struct DecorationStrategies {
    side: DiffSide,
    equal: DecorationStrategy,
    insert: DecorationStrategy,
    delete: DecorationStrategy,
}

impl DecorationStrategies {
    /// Wrap a side's mappings, capturing `blocks`' texts for the staleness
    /// check. `blocks` must be the sequence the mappings were projected from.
    pub fn build<B: Block>(mappings: SideMappings, blocks: &[B]) -> Self {
        let snapshot = Arc::new(BlockSnapshot::capture(blocks));
        let mapped = |mapping: BlockRangeMapping| DecorationStrategy::Mapped {
            mapping: Arc::new(mapping),
            snapshot: Arc::clone(&snapshot),
        };
        let equal = mapped(mappings.equal);
        let modified = mapped(mappings.modified);

        match mappings.side {
            DiffSide::After => Self {
                side: DiffSide::After,
                equal,
                insert: modified,
                delete: DecorationStrategy::Empty,
            },
            DiffSide::Before => Self {
                side: DiffSide::Before,
                equal,
                insert: DecorationStrategy::Empty,
                delete: modified,
            },
        }
    }

    pub fn side(&self) -> DiffSide {
        self.side
    }

    pub fn get(&self, op: DiffOp) -> &DecorationStrategy {
        match op {
            DiffOp::Equal => &self.equal,
            DiffOp::Insert => &self.insert,
            DiffOp::Delete => &self.delete,
        }
    }

    /// Look up a strategy by numeric category code (-1, 0, 1).
    pub fn get_by_code(&self, code: i64) -> DiffResult<&DecorationStrategy> {
        Ok(self.get(DiffOp::from_code(code)?))
    }

    pub fn equal(&self) -> &DecorationStrategy {
        &self.equal
    }

    pub fn insert(&self) -> &DecorationStrategy {
        &self.insert
    }

    pub fn delete(&self) -> &DecorationStrategy {
        &self.delete
    }

    /// Every fresh decoration of `blocks`, by block then by range start.
    pub fn decorations<B: Block>(&self, blocks: &[B]) -> Vec<Decoration> {
        let mut out = Vec::new();
        for block in blocks {
            let start = out.len();
            for op in DiffOp::ALL {
                if let Some(ranges) = self.get(op).ranges_for(block) {
                    out.extend(ranges.iter().map(|&range| Decoration {
                        key: block.key().clone(),
                        op,
                        range,
                    }));
                }
            }
            out[start..].sort_by_key(|d| d.range.start);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdiff_types::{ContentBlock, DiffEntry, DiffError, DiffScript};

    use crate::config::ProjectionConfig;
    use crate::projection::build_block_range_mapping;

    fn script() -> DiffScript {
        DiffScript::from_entries([
            DiffEntry::new(DiffOp::Equal, "Shows how text "),
            DiffEntry::new(DiffOp::Delete, "was"),
            DiffEntry::new(DiffOp::Insert, "is"),
            DiffEntry::new(DiffOp::Equal, "\nchanged"),
        ])
    }

    fn before_blocks() -> Vec<ContentBlock> {
        vec![
            ContentBlock::new("p1", "Shows how text was"),
            ContentBlock::new("p2", "changed"),
        ]
    }

    fn after_blocks() -> Vec<ContentBlock> {
        vec![
            ContentBlock::new("p1", "Shows how text is"),
            ContentBlock::new("p2", "changed"),
        ]
    }

    fn strategies(side: DiffSide, blocks: &[ContentBlock]) -> DecorationStrategies {
        let mappings =
            build_block_range_mapping(&script(), side, blocks, &ProjectionConfig::default())
                .unwrap();
        DecorationStrategies::build(mappings, blocks)
    }

    fn key(k: &str) -> BlockKey {
        BlockKey::new(k)
    }

    #[test]
    fn after_side_decorates_equal_and_insert() {
        let s = strategies(DiffSide::After, &after_blocks());
        assert_eq!(s.side(), DiffSide::After);
        assert!(s.delete().is_empty());
        assert_eq!(
            s.insert().ranges(&key("p1"), "Shows how text is"),
            Some(&[TextRange::new(15, 17)][..])
        );
        assert_eq!(
            s.equal().ranges(&key("p2"), "changed"),
            Some(&[TextRange::new(0, 7)][..])
        );
        assert_eq!(s.delete().ranges(&key("p1"), "Shows how text is"), None);
    }

    #[test]
    fn before_side_decorates_equal_and_delete() {
        let s = strategies(DiffSide::Before, &before_blocks());
        assert!(s.insert().is_empty());
        assert_eq!(
            s.delete().ranges(&key("p1"), "Shows how text was"),
            Some(&[TextRange::new(15, 18)][..])
        );
        assert_eq!(s.insert().ranges(&key("p1"), "Shows how text was"), None);
    }

    #[test]
    fn edited_block_yields_nothing() {
        let s = strategies(DiffSide::After, &after_blocks());
        assert_eq!(s.insert().ranges(&key("p1"), "Shows how text iz"), None);
        assert_eq!(s.equal().ranges(&key("p1"), "Shows how text is!"), None);
        // The untouched block is still decorated.
        assert!(s.equal().ranges(&key("p2"), "changed").is_some());
    }

    #[test]
    fn unknown_block_yields_nothing() {
        let s = strategies(DiffSide::After, &after_blocks());
        assert_eq!(s.equal().ranges(&key("new"), ""), None);
    }

    #[test]
    fn lookup_by_op_and_code() {
        let s = strategies(DiffSide::After, &after_blocks());
        for op in DiffOp::ALL {
            let by_code = s.get_by_code(op.code()).unwrap();
            assert_eq!(by_code.is_empty(), s.get(op).is_empty());
        }
        assert!(s.get_by_code(-1).unwrap().is_empty());
    }

    #[test]
    fn invalid_code_fails_loudly() {
        let s = strategies(DiffSide::After, &after_blocks());
        assert!(matches!(
            s.get_by_code(3),
            Err(DiffError::InvalidCategory(3))
        ));
    }

    #[test]
    fn decorations_are_ordered_within_each_block() {
        let blocks = after_blocks();
        let s = strategies(DiffSide::After, &blocks);
        let decorations = s.decorations(&blocks);
        let summary: Vec<_> = decorations
            .iter()
            .map(|d| (d.key.as_str(), d.op, d.range.start, d.range.end))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("p1", DiffOp::Equal, 0, 15),
                ("p1", DiffOp::Insert, 15, 17),
                ("p2", DiffOp::Equal, 0, 7),
            ]
        );
    }

    #[test]
    fn decorations_skip_stale_blocks() {
        let blocks = after_blocks();
        let s = strategies(DiffSide::After, &blocks);
        let mut edited = blocks.clone();
        edited[0].text.push('!');
        let decorations = s.decorations(&edited);
        assert!(decorations.iter().all(|d| d.key == key("p2")));
    }
}
