//! Block projection: crop absolute ranges to blocks and rebase them.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use blockdiff_types::{Block, BlockKey, DiffError, DiffResult, DiffScript, DiffSide, TextRange};

use crate::absolute::absolute_ranges;
use crate::config::ProjectionConfig;

/// The block-relative ranges of one block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlockRanges {
    pub key: BlockKey,
    pub ranges: Vec<TextRange>,
}

/// Block key to block-relative ranges, in block order.
///
/// Immutable once built. Every projected block has an entry, possibly with
/// no ranges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BlockRangeMapping {
    entries: Vec<BlockRanges>,
    #[serde(skip)]
    index: HashMap<BlockKey, usize>,
}

impl BlockRangeMapping {
    /// Ranges recorded for `key`, or `None` if the block was not projected.
    pub fn get(&self, key: &BlockKey) -> Option<&[TextRange]> {
        self.index
            .get(key)
            .map(|&i| self.entries[i].ranges.as_slice())
    }

    pub fn contains_key(&self, key: &BlockKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BlockRanges> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &BlockKey> {
        self.entries.iter().map(|e| &e.key)
    }

    /// Number of blocks in the mapping.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of ranges across all blocks.
    pub fn range_count(&self) -> usize {
        self.entries.iter().map(|e| e.ranges.len()).sum()
    }

    fn insert(&mut self, key: BlockKey, ranges: Vec<TextRange>) -> DiffResult<()> {
        if self.index.contains_key(&key) {
            return Err(DiffError::DuplicateBlockKey(key));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(BlockRanges { key, ranges });
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BlockRangeMapping {
    type Item = &'a BlockRanges;
    type IntoIter = std::slice::Iter<'a, BlockRanges>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Map absolute ranges of a flat text onto the blocks it was assembled from.
///
/// Block `i` occupies `[start_i, start_i + len_i)` where each start advances
/// by the previous block's length plus the separator length. A range that
/// straddles a block boundary is cropped into each block it touches; the
/// separator characters themselves belong to no block.
///
/// `ranges` must be ordered by start and must not overlap, which is what
/// [`absolute_ranges`] produces.
pub fn map_ranges_to_blocks<B: Block>(
    ranges: &[TextRange],
    blocks: &[B],
    config: &ProjectionConfig,
) -> DiffResult<BlockRangeMapping> {
    debug_assert!(
        ranges.windows(2).all(|w| w[0].end <= w[1].start),
        "absolute ranges must be ordered and disjoint"
    );
    let separator_len = config.separator_len();
    let mut mapping = BlockRangeMapping::default();
    let mut block_start = 0;
    let mut first = 0;

    for block in blocks {
        let block_len = block.char_len();
        let block_end = block_start + block_len;

        while first < ranges.len() && ranges[first].end <= block_start {
            first += 1;
        }
        let relative: Vec<TextRange> = ranges[first..]
            .iter()
            .take_while(|r| r.start < block_end)
            .filter_map(|r| r.crop_relative(block_start, block_end))
            .collect();
        debug_assert!(relative.iter().all(|r| r.end <= block_len));

        mapping.insert(block.key().clone(), relative)?;
        block_start = block_end + separator_len;
    }
    Ok(mapping)
}

/// Equal and modified mappings for one side, kept apart for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SideMappings {
    pub side: DiffSide,
    pub equal: BlockRangeMapping,
    pub modified: BlockRangeMapping,
}

/// Project a diff script onto `side`'s blocks.
pub fn build_block_range_mapping<B: Block>(
    script: &DiffScript,
    side: DiffSide,
    blocks: &[B],
    config: &ProjectionConfig,
) -> DiffResult<SideMappings> {
    let absolute = absolute_ranges(script, side);
    let equal = map_ranges_to_blocks(&absolute.equal, blocks, config)?;
    let modified = map_ranges_to_blocks(&absolute.modified, blocks, config)?;

    debug!(
        side = ?side,
        blocks = blocks.len(),
        equal_ranges = equal.range_count(),
        modified_ranges = modified.range_count(),
        "projected diff onto blocks"
    );
    Ok(SideMappings {
        side,
        equal,
        modified,
    })
}
