//! Keyed block diff: compare two block sequences by key.
//!
//! Detects blocks that were added or removed wholesale. Text edits inside a
//! block that exists on both sides are left to the word diff and are not
//! structural changes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use blockdiff_types::{Block, BlockKey, BlockKind, BlockMarker, DiffError, DiffResult};

/// A block added or removed wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockChange {
    pub marker: BlockMarker,
    pub key: BlockKey,
}

impl BlockChange {
    pub fn added(key: BlockKey) -> Self {
        Self {
            marker: BlockMarker::Added,
            key,
        }
    }

    pub fn removed(key: BlockKey) -> Self {
        Self {
            marker: BlockMarker::Removed,
            key,
        }
    }

    /// The `(sign, key)` pair: `+1` for added, `-1` for removed.
    pub fn signed(&self) -> (i8, &BlockKey) {
        (self.marker.sign(), &self.key)
    }
}

/// The result of comparing two block sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralDiff {
    /// Removals in `before` order, then additions in `after` order.
    pub changes: Vec<BlockChange>,
}

impl StructuralDiff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no block was added or removed.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of added blocks.
    pub fn additions(&self) -> usize {
        self.count(BlockMarker::Added)
    }

    /// Number of removed blocks.
    pub fn removals(&self) -> usize {
        self.count(BlockMarker::Removed)
    }

    /// The marker recorded for `key`, if any.
    pub fn marker_for(&self, key: &BlockKey) -> Option<BlockMarker> {
        self.changes
            .iter()
            .find(|c| &c.key == key)
            .map(|c| c.marker)
    }

    /// All changes as `(sign, key)` pairs.
    pub fn signed(&self) -> Vec<(i8, BlockKey)> {
        self.changes
            .iter()
            .map(|c| (c.marker.sign(), c.key.clone()))
            .collect()
    }

    fn count(&self, marker: BlockMarker) -> usize {
        self.changes.iter().filter(|c| c.marker == marker).count()
    }
}

/// Compare two block sequences by key.
///
/// - keys only in `after` are `Added`
/// - keys only in `before` are `Removed`
/// - a key on both sides whose [`BlockKind`] changed is rejected, since it
///   is neither an addition nor a removal
///
/// Keys must be unique within each sequence.
pub fn diff_block_structure<A, B>(before: &[A], after: &[B]) -> DiffResult<StructuralDiff>
where
    A: Block,
    B: Block,
{
    let old = index_blocks(before)?;
    let new = index_blocks(after)?;

    let mut changes = Vec::new();

    // Find removed blocks and reject kind changes.
    for block in before {
        match new.get(block.key()) {
            Some(&kind) if kind != block.kind() => {
                return Err(DiffError::unsupported(
                    block.key().clone(),
                    format!("block kind changed from {:?} to {:?}", block.kind(), kind),
                ));
            }
            Some(_) => {}
            None => changes.push(BlockChange::removed(block.key().clone())),
        }
    }

    // Find added blocks.
    for block in after {
        if !old.contains_key(block.key()) {
            changes.push(BlockChange::added(block.key().clone()));
        }
    }

    let diff = StructuralDiff { changes };
    debug!(
        added = diff.additions(),
        removed = diff.removals(),
        "structural block diff computed"
    );
    Ok(diff)
}

fn index_blocks<B: Block>(blocks: &[B]) -> DiffResult<HashMap<&BlockKey, BlockKind>> {
    let mut index = HashMap::with_capacity(blocks.len());
    for block in blocks {
        if index.insert(block.key(), block.kind()).is_some() {
            return Err(DiffError::DuplicateBlockKey(block.key().clone()));
        }
    }
    Ok(index)
}
