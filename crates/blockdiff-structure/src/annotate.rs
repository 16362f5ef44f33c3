//! Write structural markers onto blocks.

use blockdiff_types::{ContentBlock, DiffResult};

use crate::block_diff::{diff_block_structure, StructuralDiff};

/// Set `diff_marker` on every block of `blocks` named by `diff`.
///
/// Returns how many blocks were marked. Changes whose key has no block here
/// (removals, when `blocks` is the after side) are skipped.
pub fn annotate_blocks(blocks: &mut [ContentBlock], diff: &StructuralDiff) -> usize {
    let mut marked = 0;
    for block in blocks.iter_mut() {
        if let Some(marker) = diff.marker_for(&block.key) {
            block.diff_marker = Some(marker);
            marked += 1;
        }
    }
    marked
}

/// The `after` blocks with added blocks marked.
///
/// Identical sequences come back unchanged.
pub fn mark_structural_changes(
    before: &[ContentBlock],
    after: &[ContentBlock],
) -> DiffResult<Vec<ContentBlock>> {
    let diff = diff_block_structure(before, after)?;
    let mut marked = after.to_vec();
    annotate_blocks(&mut marked, &diff);
    Ok(marked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdiff_types::BlockMarker;

    fn before() -> Vec<ContentBlock> {
        vec![ContentBlock::new("a", "alpha"), ContentBlock::new("b", "beta")]
    }

    fn after() -> Vec<ContentBlock> {
        vec![
            ContentBlock::new("a", "alpha"),
            ContentBlock::atomic("86ekh", " "),
            ContentBlock::new("b", "beta"),
        ]
    }

    #[test]
    fn no_differences_returns_after_unchanged() {
        assert_eq!(mark_structural_changes(&after(), &after()).unwrap(), after());
    }

    #[test]
    fn added_block_is_marked() {
        let marked = mark_structural_changes(&before(), &after()).unwrap();
        assert_eq!(marked[1].diff_marker, Some(BlockMarker::Added));
        assert!(marked[0].diff_marker.is_none());
        assert!(marked[2].diff_marker.is_none());
    }

    #[test]
    fn removals_have_nothing_to_mark_on_the_after_side() {
        let diff = diff_block_structure(&after(), &before()).unwrap();
        let mut blocks = before();
        assert_eq!(annotate_blocks(&mut blocks, &diff), 0);
    }

    #[test]
    fn removals_can_be_marked_on_the_before_side() {
        let diff = diff_block_structure(&after(), &before()).unwrap();
        let mut blocks = after();
        assert_eq!(annotate_blocks(&mut blocks, &diff), 1);
        assert_eq!(blocks[1].diff_marker, Some(BlockMarker::Removed));
    }
}
