//! Structural block diff for blockdiff.
//!
//! Compares two block sequences by key and reports blocks that were added
//! (`+1`) or removed (`-1`) wholesale. This complements the word diff, which
//! only sees text: an inserted image or embed shows up here as an added
//! atomic block.
//!
//! # Key Types
//!
//! - [`StructuralDiff`] / [`BlockChange`] -- Added and removed blocks
//! - [`annotate_blocks`] -- Write the markers onto blocks

pub mod annotate;
pub mod block_diff;

pub use annotate::{annotate_blocks, mark_structural_changes};
pub use block_diff::{diff_block_structure, BlockChange, StructuralDiff};
