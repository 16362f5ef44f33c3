//! Range projection for blockdiff.
//!
//! A diff script is computed over whole, unsegmented texts. This crate
//! turns it into per-block highlights:
//!
//! 1. [`absolute_ranges`] -- equal and modified ranges over one side's text
//! 2. [`map_ranges_to_blocks`] -- crop those ranges to each block and rebase
//!    them to block-relative offsets
//! 3. [`DecorationStrategies`] -- per-category lookups that stop yielding
//!    ranges for a block as soon as its text changes
//!
//! Blocks are assumed to be joined by [`ProjectionConfig::separator`]
//! (one `'\n'` by default) in the flat text.

pub mod absolute;
pub mod config;
pub mod projection;
pub mod strategy;

pub use absolute::{absolute_ranges, AbsoluteRanges};
pub use config::{ProjectionConfig, DEFAULT_BLOCK_SEPARATOR};
pub use projection::{
    build_block_range_mapping, map_ranges_to_blocks, BlockRangeMapping, BlockRanges, SideMappings,
};
pub use strategy::{BlockSnapshot, Decoration, DecorationStrategies, DecorationStrategy};

use blockdiff_types::{Block, DiffResult, DiffScript, DiffSide};

/// Project `script` onto `side`'s blocks and wrap the result in strategies.
pub fn build_decoration_strategies<B: Block>(
    script: &DiffScript,
    side: DiffSide,
    blocks: &[B],
    config: &ProjectionConfig,
) -> DiffResult<DecorationStrategies> {
    let mappings = build_block_range_mapping(script, side, blocks, config)?;
    Ok(DecorationStrategies::build(mappings, blocks))
}
