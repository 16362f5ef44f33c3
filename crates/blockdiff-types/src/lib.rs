//! Shared types for blockdiff.
//!
//! Every other blockdiff crate depends on `blockdiff-types` for the diff
//! vocabulary and the block abstraction owned by external collaborators.
//!
//! # Key Types
//!
//! - [`DiffOp`] / [`DiffEntry`] / [`DiffScript`] -- Word-granularity diff output
//! - [`TextRange`] -- Half-open character interval over one text
//! - [`Block`] / [`ContentBlock`] / [`BlockKey`] -- Keyed blocks of one side
//! - [`DiffSide`] -- Before or after view
//! - [`DiffError`] -- Error taxonomy

pub mod block;
pub mod error;
pub mod op;
pub mod range;

pub use block::{
    assemble_text, blocks_from_text, Block, BlockKey, BlockKind, BlockMarker, ContentBlock,
    DiffSide,
};
pub use error::{DiffError, DiffResult};
pub use op::{DiffEntry, DiffOp, DiffScript};
pub use range::TextRange;
