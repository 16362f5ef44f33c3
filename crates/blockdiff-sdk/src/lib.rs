//! High-level SDK for blockdiff.
//!
//! Diffs two block documents in one call: the word diff over both flat
//! texts, the decoration strategies of each side and the keyed structural
//! diff. This is the main entry point for editors embedding blockdiff.

pub mod config;
pub mod document;
pub mod error;

pub use config::EngineConfig;
pub use document::{DiffSummary, DocumentDiff, TextDiff};
pub use error::{SdkError, SdkResult};

// Re-export key types
pub use blockdiff_project::{Decoration, DecorationStrategies, DecorationStrategy, ProjectionConfig};
pub use blockdiff_structure::{BlockChange, StructuralDiff};
pub use blockdiff_types::{
    Block, BlockKey, BlockKind, BlockMarker, ContentBlock, DiffError, DiffOp, DiffScript, DiffSide,
    TextRange,
};
pub use blockdiff_words::{DelimiterKind, WordDiffConfig};
