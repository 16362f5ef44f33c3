use serde::Serialize;
use tracing::debug;

use blockdiff_project::{build_decoration_strategies, Decoration, DecorationStrategies};
use blockdiff_structure::{diff_block_structure, StructuralDiff};
use blockdiff_types::{
    assemble_text, blocks_from_text, Block, ContentBlock, DiffScript, DiffSide,
};
use blockdiff_words::diff_with_config;

use crate::config::EngineConfig;
use crate::error::SdkResult;

/// A word diff of two block documents, projected onto both sides.
///
/// Built in one pass and never updated: when either document changes,
/// compute a new one. Until then the strategies keep answering for blocks
/// whose text is unchanged and yield nothing for edited blocks.
#[derive(Clone, Debug)]
pub struct DocumentDiff {
    script: DiffScript,
    before: DecorationStrategies,
    after: DecorationStrategies,
    structure: StructuralDiff,
}

impl DocumentDiff {
    /// Diff two block sequences.
    ///
    /// Each side's flat text is its blocks joined with the configured
    /// separator; the word diff runs once over the two flat texts.
    pub fn compute<A, B>(before: &[A], after: &[B], config: &EngineConfig) -> SdkResult<Self>
    where
        A: Block,
        B: Block,
    {
        let separator = &config.projection.separator;
        let before_text = assemble_text(before, separator);
        let after_text = assemble_text(after, separator);

        let script = diff_with_config(&before_text, &after_text, &config.words)?;
        let before_strategies =
            build_decoration_strategies(&script, DiffSide::Before, before, &config.projection)?;
        let after_strategies =
            build_decoration_strategies(&script, DiffSide::After, after, &config.projection)?;
        let structure = diff_block_structure(before, after)?;

        debug!(
            before_blocks = before.len(),
            after_blocks = after.len(),
            entries = script.len(),
            structural_changes = structure.len(),
            "document diff computed"
        );
        Ok(Self {
            script,
            before: before_strategies,
            after: after_strategies,
            structure,
        })
    }

    pub fn script(&self) -> &DiffScript {
        &self.script
    }

    /// Strategies for one side.
    pub fn strategies(&self, side: DiffSide) -> &DecorationStrategies {
        match side {
            DiffSide::Before => &self.before,
            DiffSide::After => &self.after,
        }
    }

    pub fn structure(&self) -> &StructuralDiff {
        &self.structure
    }
}

/// A diff of two plain texts split into blocks at the configured separator.
#[derive(Clone, Debug)]
pub struct TextDiff {
    pub before_blocks: Vec<ContentBlock>,
    pub after_blocks: Vec<ContentBlock>,
    pub diff: DocumentDiff,
}

impl TextDiff {
    pub fn compute(before: &str, after: &str, config: &EngineConfig) -> SdkResult<Self> {
        let separator = &config.projection.separator;
        let before_blocks = blocks_from_text(before, separator);
        let after_blocks = blocks_from_text(after, separator);
        let diff = DocumentDiff::compute(&before_blocks, &after_blocks, config)?;
        Ok(Self {
            before_blocks,
            after_blocks,
            diff,
        })
    }

    pub fn blocks(&self, side: DiffSide) -> &[ContentBlock] {
        match side {
            DiffSide::Before => &self.before_blocks,
            DiffSide::After => &self.after_blocks,
        }
    }

    /// Every decoration of one side's blocks.
    pub fn decorations(&self, side: DiffSide) -> Vec<Decoration> {
        self.diff.strategies(side).decorations(self.blocks(side))
    }

    /// Serializable view of the whole result.
    pub fn summary(&self) -> DiffSummary {
        DiffSummary {
            script: self.diff.script().clone(),
            before: self.decorations(DiffSide::Before),
            after: self.decorations(DiffSide::After),
        }
    }
}

/// The script plus both sides' decorations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub script: DiffScript,
    pub before: Vec<Decoration>,
    pub after: Vec<Decoration>,
}
