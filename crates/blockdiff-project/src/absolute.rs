//! Absolute ranges: where each diff entry lands in one side's flat text.

use serde::{Deserialize, Serialize};

use blockdiff_types::{DiffOp, DiffScript, DiffSide, TextRange};

/// Equal and modified ranges over one side's whole text, in text order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsoluteRanges {
    pub equal: Vec<TextRange>,
    /// Inserts on the after side, deletes on the before side.
    pub modified: Vec<TextRange>,
}

/// Walk `script` with a character offset into `side`'s text.
///
/// Entries whose text does not exist on `side` are skipped without moving
/// the offset.
pub fn absolute_ranges(script: &DiffScript, side: DiffSide) -> AbsoluteRanges {
    let ignored = side.ignored_op();
    let mut ranges = AbsoluteRanges::default();
    let mut offset = 0;

    for entry in script {
        if entry.op == ignored {
            continue;
        }
        let len = entry.char_len();
        let range = TextRange::new(offset, offset + len);
        if entry.op == DiffOp::Equal {
            ranges.equal.push(range);
        } else {
            ranges.modified.push(range);
        }
        offset += len;
    }
    ranges
}
