//! Half-open character ranges.

use serde::{Deserialize, Serialize};

/// A half-open interval `[start, end)` of character offsets into one text.
///
/// `start <= end` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "malformed range {start}..{end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The projection overlap test: `self.start < end && self.end > start`.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && self.end > start
    }

    /// Intersect with `[start, end)` and re-express relative to `start`.
    ///
    /// Returns `None` when the intersection is empty, which includes an
    /// empty `[start, end)` span.
    pub fn crop_relative(&self, start: usize, end: usize) -> Option<TextRange> {
        if !self.overlaps(start, end) {
            return None;
        }
        let from = self.start.max(start);
        let to = self.end.min(end);
        (from < to).then(|| TextRange::new(from - start, to - start))
    }
}

impl From<std::ops::Range<usize>> for TextRange {
    fn from(r: std::ops::Range<usize>) -> Self {
        TextRange::new(r.start, r.end)
    }
}

impl From<TextRange> for std::ops::Range<usize> {
    fn from(r: TextRange) -> Self {
        r.start..r.end
    }
}

impl std::fmt::Display for TextRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_strict_at_the_edges() {
        let r = TextRange::new(5, 10);
        assert!(r.overlaps(0, 6));
        assert!(r.overlaps(9, 20));
        assert!(!r.overlaps(0, 5));
        assert!(!r.overlaps(10, 20));
    }

    #[test]
    fn crop_relative_clamps_and_rebases() {
        let r = TextRange::new(3, 12);
        assert_eq!(r.crop_relative(5, 8), Some(TextRange::new(0, 3)));
        assert_eq!(r.crop_relative(0, 5), Some(TextRange::new(3, 5)));
        assert_eq!(r.crop_relative(10, 20), Some(TextRange::new(0, 2)));
        assert_eq!(r.crop_relative(12, 20), None);
    }

    #[test]
    fn crop_against_an_empty_span_is_none() {
        let r = TextRange::new(0, 6);
        assert!(r.overlaps(3, 3));
        assert_eq!(r.crop_relative(3, 3), None);
    }

    #[test]
    fn empty_range_never_crops_to_anything() {
        let r = TextRange::new(4, 4);
        assert!(r.is_empty());
        assert_eq!(r.crop_relative(0, 10), None);
    }

    #[test]
    fn converts_to_and_from_std_range() {
        let r: TextRange = (2..7).into();
        assert_eq!(r.len(), 5);
        let back: std::ops::Range<usize> = r.into();
        assert_eq!(back, 2..7);
        assert_eq!(r.to_string(), "2..7");
    }
}
