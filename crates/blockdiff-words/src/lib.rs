//! Group-based text diff for blockdiff.
//!
//! Texts are cut into groups (a word plus the delimiter that closes it),
//! each distinct group is mapped to one [`GroupId`], and a Myers diff runs
//! over the identity sequences. The resulting edit script is expanded back
//! to text, giving a [`DiffScript`](blockdiff_types::DiffScript) at word
//! granularity at a cost proportional to the number of groups.
//!
//! # Key Types
//!
//! - [`GroupDelimiter`] / [`DelimiterKind`] -- What closes a group
//! - [`GroupTable`] / [`GroupId`] -- Per-call deduplicating group table
//! - [`WordDiffConfig`] / [`DiffOptions`] -- Diff configuration
//!
//! # Example
//!
//! ```
//! use blockdiff_types::{DiffEntry, DiffOp};
//! use blockdiff_words::diff_words;
//!
//! let script = diff_words("Shows how text was", "Shows how text is").unwrap();
//! assert_eq!(script.entries()[1], DiffEntry::new(DiffOp::Delete, "was"));
//! ```

pub mod config;
pub mod delimiter;
pub mod encoder;
pub mod engine;

pub use config::{DiffOptions, WordDiffConfig};
pub use delimiter::{DelimiterKind, GroupDelimiter};
pub use encoder::{encode_groups, split_groups, EncodedTexts, GroupId, GroupTable, Groups};
pub use engine::{diff_groups, diff_with_config, diff_words};

#[cfg(test)]
mod tests {
    use super::*;
    use blockdiff_types::DiffOp;
    use proptest::prelude::*;

    fn text_strategy() -> impl Strategy<Value = String> {
        // Small vocabulary so the two sides share words.
        prop::collection::vec(
            prop::sample::select(vec!["a", "b", "cc", "dé", " ", "  ", "\n", "\t", "e "]),
            0..24,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn script_reconstructs_both_texts(before in text_strategy(), after in text_strategy()) {
            let script = diff_words(&before, &after).unwrap();
            prop_assert_eq!(script.before_text(), before);
            prop_assert_eq!(script.after_text(), after);
        }

        #[test]
        fn entries_are_maximal_and_non_empty(before in text_strategy(), after in text_strategy()) {
            let script = diff_words(&before, &after).unwrap();
            for entry in script.iter() {
                prop_assert!(!entry.text.is_empty());
            }
            for pair in script.entries().windows(2) {
                prop_assert_ne!(pair[0].op, pair[1].op);
            }
        }

        #[test]
        fn identical_texts_are_one_equal_entry(text in text_strategy()) {
            let script = diff_words(&text, &text).unwrap();
            if text.is_empty() {
                prop_assert!(script.is_empty());
            } else {
                prop_assert_eq!(script.len(), 1);
                prop_assert_eq!(script.entries()[0].op, DiffOp::Equal);
                prop_assert_eq!(&script.entries()[0].text, &text);
            }
        }

        #[test]
        fn line_mode_also_reconstructs(before in text_strategy(), after in text_strategy()) {
            let script = diff_with_config(&before, &after, &WordDiffConfig::line_mode()).unwrap();
            prop_assert_eq!(script.before_text(), before);
            prop_assert_eq!(script.after_text(), after);
        }
    }
}
