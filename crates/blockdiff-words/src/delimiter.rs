//! Group delimiters: the characters that close a group.

use serde::{Deserialize, Serialize};

use blockdiff_types::{DiffError, DiffResult};

/// Decides which characters terminate a group.
///
/// Each match covers exactly one character; a run of two spaces therefore
/// closes one group and forms a second, space-only group.
pub trait GroupDelimiter {
    fn is_delimiter(&self, ch: char) -> bool;
}

impl<F> GroupDelimiter for F
where
    F: Fn(char) -> bool,
{
    fn is_delimiter(&self, ch: char) -> bool {
        self(ch)
    }
}

/// Serializable delimiter choices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterKind {
    /// Any Unicode whitespace: word granularity.
    #[default]
    Whitespace,
    /// `'\n'` only: line granularity.
    Newline,
    /// A custom character set.
    Chars(Vec<char>),
}

impl DelimiterKind {
    pub fn validate(&self) -> DiffResult<()> {
        match self {
            Self::Chars(set) if set.is_empty() => Err(DiffError::Config(
                "custom delimiter set must not be empty".into(),
            )),
            _ => Ok(()),
        }
    }
}

impl GroupDelimiter for DelimiterKind {
    fn is_delimiter(&self, ch: char) -> bool {
        match self {
            Self::Whitespace => ch.is_whitespace(),
            Self::Newline => ch == '\n',
            Self::Chars(set) => set.contains(&ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_matches_unicode_spaces() {
        let d = DelimiterKind::Whitespace;
        assert!(d.is_delimiter(' '));
        assert!(d.is_delimiter('\t'));
        assert!(d.is_delimiter('\u{00a0}'));
        assert!(!d.is_delimiter('a'));
    }

    #[test]
    fn newline_ignores_spaces() {
        let d = DelimiterKind::Newline;
        assert!(d.is_delimiter('\n'));
        assert!(!d.is_delimiter(' '));
    }

    #[test]
    fn closures_are_delimiters() {
        let comma = |c: char| c == ',';
        assert!(comma.is_delimiter(','));
        assert!(!comma.is_delimiter(' '));
    }

    #[test]
    fn empty_custom_set_is_invalid() {
        assert!(DelimiterKind::Chars(vec![]).validate().is_err());
        assert!(DelimiterKind::Chars(vec![';']).validate().is_ok());
    }
}
