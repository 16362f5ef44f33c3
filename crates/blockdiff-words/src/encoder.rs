//! Group encoding: rewrite two texts as sequences of group identities.
//!
//! A group is a maximal run of non-delimiter characters plus the single
//! delimiter character that closes it. Both texts share one [`GroupTable`],
//! so an unchanged word gets the same [`GroupId`] on both sides wherever it
//! appears. The table borrows from the input texts and lives for one diff
//! call only.

use std::collections::HashMap;
use std::num::NonZeroU32;

use blockdiff_types::{DiffError, DiffResult};

use crate::delimiter::GroupDelimiter;

/// Identity of a distinct group within one diff call.
///
/// Zero is reserved and never handed out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(NonZeroU32);

impl GroupId {
    /// Maximum number of distinct groups one diff call can encode.
    pub const CAPACITY: usize = u32::MAX as usize;

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

/// Iterator over the groups of a text, in order.
///
/// Concatenating every yielded group reproduces the text exactly.
pub struct Groups<'t, 'd, D: ?Sized> {
    text: &'t str,
    pos: usize,
    delimiter: &'d D,
}

/// Split `text` into groups closed by `delimiter`.
pub fn split_groups<'t, 'd, D>(text: &'t str, delimiter: &'d D) -> Groups<'t, 'd, D>
where
    D: GroupDelimiter + ?Sized,
{
    Groups {
        text,
        pos: 0,
        delimiter,
    }
}

impl<'t, D> Iterator for Groups<'t, '_, D>
where
    D: GroupDelimiter + ?Sized,
{
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        if self.pos >= self.text.len() {
            return None;
        }
        let rest = &self.text[self.pos..];
        let end = rest
            .char_indices()
            .find(|&(_, ch)| self.delimiter.is_delimiter(ch))
            .map(|(i, ch)| i + ch.len_utf8())
            .unwrap_or(rest.len());
        self.pos += end;
        Some(&rest[..end])
    }
}

/// Deduplicating table from group text to identity.
#[derive(Debug)]
pub struct GroupTable<'a> {
    groups: Vec<&'a str>,
    index: HashMap<&'a str, GroupId>,
    limit: usize,
}

impl<'a> GroupTable<'a> {
    /// Create a table accepting at most `limit` distinct groups
    /// (capped at [`GroupId::CAPACITY`]).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            // Slot 0 backs the reserved identity.
            groups: vec![""],
            index: HashMap::new(),
            limit: limit.min(GroupId::CAPACITY),
        }
    }

    /// Number of distinct groups interned so far.
    pub fn len(&self) -> usize {
        self.groups.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up `group`, assigning the next identity if it is new.
    pub fn intern(&mut self, group: &'a str) -> DiffResult<GroupId> {
        if let Some(&id) = self.index.get(group) {
            return Ok(id);
        }
        let exceeded = DiffError::GroupLimitExceeded { limit: self.limit };
        if self.len() >= self.limit {
            return Err(exceeded);
        }
        let raw = u32::try_from(self.groups.len()).map_err(|_| exceeded.clone())?;
        let id = GroupId(NonZeroU32::new(raw).ok_or(exceeded)?);
        self.groups.push(group);
        self.index.insert(group, id);
        Ok(id)
    }

    /// The text of a group.
    pub fn text(&self, id: GroupId) -> &'a str {
        self.groups[id.get() as usize]
    }

    /// Concatenate the texts of `ids`.
    pub fn decode(&self, ids: &[GroupId]) -> String {
        ids.iter().map(|&id| self.text(id)).collect()
    }
}

/// Two texts rewritten as group identities over a shared table.
#[derive(Debug)]
pub struct EncodedTexts<'a> {
    pub before: Vec<GroupId>,
    pub after: Vec<GroupId>,
    pub table: GroupTable<'a>,
}

/// Encode both texts against one fresh table.
pub fn encode_groups<'a, D>(
    before: &'a str,
    after: &'a str,
    delimiter: &D,
    max_groups: usize,
) -> DiffResult<EncodedTexts<'a>>
where
    D: GroupDelimiter + ?Sized,
{
    let mut table = GroupTable::with_limit(max_groups);
    let before = encode_text(before, delimiter, &mut table)?;
    let after = encode_text(after, delimiter, &mut table)?;
    Ok(EncodedTexts {
        before,
        after,
        table,
    })
}

fn encode_text<'a, D>(
    text: &'a str,
    delimiter: &D,
    table: &mut GroupTable<'a>,
) -> DiffResult<Vec<GroupId>>
where
    D: GroupDelimiter + ?Sized,
{
    split_groups(text, delimiter)
        .map(|group| table.intern(group))
        .collect()
}
