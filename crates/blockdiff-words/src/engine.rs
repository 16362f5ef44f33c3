//! Group-level diff: Myers over group identities, expanded back to text.
//!
//! Uses the `similar` crate (Myers diff algorithm) on the encoded group
//! sequences, so the cost scales with the number of groups rather than the
//! number of characters.

use similar::{capture_diff_slices, Algorithm, DiffTag};
use tracing::debug;

use blockdiff_types::{DiffOp, DiffResult, DiffScript};

use crate::config::{DiffOptions, WordDiffConfig};
use crate::delimiter::{DelimiterKind, GroupDelimiter};
use crate::encoder::encode_groups;

/// Diff two texts word by word, using whitespace as the delimiter.
pub fn diff_words(before: &str, after: &str) -> DiffResult<DiffScript> {
    diff_groups(before, after, &DelimiterKind::Whitespace, DiffOptions::default())
}

/// Diff two texts as configured.
pub fn diff_with_config(
    before: &str,
    after: &str,
    config: &WordDiffConfig,
) -> DiffResult<DiffScript> {
    config.validate()?;
    diff_groups(before, after, &config.delimiter, config.options)
}

/// Diff two texts at the granularity of groups closed by `delimiter`.
///
/// The result is canonical: between two equal entries there is at most one
/// delete followed by at most one insert. Entries are maximal and non-empty;
/// identical texts give a single equal entry, two empty texts an empty script.
pub fn diff_groups<D>(
    before: &str,
    after: &str,
    delimiter: &D,
    options: DiffOptions,
) -> DiffResult<DiffScript>
where
    D: GroupDelimiter + ?Sized,
{
    let encoded = encode_groups(before, after, delimiter, options.max_groups)?;
    let ops = capture_diff_slices(Algorithm::Myers, &encoded.before, &encoded.after);

    let mut builder = ScriptBuilder::new(delimiter, options.align_delimiters);
    for op in &ops {
        let (tag, old, new) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => builder.equal(&encoded.table.decode(&encoded.before[old])),
            DiffTag::Delete => builder.delete(&encoded.table.decode(&encoded.before[old])),
            DiffTag::Insert => builder.insert(&encoded.table.decode(&encoded.after[new])),
            DiffTag::Replace => {
                builder.delete(&encoded.table.decode(&encoded.before[old]));
                builder.insert(&encoded.table.decode(&encoded.after[new]));
            }
        }
    }
    let script = builder.finish();

    debug!(
        groups = encoded.table.len(),
        ops = ops.len(),
        entries = script.len(),
        changed = script.changed_entries(),
        "group diff computed"
    );
    Ok(script)
}

/// Collects expanded text into a canonical script.
struct ScriptBuilder<'d, D: ?Sized> {
    script: DiffScript,
    deleted: String,
    inserted: String,
    delimiter: &'d D,
    align: bool,
}

impl<'d, D> ScriptBuilder<'d, D>
where
    D: GroupDelimiter + ?Sized,
{
    fn new(delimiter: &'d D, align: bool) -> Self {
        Self {
            script: DiffScript::new(),
            deleted: String::new(),
            inserted: String::new(),
            delimiter,
            align,
        }
    }

    fn equal(&mut self, text: &str) {
        self.flush();
        self.script.push(DiffOp::Equal, text);
    }

    fn delete(&mut self, text: &str) {
        self.deleted.push_str(text);
    }

    fn insert(&mut self, text: &str) {
        self.inserted.push_str(text);
    }

    fn finish(mut self) -> DiffScript {
        self.flush();
        self.script
    }

    fn flush(&mut self) {
        let shared = if self.align {
            shared_trailing_delimiters(&self.deleted, &self.inserted, self.delimiter)
        } else {
            0
        };
        let tail = self.inserted.split_off(self.inserted.len() - shared);
        self.deleted.truncate(self.deleted.len() - shared);

        self.script.push(DiffOp::Delete, &self.deleted);
        self.script.push(DiffOp::Insert, &self.inserted);
        // Pushed as equal; merges into the next equal entry if there is one.
        self.script.push(DiffOp::Equal, &tail);

        self.deleted.clear();
        self.inserted.clear();
    }
}

/// Byte length of the delimiter suffix common to both texts, leaving each
/// text at least one character.
fn shared_trailing_delimiters<D>(a: &str, b: &str, delimiter: &D) -> usize
where
    D: GroupDelimiter + ?Sized,
{
    let mut shared = 0;
    for (ca, cb) in a.chars().rev().zip(b.chars().rev()) {
        if ca != cb || !delimiter.is_delimiter(ca) {
            break;
        }
        let next = shared + ca.len_utf8();
        if next >= a.len() || next >= b.len() {
            break;
        }
        shared = next;
    }
    shared
}
