//! The delta codec for triple sequences.
//!
//! A batch is a sequence of fragments, each holding only the components that
//! changed relative to the previously emitted triple: a width-3 fragment is a
//! full triple, width 2 keeps the previous subject, width 1 keeps the
//! previous subject and predicate. A batch is only meaningful when it was
//! produced in subject-major, then predicate-major order; decoding assumes
//! this and carries the last seen components forward into omitted positions.
//!
//! The codec does not sort: callers supply pre-grouped sequences. The
//! subject-first full scan of the store satisfies the grouping naturally, so
//! `decode(encode(x)) == x` and `encode(decode(x)) == x` hold for any
//! pre-grouped sequence `x`.

use crate::construct::{Fragment, Pattern, Slot, Triple};
use crate::error::{Result, TristoreError};

/// Decodes a fragment batch into patterns, carrying forward the omitted
/// leading components of each fragment.
///
/// Rejects the empty batch, a first fragment that is not a full 3-slot
/// entry, and any fragment of width 0 or greater than 3. Rejection happens
/// before the caller mutates anything, so a malformed batch never changes
/// store state.
pub fn decode(batch: &[Fragment]) -> Result<Vec<Pattern>> {
    let first = batch.first().ok_or(TristoreError::EmptyBatch)?;
    if first.width() != 3 {
        return Err(TristoreError::Malformed {
            message: format!(
                "first fragment must have 3 slots, found {}",
                first.width()
            ),
        });
    }
    let mut current = [Slot::Any, Slot::Any, Slot::Any];
    let mut decoded = Vec::with_capacity(batch.len());
    for fragment in batch {
        match fragment.slots() {
            [s, p, o] => {
                current = [s.clone(), p.clone(), o.clone()];
            }
            [p, o] => {
                current[1] = p.clone();
                current[2] = o.clone();
            }
            [o] => {
                current[2] = o.clone();
            }
            slots => {
                return Err(TristoreError::Malformed {
                    message: format!("fragment with {} slots", slots.len()),
                });
            }
        }
        let [s, p, o] = current.clone();
        decoded.push(Pattern::new(s, p, o));
    }
    Ok(decoded)
}

/// Delta-encodes a triple sequence, lazily.
///
/// For each triple compared to the previously emitted one: a full fragment
/// when the subject changed, otherwise a (predicate, object) fragment when
/// the predicate changed, otherwise a single (object) fragment. Exactly one
/// fragment of the minimal necessary width per input triple.
pub struct Encoder<I> {
    triples: I,
    previous: Option<Triple>,
}

impl<I: Iterator<Item = Triple>> Encoder<I> {
    pub fn new(triples: I) -> Self {
        Self {
            triples,
            previous: None,
        }
    }
}

impl<I: Iterator<Item = Triple>> Iterator for Encoder<I> {
    type Item = Fragment;

    fn next(&mut self) -> Option<Fragment> {
        let triple = self.triples.next()?;
        let fragment = match &self.previous {
            Some(previous) if previous.subject() == triple.subject() => {
                if previous.predicate() == triple.predicate() {
                    Fragment::last(triple.object())
                } else {
                    Fragment::tail(triple.predicate(), triple.object())
                }
            }
            _ => Fragment::full(triple.subject(), triple.predicate(), triple.object()),
        };
        self.previous = Some(triple);
        Some(fragment)
    }
}

/// Convenience over [`Encoder`] for anything iterable.
pub fn encode<I>(triples: I) -> Encoder<I::IntoIter>
where
    I: IntoIterator<Item = Triple>,
{
    Encoder::new(triples.into_iter())
}
