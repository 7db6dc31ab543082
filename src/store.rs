//! The store facade: owns the three index rotations and the term keeper and
//! keeps them mutually consistent through every mutation.

use tracing::{debug, warn};

use crate::construct::{Fragment, Term, TermKeeper};
use crate::error::{Result, TristoreError};
use crate::index::TripleIndex;
use crate::query::{self, Triples};
use crate::turtle::{self, Encoder};

/// An in-memory set of (subject, predicate, object) assertions, indexed
/// under all three rotations for sub-linear single-pattern lookup.
///
/// Mutation goes through delta-encoded batches (see [`crate::turtle`]): a
/// batch is decoded into full triples (for [`TripleStore::assert`]) or
/// wildcard patterns (for [`TripleStore::retract`]), and each decoded entry
/// is written to or removed from all three rotations. A malformed batch is
/// rejected with a diagnostic and zero mutation; callers must not depend on
/// the diagnostic text, only on the state being unchanged.
#[derive(Debug, Default)]
pub struct TripleStore {
    terms: TermKeeper,
    // the three rotations, always three views of the same assertion set
    pub(crate) subject_first: TripleIndex,   // s → p → {o}
    pub(crate) predicate_first: TripleIndex, // p → o → {s}
    pub(crate) object_first: TripleIndex,    // o → s → {p}
    // exact number of distinct assertions, maintained incrementally
    count: usize,
}

impl TripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store primed with an initial batch, validated like [`Self::assert`].
    pub fn with_batch(batch: &[Fragment]) -> Self {
        let mut store = Self::new();
        store.assert(batch);
        store
    }

    /// Decodes the batch and inserts every reconstructed triple into all
    /// three rotations, fluently. A malformed batch (empty, first fragment
    /// not a full triple, or any wildcard slot) is logged and absorbed with
    /// zero mutation.
    pub fn assert(&mut self, batch: &[Fragment]) -> &mut Self {
        if let Err(error) = self.try_assert(batch) {
            warn!(%error, "rejecting assert batch");
        }
        self
    }

    /// Like [`Self::assert`], surfacing the error and the number of triples
    /// that were not already present.
    pub fn try_assert(&mut self, batch: &[Fragment]) -> Result<usize> {
        let patterns = turtle::decode(batch)?;
        // validate the whole batch before touching the indexes
        let mut triples: Vec<(&str, &str, &str)> = Vec::with_capacity(patterns.len());
        for pattern in &patterns {
            match (
                pattern.subject().term(),
                pattern.predicate().term(),
                pattern.object().term(),
            ) {
                (Some(s), Some(p), Some(o)) => triples.push((s, p, o)),
                _ => {
                    return Err(TristoreError::Malformed {
                        message: format!("wildcard in assert batch: {}", pattern),
                    });
                }
            }
        }
        let mut added = 0;
        for (s, p, o) in triples {
            let s = self.terms.keep(s);
            let p = self.terms.keep(p);
            let o = self.terms.keep(o);
            // insert into the remaining rotations only when the entry is
            // new, so the three indexes stay in lockstep
            if self
                .subject_first
                .insert(Term::clone(&s), Term::clone(&p), Term::clone(&o))
            {
                self.predicate_first
                    .insert(Term::clone(&p), Term::clone(&o), Term::clone(&s));
                self.object_first.insert(o, s, p);
                self.count += 1;
                added += 1;
            }
        }
        debug!(added, total = self.count, "asserted batch");
        Ok(added)
    }

    /// Decodes the batch (wildcard slots allowed) and removes every matching
    /// assertion from all three rotations, fluently. The same validation as
    /// [`Self::assert`] applies to the batch shape; a pattern matching
    /// nothing is a no-op.
    pub fn retract(&mut self, batch: &[Fragment]) -> &mut Self {
        if let Err(error) = self.try_retract(batch) {
            warn!(%error, "rejecting retract batch");
        }
        self
    }

    /// Like [`Self::retract`], surfacing the error and the number of
    /// assertions removed.
    pub fn try_retract(&mut self, batch: &[Fragment]) -> Result<usize> {
        let patterns = turtle::decode(batch)?;
        let mut removed_total = 0;
        for pattern in &patterns {
            // the subject-first rotation yields the exact removed set, which
            // then drives the mirrored removals and the counter
            let removed = self.subject_first.remove_matching(
                pattern.subject().term(),
                pattern.predicate().term(),
                pattern.object().term(),
            );
            for (s, p, o) in &removed {
                self.predicate_first
                    .remove_matching(Some(p.as_ref()), Some(o.as_ref()), Some(s.as_ref()));
                self.object_first
                    .remove_matching(Some(o.as_ref()), Some(s.as_ref()), Some(p.as_ref()));
            }
            removed_total += removed.len();
        }
        self.count -= removed_total;
        debug!(removed = removed_total, total = self.count, "retracted batch");
        Ok(removed_total)
    }

    /// Whether the exact triple is asserted. Existence is conjunctive: the
    /// one triple (s, p, o) is present, not each component somewhere.
    pub fn has(&self, subject: &str, predicate: &str, object: &str) -> bool {
        self.subject_first.contains(subject, predicate, object)
    }

    /// The exact number of distinct assertions.
    pub fn size(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// A lazy sequence of the assertions matching the pattern, where `None`
    /// is a wildcard. Each call produces an independent traversal.
    pub fn query<'a>(
        &'a self,
        subject: Option<&str>,
        predicate: Option<&str>,
        object: Option<&str>,
    ) -> Triples<'a> {
        query::query(self, subject, predicate, object)
    }

    /// The matching assertions, delta-encoded: query results passed through
    /// the [`Encoder`], lazily.
    pub fn turtle<'a>(
        &'a self,
        subject: Option<&str>,
        predicate: Option<&str>,
        object: Option<&str>,
    ) -> Encoder<Triples<'a>> {
        Encoder::new(self.query(subject, predicate, object))
    }
}
