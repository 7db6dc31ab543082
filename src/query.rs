//! The single-pattern query engine.
//!
//! Given a partially bound (subject, predicate, object) pattern, the
//! dispatcher picks the rotation whose nesting matches the longest bound
//! prefix, so lookups are sub-linear whenever any component is bound and a
//! full scan only happens when nothing is. Missing keys at any level
//! short-circuit to an empty result rather than an error.

use crate::construct::Triple;
use crate::store::TripleStore;

/// A lazy, finite sequence of full triples.
///
/// Every call to [`TripleStore::query`] produces an independent traversal;
/// nothing is cached between calls and abandoning a sequence mid-traversal
/// is free. The sequence borrows the store, so the borrow checker rules out
/// mutating the store while a sequence is still being advanced.
pub struct Triples<'a> {
    inner: Box<dyn Iterator<Item = Triple> + 'a>,
}

impl Iterator for Triples<'_> {
    type Item = Triple;

    fn next(&mut self) -> Option<Triple> {
        self.inner.next()
    }
}

pub(crate) fn query<'a>(
    store: &'a TripleStore,
    subject: Option<&str>,
    predicate: Option<&str>,
    object: Option<&str>,
) -> Triples<'a> {
    // rotations: subject-first holds (s, p, o), predicate-first (p, o, s),
    // object-first (o, s, p); each scan is mapped back into (s, p, o)
    let inner: Box<dyn Iterator<Item = Triple> + 'a> = match (subject, predicate, object) {
        (None, None, None) => Box::new(
            store
                .subject_first
                .scan()
                .map(|(s, p, o)| Triple::new(s, p, o)),
        ),
        (None, None, Some(o)) => Box::new(
            store
                .object_first
                .scan_primary(o)
                .map(|(o, s, p)| Triple::new(s, p, o)),
        ),
        (Some(s), None, None) => Box::new(
            store
                .subject_first
                .scan_primary(s)
                .map(|(s, p, o)| Triple::new(s, p, o)),
        ),
        (None, Some(p), None) => Box::new(
            store
                .predicate_first
                .scan_primary(p)
                .map(|(p, o, s)| Triple::new(s, p, o)),
        ),
        (None, Some(p), Some(o)) => Box::new(
            store
                .predicate_first
                .scan_pair(p, o)
                .map(|(p, o, s)| Triple::new(s, p, o)),
        ),
        (Some(s), None, Some(o)) => Box::new(
            store
                .object_first
                .scan_pair(o, s)
                .map(|(o, s, p)| Triple::new(s, p, o)),
        ),
        (Some(s), Some(p), None) => Box::new(
            store
                .subject_first
                .scan_pair(s, p)
                .map(|(s, p, o)| Triple::new(s, p, o)),
        ),
        // fully bound: a single existence check, at most one yield
        (Some(s), Some(p), Some(o)) => Box::new(
            store
                .subject_first
                .entry(s, p, o)
                .into_iter()
                .map(|(s, p, o)| Triple::new(s, p, o)),
        ),
    };
    Triples { inner }
}
