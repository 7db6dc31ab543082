//! Tristore – an embeddable in-memory triple store.
//!
//! Tristore keeps a set of (subject, predicate, object) string assertions
//! and answers single-pattern lookups with any combination of bound and
//! unbound components:
//! * A [`construct::Term`] is an opaque component string, interned by the
//!   [`construct::TermKeeper`] and shared through `Arc`.
//! * A [`construct::Triple`] is one (subject, predicate, object) assertion.
//! * A [`construct::Fragment`] is the delta-encoded ("turtle") form of a
//!   triple relative to the previously emitted one, and the input format of
//!   every mutation batch.
//! * A [`construct::Pattern`] is a triple with zero or more components
//!   replaced by a wildcard.
//!
//! Every assertion is stored under three rotations (subject-first,
//! predicate-first, object-first) of the nested [`index::TripleIndex`]
//! mapping, so a lookup with any bound component walks straight to the
//! matching branch instead of scanning the whole set. The rotations are
//! three views of exactly the same assertion set, kept in lockstep by the
//! [`store::TripleStore`] through every assert and retract.
//!
//! ## Modules
//! * [`construct`] – Fundamental building blocks and the term keeper.
//! * [`index`] – One rotation of the assertion set, with wildcard removal
//!   and prune-on-empty.
//! * [`store`] – The facade: assert / retract / has / size / query / turtle.
//! * [`query`] – The eight-case pattern dispatcher producing lazy triple
//!   sequences.
//! * [`turtle`] – The delta codec between triple sequences and fragment
//!   batches.
//! * [`error`] – The crate error type and `Result` alias.
//!
//! ## Quick Start
//! ```
//! use tristore::construct::Fragment;
//! use tristore::store::TripleStore;
//!
//! let mut store = TripleStore::new();
//! store.assert(&[Fragment::full("a", "p1", "b"), Fragment::tail("p2", "c")]);
//! assert_eq!(store.size(), 2);
//! assert!(store.has("a", "p2", "c"));
//!
//! let objects: Vec<_> = store
//!     .query(Some("a"), Some("p1"), None)
//!     .map(|triple| triple.object())
//!     .collect();
//! assert_eq!(objects.len(), 1);
//! ```
//!
//! ## Concurrency
//! Single-threaded and synchronous: queries borrow the store immutably, so
//! mutating while a query sequence is still being advanced is a compile
//! error rather than a runtime surprise. Wrap the whole store in a lock if
//! shared access is ever needed; the indexing algorithm itself stays
//! single-writer.

pub mod construct;
pub mod error;
pub mod index;
pub mod query;
pub mod store;
pub mod turtle;
