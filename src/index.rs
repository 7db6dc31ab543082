//! One rotation of the assertion set, stored as a three-level nested mapping
//! `primary → secondary → {ternary}`.
//!
//! The store owns three of these, one per rotation (subject-first,
//! predicate-first, object-first), and keeps them mutually consistent: every
//! stored triple is present in all three or in none.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::construct::{Term, TermHasher};

/// The set of ternary components under one (primary, secondary) pair.
pub type Leaf = HashSet<Term, TermHasher>;
/// The secondary level: secondary → {ternary}.
pub type Branch = HashMap<Term, Leaf, TermHasher>;

#[derive(Debug, Default)]
pub struct TripleIndex {
    index: HashMap<Term, Branch, TermHasher>,
}

impl TripleIndex {
    pub fn new() -> Self {
        Self {
            index: HashMap::default(),
        }
    }

    /// Creates intermediate mappings on demand and adds the ternary to the
    /// leaf set. Reinserting an existing entry is a no-op; the return value
    /// tells whether the entry was new.
    pub fn insert(&mut self, primary: Term, secondary: Term, ternary: Term) -> bool {
        self.index
            .entry(primary)
            .or_default()
            .entry(secondary)
            .or_default()
            .insert(ternary)
    }

    /// Deletes every entry matching the pattern, where an absent component
    /// matches all current keys at that level. Emptied leaf sets, then
    /// emptied branches, then emptied primary entries are pruned so deleted
    /// branches leave no residue. Returns the removed entries in full.
    pub fn remove_matching(
        &mut self,
        primary: Option<&str>,
        secondary: Option<&str>,
        ternary: Option<&str>,
    ) -> Vec<(Term, Term, Term)> {
        let mut removed = Vec::new();
        // wildcard levels enumerate a materialized snapshot of the keys,
        // since the structure is mutated while they are visited
        let primaries: Vec<Term> = match primary {
            Some(p) => self
                .index
                .get_key_value(p)
                .map(|(kept, _)| Arc::clone(kept))
                .into_iter()
                .collect(),
            None => self.index.keys().cloned().collect(),
        };
        for p in primaries {
            if let Some(branch) = self.index.get_mut(&p) {
                let secondaries: Vec<Term> = match secondary {
                    Some(s) => branch
                        .get_key_value(s)
                        .map(|(kept, _)| Arc::clone(kept))
                        .into_iter()
                        .collect(),
                    None => branch.keys().cloned().collect(),
                };
                for s in secondaries {
                    if let Some(leaf) = branch.get_mut(&s) {
                        match ternary {
                            Some(t) => {
                                if let Some(kept) = leaf.take(t) {
                                    removed.push((Arc::clone(&p), Arc::clone(&s), kept));
                                }
                            }
                            None => {
                                for t in leaf.drain() {
                                    removed.push((Arc::clone(&p), Arc::clone(&s), t));
                                }
                            }
                        }
                        if leaf.is_empty() {
                            branch.remove(&s);
                        }
                    }
                }
                let pruned = branch.is_empty();
                if pruned {
                    self.index.remove(&p);
                }
            }
        }
        removed
    }

    pub fn contains(&self, primary: &str, secondary: &str, ternary: &str) -> bool {
        self.index
            .get(primary)
            .and_then(|branch| branch.get(secondary))
            .is_some_and(|leaf| leaf.contains(ternary))
    }

    /// The stored entry for a fully bound lookup, with the canonical terms.
    pub fn entry(
        &self,
        primary: &str,
        secondary: &str,
        ternary: &str,
    ) -> Option<(Term, Term, Term)> {
        let (p, branch) = self.index.get_key_value(primary)?;
        let (s, leaf) = branch.get_key_value(secondary)?;
        let t = leaf.get(ternary)?;
        Some((Arc::clone(p), Arc::clone(s), Arc::clone(t)))
    }

    /// Lazily yields every stored entry, grouped by primary and, within a
    /// primary, by secondary.
    pub fn scan(&self) -> impl Iterator<Item = (Term, Term, Term)> + '_ {
        self.index.iter().flat_map(|(p, branch)| {
            branch.iter().flat_map(move |(s, leaf)| {
                leaf.iter()
                    .map(move |t| (Arc::clone(p), Arc::clone(s), Arc::clone(t)))
            })
        })
    }

    /// Lazily yields every entry under the given primary; a missing key
    /// yields nothing.
    pub fn scan_primary<'a>(
        &'a self,
        primary: &str,
    ) -> impl Iterator<Item = (Term, Term, Term)> + use<'a> {
        self.index
            .get_key_value(primary)
            .into_iter()
            .flat_map(|(p, branch)| {
                branch.iter().flat_map(move |(s, leaf)| {
                    leaf.iter()
                        .map(move |t| (Arc::clone(p), Arc::clone(s), Arc::clone(t)))
                })
            })
    }

    /// Lazily yields every entry under the given (primary, secondary) pair.
    pub fn scan_pair<'a>(
        &'a self,
        primary: &str,
        secondary: &str,
    ) -> impl Iterator<Item = (Term, Term, Term)> + use<'a> {
        let found = self.index.get_key_value(primary).and_then(|(p, branch)| {
            branch
                .get_key_value(secondary)
                .map(|(s, leaf)| (p, s, leaf))
        });
        found.into_iter().flat_map(|(p, s, leaf)| {
            leaf.iter()
                .map(move |t| (Arc::clone(p), Arc::clone(s), Arc::clone(t)))
        })
    }

    /// The number of distinct primary keys (pruning keeps this honest).
    pub fn len(&self) -> usize {
        self.index.len()
    }
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
