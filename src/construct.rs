use std::sync::Arc;

// keepers use HashSet with a fast hasher, since terms are not integers
use core::hash::BuildHasherDefault;
use seahash::SeaHasher;
use std::collections::HashSet;

// used for the wire form of fragments and triples
use serde::{Deserialize, Serialize};

// used to print out readable forms of a construct
use std::fmt;

// ------------- Term -------------
/// A component of a triple: an opaque string (IRI or literal, no internal
/// structure imposed), interned and shared through `Arc`.
pub type Term = Arc<str>;

pub type TermHasher = BuildHasherDefault<SeaHasher>;

/// Owns the canonical copy of every distinct component string, so the three
/// index rotations share one allocation per term. Kept terms are never
/// released: retraction removes index entries but does not un-intern, so the
/// keeper grows with the number of distinct terms ever seen.
#[derive(Debug, Default)]
pub struct TermKeeper {
    kept: HashSet<Term, TermHasher>,
}
impl TermKeeper {
    pub fn new() -> Self {
        Self {
            kept: HashSet::default(),
        }
    }
    pub fn keep(&mut self, term: &str) -> Term {
        match self.kept.get(term) {
            Some(kept) => Arc::clone(kept),
            None => {
                let keepsake: Term = Arc::from(term);
                self.kept.insert(Arc::clone(&keepsake));
                keepsake
            }
        }
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

// ------------- Triple -------------
/// An (subject, predicate, object) assertion.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Triple {
    subject: Term,
    predicate: Term,
    object: Term,
}
impl Triple {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
    pub fn of(subject: &str, predicate: &str, object: &str) -> Self {
        Self {
            subject: Arc::from(subject),
            predicate: Arc::from(predicate),
            object: Arc::from(object),
        }
    }
    // components are encapsulated and exposed using "getters", which yields
    // true immutability for triples after creation
    pub fn subject(&self) -> Term {
        Arc::clone(&self.subject)
    }
    pub fn predicate(&self) -> Term {
        Arc::clone(&self.predicate)
    }
    pub fn object(&self) -> Term {
        Arc::clone(&self.object)
    }
}
impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.predicate, self.object)
    }
}

// ------------- Slot -------------
/// One position of a fragment or pattern: either a bound term or a wildcard.
/// In the wire form a bound slot is a string and a wildcard is `null`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Slot {
    Term(String),
    Any,
}
impl Slot {
    /// The bound term, or `None` for a wildcard.
    pub fn term(&self) -> Option<&str> {
        match self {
            Slot::Term(term) => Some(term),
            Slot::Any => None,
        }
    }
    pub fn is_any(&self) -> bool {
        matches!(self, Slot::Any)
    }
}
impl From<&str> for Slot {
    fn from(term: &str) -> Self {
        Slot::Term(term.to_owned())
    }
}
impl From<String> for Slot {
    fn from(term: String) -> Self {
        Slot::Term(term)
    }
}
impl From<Term> for Slot {
    fn from(term: Term) -> Self {
        Slot::Term(term.as_ref().to_owned())
    }
}
impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slot::Term(term) => write!(f, "{}", term),
            Slot::Any => write!(f, "*"),
        }
    }
}

// ------------- Fragment -------------
/// A delta-encoded ("turtle") representation of one triple relative to the
/// previously emitted one:
/// * width 3 — a full triple (the subject changed),
/// * width 2 — (predicate, object) with the subject carried forward,
/// * width 1 — (object) with subject and predicate carried forward.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment {
    slots: Vec<Slot>,
}
impl Fragment {
    pub fn full(
        subject: impl Into<Slot>,
        predicate: impl Into<Slot>,
        object: impl Into<Slot>,
    ) -> Self {
        Self {
            slots: vec![subject.into(), predicate.into(), object.into()],
        }
    }
    pub fn tail(predicate: impl Into<Slot>, object: impl Into<Slot>) -> Self {
        Self {
            slots: vec![predicate.into(), object.into()],
        }
    }
    pub fn last(object: impl Into<Slot>) -> Self {
        Self {
            slots: vec![object.into()],
        }
    }
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
    pub fn width(&self) -> usize {
        self.slots.len()
    }
}
impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = String::new();
        for slot in &self.slots {
            s += &(slot.to_string() + ", ");
        }
        s.pop();
        s.pop();
        write!(f, "[{}]", s)
    }
}

// ------------- Pattern -------------
/// A triple with zero or more components replaced by a wildcard; the decoded
/// form of a fragment and the input to wildcard retraction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Pattern {
    subject: Slot,
    predicate: Slot,
    object: Slot,
}
impl Pattern {
    pub fn new(subject: Slot, predicate: Slot, object: Slot) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
    pub fn subject(&self) -> &Slot {
        &self.subject
    }
    pub fn predicate(&self) -> &Slot {
        &self.predicate
    }
    pub fn object(&self) -> &Slot {
        &self.object
    }
    /// The full triple, when every slot is bound.
    pub fn triple(&self) -> Option<Triple> {
        match (&self.subject, &self.predicate, &self.object) {
            (Slot::Term(s), Slot::Term(p), Slot::Term(o)) => Some(Triple::of(s, p, o)),
            _ => None,
        }
    }
}
impl From<&Triple> for Pattern {
    fn from(triple: &Triple) -> Self {
        Self {
            subject: triple.subject().into(),
            predicate: triple.predicate().into(),
            object: triple.object().into(),
        }
    }
}
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.predicate, self.object)
    }
}
