//! Error types for the traversal kernel.
//!
//! Traversal itself cannot fail. These errors describe a broken
//! equivalence contract between traversal modes.

use thiserror::Error;

use crate::traversal::TraversalMode;

/// A traversal contract that did not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquivalenceError {
    /// A mode made the wrong number of visit action calls.
    #[error("{mode} traversal made {visits} visits over a sequence of length {len}")]
    VisitCount {
        mode: TraversalMode,
        visits: usize,
        len: usize,
    },

    /// Index-counted traversal reported a position out of order.
    #[error("{mode} traversal reported position {got:?} at visit {visit}, expected {expected:?}")]
    Position {
        mode: TraversalMode,
        visit: usize,
        expected: Option<usize>,
        got: Option<usize>,
    },

    /// A mode visited a different element than the sequence holds there.
    #[error("{mode} traversal visited {got} at position {position}, sequence holds {expected}")]
    Element {
        mode: TraversalMode,
        position: usize,
        expected: String,
        got: String,
    },

    /// The sequence changed across a traversal.
    #[error("sequence changed during {mode} traversal: hash {before} became {after}")]
    Mutated {
        mode: TraversalMode,
        before: String,
        after: String,
    },

    /// Two runs of the same mode disagreed.
    #[error("{mode} traversal is not repeatable: run 1 hash {first}, run 2 hash {second}")]
    NotRepeatable {
        mode: TraversalMode,
        first: String,
        second: String,
    },
}
