/// seqwalk v1: Equivalence Checks
///
/// Hard-fail validation of the traversal contract. For a sequence S,
/// every traversal mode must visit each element of S exactly once, in
/// ascending position order, leave S unchanged, and do so identically
/// on a second run.

use std::fmt::Debug;

use serde::Serialize;

use crate::error::EquivalenceError;
use crate::hashing::{canonical_hash, visit_log_hash};
use crate::sequence::Sequence;
use crate::traversal::{traverse, TraversalMode};
use crate::visit::VisitLog;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Record one traversal of `sequence` in `mode`.
pub fn record<T: Clone>(sequence: &Sequence<T>, mode: TraversalMode) -> VisitLog<T> {
    let mut log = VisitLog::new();
    traverse(sequence, mode, &mut log);
    log
}

/// Run every check over every mode. Panics on the first failure.
///
/// Elements are compared with `Eq`. Check float data through its bit
/// pattern (`f64::to_bits`) so NaN compares equal to itself.
pub fn validate_equivalence<T>(sequence: &Sequence<T>) -> VisitLog<T>
where
    T: Clone + Eq + Debug + Serialize,
{
    match try_validate_equivalence(sequence) {
        Ok(log) => log,
        Err(e) => panic!("Equivalence violation: {}", e),
    }
}

/// Non-panicking variant of `validate_equivalence`.
///
/// Returns the indexed-mode visit log when all modes agree.
pub fn try_validate_equivalence<T>(
    sequence: &Sequence<T>,
) -> Result<VisitLog<T>, EquivalenceError>
where
    T: Clone + Eq + Debug + Serialize,
{
    let mut reference = None;
    for mode in TraversalMode::ALL {
        let log = try_check_mode(sequence, mode)?;
        if reference.is_none() {
            reference = Some(log);
        }
    }
    tracing::debug!(len = sequence.len(), "all traversal modes equivalent");
    Ok(reference.unwrap_or_default())
}

/// Check a single mode: count, positions, elements, no mutation, repeatable.
pub fn try_check_mode<T>(
    sequence: &Sequence<T>,
    mode: TraversalMode,
) -> Result<VisitLog<T>, EquivalenceError>
where
    T: Clone + Eq + Debug + Serialize,
{
    let before = canonical_hash(sequence);
    let log = record(sequence, mode);
    try_check_unchanged(sequence, mode, &before)?;

    try_check_visit_count(sequence, mode, &log)?;
    try_check_positions(mode, &log)?;
    try_check_elements(sequence, mode, &log)?;

    let again = record(sequence, mode);
    try_check_repeatable(mode, &log, &again)?;
    try_check_unchanged(sequence, mode, &before)?;

    Ok(log)
}

// ---------------------------------------------------------------------------
// Individual checks (private)
// ---------------------------------------------------------------------------

/// Exactly one visit per element.
fn try_check_visit_count<T>(
    sequence: &Sequence<T>,
    mode: TraversalMode,
    log: &VisitLog<T>,
) -> Result<(), EquivalenceError> {
    if log.len() != sequence.len() {
        return Err(EquivalenceError::VisitCount {
            mode,
            visits: log.len(),
            len: sequence.len(),
        });
    }
    Ok(())
}

/// Indexed mode reports 0..len in order; the other modes report nothing.
fn try_check_positions<T>(mode: TraversalMode, log: &VisitLog<T>) -> Result<(), EquivalenceError> {
    for (visit, got) in log.positions().enumerate() {
        let expected = match mode {
            TraversalMode::Indexed => Some(visit),
            TraversalMode::Elements | TraversalMode::Callback => None,
        };
        if got != expected {
            return Err(EquivalenceError::Position {
                mode,
                visit,
                expected,
                got,
            });
        }
    }
    Ok(())
}

/// The k-th visit sees the element at position k.
fn try_check_elements<T>(
    sequence: &Sequence<T>,
    mode: TraversalMode,
    log: &VisitLog<T>,
) -> Result<(), EquivalenceError>
where
    T: Eq + Debug,
{
    for (position, (expected, got)) in sequence.as_slice().iter().zip(log.values()).enumerate() {
        if expected != got {
            return Err(EquivalenceError::Element {
                mode,
                position,
                expected: format!("{:?}", expected),
                got: format!("{:?}", got),
            });
        }
    }
    Ok(())
}

fn try_check_unchanged<T: Serialize + Eq>(
    sequence: &Sequence<T>,
    mode: TraversalMode,
    before: &str,
) -> Result<(), EquivalenceError> {
    let after = canonical_hash(sequence);
    if after != before {
        return Err(EquivalenceError::Mutated {
            mode,
            before: before.to_string(),
            after,
        });
    }
    Ok(())
}

fn try_check_repeatable<T: Serialize + Eq>(
    mode: TraversalMode,
    first: &VisitLog<T>,
    second: &VisitLog<T>,
) -> Result<(), EquivalenceError> {
    let h1 = visit_log_hash(first);
    let h2 = visit_log_hash(second);
    if h1 != h2 {
        return Err(EquivalenceError::NotRepeatable {
            mode,
            first: h1,
            second: h2,
        });
    }
    Ok(())
}
