//! Replay: run a traversal from scratch and fingerprint what it visited.
//!
//! Delegates all traversal logic to the kernel. No cached logs.

use serde::Serialize;

use seqwalk::equivalence::record;
use seqwalk::hashing::visit_log_hash;
use seqwalk::{Sequence, TraversalMode, VisitLog};

/// Walk `sequence` in `mode` and return (visit_log, visit_log_hash).
///
/// Pure in the sequence: the same sequence and mode always give the
/// same log and hash.
pub fn replay<T>(sequence: &Sequence<T>, mode: TraversalMode) -> (VisitLog<T>, String)
where
    T: Clone + Eq + Serialize,
{
    let log = record(sequence, mode);
    let hash = visit_log_hash(&log);
    (log, hash)
}

/// Replay and return only the hash.
pub fn replay_hash<T>(sequence: &Sequence<T>, mode: TraversalMode) -> String
where
    T: Clone + Eq + Serialize,
{
    let (_, hash) = replay(sequence, mode);
    hash
}
