//! Drift detection: determinism verification and cross-mode comparison.
//!
//! Drift is any difference between two visit logs that must match:
//! two runs of one mode, or two modes over one sequence.

use serde::Serialize;

use seqwalk::{EquivalenceError, Sequence, TraversalMode, VisitLog};

use crate::error::Result;
use crate::replay;

/// Verify determinism by replaying the same mode twice and
/// asserting identical hashes. Panics on failure.
pub fn verify_determinism<T>(sequence: &Sequence<T>, mode: TraversalMode)
where
    T: Clone + Eq + Serialize,
{
    if let Err(e) = try_verify_determinism(sequence, mode) {
        panic!("DETERMINISM FAILURE: {}", e);
    }
}

/// Non-panicking variant of `verify_determinism`.
pub fn try_verify_determinism<T>(sequence: &Sequence<T>, mode: TraversalMode) -> Result<()>
where
    T: Clone + Eq + Serialize,
{
    let hash1 = replay::replay_hash(sequence, mode);
    let hash2 = replay::replay_hash(sequence, mode);

    if hash1 != hash2 {
        return Err(EquivalenceError::NotRepeatable {
            mode,
            first: hash1,
            second: hash2,
        }
        .into());
    }
    Ok(())
}

/// Per-mode fingerprint inside a `DriftReport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeSummary {
    pub mode: TraversalMode,
    pub visits: usize,
    pub hash: String,
    /// First visit whose value differs from the reference mode, if any.
    pub first_divergence: Option<usize>,
}

/// Structured comparison of every mode against the indexed reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriftReport {
    pub len: usize,
    pub reference: TraversalMode,
    pub modes: Vec<ModeSummary>,
    pub equivalent: bool,
}

impl DriftReport {
    /// Summaries of modes that drifted from the reference.
    pub fn drifted(&self) -> impl Iterator<Item = &ModeSummary> {
        let reference = self.reference;
        self.modes
            .iter()
            .filter(move |m| m.mode != reference && m.first_divergence.is_some())
    }
}

/// Compare every mode against index-counted traversal.
pub fn compare_modes<T>(sequence: &Sequence<T>) -> DriftReport
where
    T: Clone + Eq + Serialize,
{
    let reference_mode = TraversalMode::Indexed;
    let (reference, _) = replay::replay(sequence, reference_mode);

    let modes: Vec<ModeSummary> = TraversalMode::ALL
        .into_iter()
        .map(|mode| {
            let (log, hash) = replay::replay(sequence, mode);
            ModeSummary {
                mode,
                visits: log.len(),
                hash,
                first_divergence: first_divergence(&reference, &log),
            }
        })
        .collect();

    let equivalent = modes.iter().all(|m| m.first_divergence.is_none());
    if !equivalent {
        tracing::warn!(len = sequence.len(), "traversal modes drifted");
    }

    DriftReport {
        len: sequence.len(),
        reference: reference_mode,
        modes,
        equivalent,
    }
}

/// Index of the first visit where the logs disagree on value, or where
/// one log ends before the other. `None` when the value lists match.
pub fn first_divergence<T: Eq>(a: &VisitLog<T>, b: &VisitLog<T>) -> Option<usize> {
    a.values()
        .zip(b.values())
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}
