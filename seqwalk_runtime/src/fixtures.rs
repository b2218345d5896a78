//! Fixture harness: replay stored sequences through every mode and
//! compare against expected output and, when present, the golden hash.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use seqwalk::{Sequence, TraversalMode};

use crate::drift;
use crate::error::{Result, RuntimeError};
use crate::replay;

/// One stored case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    pub name: String,
    pub values: Vec<i64>,
    pub expected: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_hash: Option<String>,
}

/// Load a JSON array of fixtures.
pub fn load_fixtures(path: &Path) -> Result<Vec<Fixture>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| RuntimeError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Outcome of one fixture across every mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureOutcome {
    pub name: String,
    pub hash: String,
    pub failures: Vec<String>,
}

impl FixtureOutcome {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run one fixture through `modes`.
pub fn check_fixture(fixture: &Fixture, modes: &[TraversalMode]) -> FixtureOutcome {
    let sequence = Sequence::new(fixture.values.clone());
    let mut failures = Vec::new();
    let mut hash = String::new();

    for &mode in modes {
        let (log, h) = replay::replay(&sequence, mode);
        let got = log.to_values();
        if got != fixture.expected {
            failures.push(format!(
                "{} visited {:?}, expected {:?}",
                mode, got, fixture.expected
            ));
        }
        if let Some(expected_hash) = &fixture.expected_hash {
            if &h != expected_hash {
                failures.push(format!(
                    "{} hash mismatch: got {} expected {}",
                    mode, h, expected_hash
                ));
            }
        }
        if let Err(e) = drift::try_verify_determinism(&sequence, mode) {
            failures.push(e.to_string());
        }
        hash = h;
    }

    FixtureOutcome {
        name: fixture.name.clone(),
        hash,
        failures,
    }
}

/// Run every fixture; returns outcomes in file order.
pub fn run_fixtures(fixtures: &[Fixture], modes: &[TraversalMode]) -> Vec<FixtureOutcome> {
    fixtures
        .iter()
        .map(|fixture| {
            let outcome = check_fixture(fixture, modes);
            tracing::info!(
                fixture = %outcome.name,
                passed = outcome.passed(),
                "fixture checked"
            );
            outcome
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Fixture {
        Fixture {
            name: "demo".to_string(),
            values: vec![1, 2, 3, 4, 5],
            expected: vec![1, 2, 3, 4, 5],
            expected_hash: Some(
                "3cb3a9eeab2ed7ce653a4991a0ddca3828a20a38b8587e0f6535f517f52e2536".to_string(),
            ),
        }
    }

    #[test]
    fn demo_fixture_passes() {
        let outcome = check_fixture(&demo(), &TraversalMode::ALL);
        assert!(outcome.passed(), "{:?}", outcome.failures);
        assert_eq!(outcome.hash, demo().expected_hash.unwrap());
    }

    #[test]
    fn wrong_expectation_fails_every_mode() {
        let mut fixture = demo();
        fixture.expected = vec![5, 4, 3, 2, 1];
        fixture.expected_hash = None;
        let outcome = check_fixture(&fixture, &TraversalMode::ALL);
        assert_eq!(outcome.failures.len(), 3);
    }

    #[test]
    fn wrong_hash_is_reported() {
        let mut fixture = demo();
        fixture.expected_hash = Some("00".to_string());
        let outcome = check_fixture(&fixture, &[TraversalMode::Callback]);
        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].contains("hash mismatch"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"[{"name":"x","values":[],"expected":[],"extra":1}]"#;
        assert!(serde_json::from_str::<Vec<Fixture>>(json).is_err());
    }
}
