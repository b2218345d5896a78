//! Integration tests for seqwalk_runtime.
//!
//! File-backed tests use temporary directories for isolation.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

use seqwalk::{Sequence, TraversalMode};

use seqwalk_runtime::config::{RunConfig, DEMO_VALUES};
use seqwalk_runtime::console;
use seqwalk_runtime::drift;
use seqwalk_runtime::fixtures;
use seqwalk_runtime::replay;
use seqwalk_runtime::RuntimeError;

/// Golden visit log hash of the demo sequence [1, 2, 3, 4, 5].
const GOLDEN_HASH: &str =
    "3cb3a9eeab2ed7ce653a4991a0ddca3828a20a38b8587e0f6535f517f52e2536";

/// Path to the kernel's golden fixtures.
fn golden_fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("seqwalk")
        .join("tests")
        .join("golden")
        .join("sequences.json")
}

// ─────────────────────────────────────────────────────────────
// Test 1: replay_matches_golden_hash
// ─────────────────────────────────────────────────────────────

#[test]
fn replay_matches_golden_hash() {
    let seq = Sequence::from(DEMO_VALUES);
    for mode in TraversalMode::ALL {
        let (log, hash) = replay::replay(&seq, mode);
        assert_eq!(log.to_values(), DEMO_VALUES.to_vec());
        assert_eq!(hash, GOLDEN_HASH, "{} replay does not match golden hash", mode);
    }
}

// ─────────────────────────────────────────────────────────────
// Test 2: console_output_is_one_value_per_visit
// ─────────────────────────────────────────────────────────────

#[test]
fn console_output_is_one_value_per_visit() {
    let seq = Sequence::from(DEMO_VALUES);
    for mode in TraversalMode::ALL {
        let mut out = Vec::new();
        let written = console::emit(&seq, &[mode], &mut out).expect("emit");
        assert_eq!(written, 5);
        assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n3\n4\n5\n");
    }
}

// ─────────────────────────────────────────────────────────────
// Test 3: empty_sequence_has_no_visits
// ─────────────────────────────────────────────────────────────

#[test]
fn empty_sequence_has_no_visits() {
    let seq: Sequence<i64> = Sequence::default();
    let report = drift::compare_modes(&seq);
    assert!(report.equivalent);
    assert!(report.modes.iter().all(|m| m.visits == 0));

    let mut out = Vec::new();
    assert_eq!(console::emit(&seq, &TraversalMode::ALL, &mut out).unwrap(), 0);
    assert!(out.is_empty());
}

// ─────────────────────────────────────────────────────────────
// Test 4: traversal_does_not_alter_sequence
// ─────────────────────────────────────────────────────────────

#[test]
fn traversal_does_not_alter_sequence() {
    let seq = Sequence::new(vec![3i64, -1, 4, 1, -5]);
    let before = seq.clone();
    for mode in TraversalMode::ALL {
        replay::replay(&seq, mode);
        let mut sink = Vec::new();
        console::emit(&seq, &[mode], &mut sink).unwrap();
    }
    assert_eq!(seq, before);
}

// ─────────────────────────────────────────────────────────────
// Test 5: repeated_replay_is_deterministic
// ─────────────────────────────────────────────────────────────

#[test]
fn repeated_replay_is_deterministic() {
    let seq = Sequence::new(vec![8i64, 8, 0, -8]);
    for mode in TraversalMode::ALL {
        drift::verify_determinism(&seq, mode);
        assert_eq!(replay::replay_hash(&seq, mode), replay::replay_hash(&seq, mode));
    }
}

// ─────────────────────────────────────────────────────────────
// Test 6: golden_fixtures_all_pass
// ─────────────────────────────────────────────────────────────

#[test]
fn golden_fixtures_all_pass() {
    let loaded = fixtures::load_fixtures(&golden_fixtures_path()).expect("load fixtures");
    assert!(loaded.len() >= 3);
    let outcomes = fixtures::run_fixtures(&loaded, &TraversalMode::ALL);
    for outcome in &outcomes {
        assert!(outcome.passed(), "{}: {:?}", outcome.name, outcome.failures);
    }
}

// ─────────────────────────────────────────────────────────────
// Test 7: config_loads_from_file
// ─────────────────────────────────────────────────────────────

#[test]
fn config_loads_from_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("seqwalk.json");
    fs::write(
        &path,
        r#"{"modes":["elements","indexed"],"values":[7,6],"log_level":"debug"}"#,
    )
    .unwrap();

    let config = RunConfig::load(&path).expect("load config");
    assert_eq!(
        config.modes,
        vec![TraversalMode::Elements, TraversalMode::Indexed]
    );
    assert_eq!(config.values, vec![7, 6]);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn bad_config_reports_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    match RunConfig::load(&path) {
        Err(RuntimeError::Json { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected JSON error, got {:?}", other),
    }
}

#[test]
fn missing_config_is_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let result = RunConfig::load(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(RuntimeError::Io(_))));
}

// ─────────────────────────────────────────────────────────────
// Test 8: binary end to end
// ─────────────────────────────────────────────────────────────

#[test]
fn binary_prints_demo_for_every_mode() {
    Command::cargo_bin("seqwalk")
        .unwrap()
        .assert()
        .success()
        .stdout("1\n2\n3\n4\n5\n".repeat(3));
}

#[test]
fn binary_honours_config_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("run.json");
    fs::write(&path, r#"{"modes":["callback"],"values":[]}"#).unwrap();

    Command::cargo_bin("seqwalk")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn binary_runs_fixture_harness() {
    let output = Command::cargo_bin("seqwalk")
        .unwrap()
        .arg("--fixtures")
        .arg(golden_fixtures_path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains(&format!("[PASS] demo: hash={}", GOLDEN_HASH)));
    assert!(stdout.contains("Results: 4/4 passed"));
}

#[test]
fn binary_fails_on_invalid_config() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("dup.json");
    fs::write(&path, r#"{"modes":["indexed","indexed"]}"#).unwrap();

    Command::cargo_bin("seqwalk")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure();
}
