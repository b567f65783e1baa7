//! End-to-end artifact check for the simulation pipeline.
//!
//! Runs a small simulation into a temp directory and verifies the
//! artifact set, table shapes, aggregation identities, and that equal
//! seeds reproduce identical files.
//!
//! Run with: `cargo test --test simulation_artifacts`

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use hashsim::generator::{build_dictionary, generate_passwords};
use hashsim::output::write_all;
use hashsim::pipeline::{run_trials, summarize};

const ARTIFACTS: [&str; 6] = [
    "passwords.csv",
    "dictionary.txt",
    "results.csv",
    "summary.csv",
    "hash_time_by_algo.svg",
    "cracked_rate_by_algo.svg",
];

fn run_into(dir: &Path, n: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let passwords = generate_passwords(n, &mut rng);
    let dictionary = build_dictionary();
    let trials = run_trials(&passwords, &dictionary, &mut rng);
    let summary = summarize(&trials);
    write_all(dir, &passwords, &dictionary, &trials, &summary).expect("write artifacts");
}

#[test]
fn writes_expected_artifacts() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let n = 50;
    run_into(tmp.path(), n, 42);

    for name in ARTIFACTS {
        assert!(tmp.path().join(name).exists(), "missing artifact {name}");
    }

    let passwords = fs::read_to_string(tmp.path().join("passwords.csv")).expect("passwords.csv");
    let mut lines = passwords.lines();
    assert_eq!(lines.next(), Some("id,password,strength"));
    assert_eq!(lines.count(), n);

    let results = fs::read_to_string(tmp.path().join("results.csv")).expect("results.csv");
    let mut lines = results.lines();
    assert_eq!(
        lines.next(),
        Some("algorithm,param,salted,dict,strength,hash_time_ms,cracked")
    );
    assert_eq!(lines.count(), 12 * 2 * 2 * n);

    let dictionary = fs::read_to_string(tmp.path().join("dictionary.txt")).expect("dictionary.txt");
    assert!(dictionary.lines().count() > 4_000);
    assert!(dictionary.lines().any(|w| w == "password"));
}

#[test]
fn summary_rows_are_internally_consistent() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let n = 40;
    run_into(tmp.path(), n, 7);

    let summary = fs::read_to_string(tmp.path().join("summary.csv")).expect("summary.csv");
    let mut lines = summary.lines();
    assert_eq!(
        lines.next(),
        Some("algorithm,param,salted,dict,total,cracked_sum,cracked_rate,avg_hash_time_ms")
    );

    let mut rows = 0;
    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 8, "unexpected row shape: {line}");

        let total: u64 = fields[4].parse().expect("total");
        let cracked_sum: u64 = fields[5].parse().expect("cracked_sum");
        let cracked_rate: f64 = fields[6].parse().expect("cracked_rate");

        // Each group sees every password exactly once.
        assert_eq!(total, n as u64);
        assert_eq!(cracked_rate, cracked_sum as f64 / total as f64);
        rows += 1;
    }
    assert_eq!(rows, 12 * 4);
}

#[test]
fn same_seed_reproduces_identical_artifacts() {
    let a = tempfile::tempdir().expect("tempdir");
    let b = tempfile::tempdir().expect("tempdir");
    run_into(a.path(), 30, 123);
    run_into(b.path(), 30, 123);

    for name in ARTIFACTS {
        let left = fs::read(a.path().join(name)).expect("left artifact");
        let right = fs::read(b.path().join(name)).expect("right artifact");
        assert_eq!(left, right, "artifact {name} differs across equal-seed runs");
    }
}

#[test]
fn reruns_overwrite_in_place() {
    let tmp = tempfile::tempdir().expect("tempdir");
    run_into(tmp.path(), 20, 1);
    let first = fs::read_to_string(tmp.path().join("passwords.csv")).expect("first run");

    run_into(tmp.path(), 10, 2);
    let second = fs::read_to_string(tmp.path().join("passwords.csv")).expect("second run");

    assert_ne!(first, second);
    assert_eq!(second.lines().count(), 1 + 10);
}
