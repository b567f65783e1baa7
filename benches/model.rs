//! Criterion benchmarks for the generator and probability model.
//!
//! Measures password generation, dictionary construction, single
//! probability evaluations, and a small end-to-end trial sweep.
//!
//! Run with: `cargo bench --bench model`

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use hashsim::generator::{build_dictionary, generate_passwords};
use hashsim::model::crack_probability;
use hashsim::pipeline::run_trials;
use hashsim::types::{DictSize, Digest, PasswordRecord, Scheme, Strength};

fn bench_generation(c: &mut Criterion) {
    c.bench_function("generate_passwords_2000", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            generate_passwords(2_000, &mut rng)
        })
    });

    c.bench_function("build_dictionary", |b| b.iter(build_dictionary));
}

fn bench_probability(c: &mut Criterion) {
    let dictionary = build_dictionary();
    let lookup = dictionary.lookup(DictSize::Large);
    let hit = PasswordRecord {
        id: 0,
        password: "password123".to_string(),
        strength: Strength::Weak,
    };
    let miss = PasswordRecord {
        id: 1,
        password: "Zr8#kL!q2Mn$".to_string(),
        strength: Strength::Strong,
    };

    c.bench_function("crack_probability_hit", |b| {
        b.iter(|| crack_probability(&hit, &Scheme::AdaptiveCost { cost: 10 }, true, &lookup))
    });

    c.bench_function("crack_probability_miss", |b| {
        b.iter(|| crack_probability(&miss, &Scheme::FastDigest(Digest::Sha256), false, &lookup))
    });
}

fn bench_trials(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let passwords = generate_passwords(200, &mut rng);
    let dictionary = build_dictionary();

    c.bench_function("run_trials_200", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(7);
            run_trials(&passwords, &dictionary, &mut rng)
        })
    });
}

criterion_group!(benches, bench_generation, bench_probability, bench_trials);
criterion_main!(benches);
