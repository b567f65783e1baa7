//! Closed-form cost and crack-likelihood models.
//!
//! Everything in this module is synthetic. `hash_time_ms` is a stand-in
//! with believable orders of magnitude, not a measurement (the `measure`
//! module does real timing), and the probability constants below are
//! illustrative model inputs with no empirical grounding. None of this
//! says anything about real-world cracking times.

use std::collections::HashSet;

use crate::types::{Digest, PasswordRecord, Scheme, Strength};

/// Base crack probability for a dictionary-matched password under a fast
/// unsalted digest, by strength.
pub const FAST_HIT_WEAK: f64 = 0.95;
pub const FAST_HIT_MEDIUM: f64 = 0.70;
pub const FAST_HIT_STRONG: f64 = 0.20;

/// Dictionary-hit decay for the iterated family: starts at the scale
/// factor at the baseline iteration count and decays exponentially per
/// iteration above it.
pub const ITERATED_HIT_SCALE: f64 = 0.9;
pub const ITERATED_DECAY_PER_ITER: f64 = 0.000_04;
pub const ITERATED_BASELINE_ITERS: f64 = 1_000.0;

/// Dictionary-hit decay for the adaptive-cost family: geometric in the
/// cost factor above the baseline cost.
pub const ADAPTIVE_HIT_SCALE: f64 = 0.9;
pub const ADAPTIVE_DECAY_PER_COST: f64 = 0.85;
pub const ADAPTIVE_BASELINE_COST: u32 = 8;

/// Dictionary-hit decay for the memory-hard family: geometric in
/// log2(memory).
pub const MEMORY_HIT_SCALE: f64 = 0.8;
pub const MEMORY_DECAY_PER_LOG2: f64 = 0.9;

/// Base probability when the password is absent from the dictionary,
/// keyed only by strength.
pub const MISS_WEAK: f64 = 0.05;
pub const MISS_MEDIUM: f64 = 0.02;
pub const MISS_STRONG: f64 = 0.001;

/// Salt damping factors. Salting defeats precomputed-table attacks more
/// than per-password brute force, so the fast digests are damped harder
/// than the slow schemes.
pub const SALT_DAMPING_FAST: f64 = 0.4;
pub const SALT_DAMPING_SLOW: f64 = 0.7;

/// Believable single-hash cost in milliseconds for one configuration.
///
/// Closed-form stand-in, not a measured value: constant for the fast
/// digests, linear in iterations, exponential in the cost factor,
/// logarithmic in memory. Use `measure` for real numbers.
pub fn hash_time_ms(scheme: &Scheme) -> f64 {
    match scheme {
        Scheme::FastDigest(Digest::Md5) => 0.05,
        Scheme::FastDigest(Digest::Sha1) => 0.08,
        Scheme::FastDigest(Digest::Sha256) => 0.12,
        Scheme::Iterated { iterations } => 0.000_02 * f64::from(*iterations),
        Scheme::AdaptiveCost { cost } => 2.0_f64.powi(*cost as i32 - 6) * 1.2,
        Scheme::MemoryHard { mem_kib } => 0.5 * (f64::from(*mem_kib) + 1.0).log2(),
    }
}

/// Canonical form an attacker tests alongside the raw string: lowercase
/// with non-alphanumerics stripped.
pub fn normalize(password: &str) -> String {
    password
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Model the likelihood that an offline dictionary attacker recovers
/// `record` under `scheme`.
///
/// Membership is tested on both the raw and the normalized form. Hits
/// start from a family-specific base that decays with the scheme
/// parameter (or, for fast digests, with strength); misses fall back to
/// a small strength-keyed floor. Salting multiplies by a damping factor
/// below one. The result is clamped to [0, 1] and is a probability, not
/// a verdict: pair it with exactly one uniform draw via
/// [`sample_outcome`].
///
/// Pure: the same inputs always yield the same value.
pub fn crack_probability(
    record: &PasswordRecord,
    scheme: &Scheme,
    salted: bool,
    dictionary: &HashSet<&str>,
) -> f64 {
    let normalized = normalize(&record.password);
    let in_dict = dictionary.contains(record.password.as_str())
        || dictionary.contains(normalized.as_str());

    let base = if in_dict {
        match scheme {
            Scheme::FastDigest(_) => match record.strength {
                Strength::Weak => FAST_HIT_WEAK,
                Strength::Medium => FAST_HIT_MEDIUM,
                Strength::Strong => FAST_HIT_STRONG,
            },
            Scheme::Iterated { iterations } => {
                let above = f64::from(*iterations) - ITERATED_BASELINE_ITERS;
                ITERATED_HIT_SCALE * (-ITERATED_DECAY_PER_ITER * above).exp()
            }
            Scheme::AdaptiveCost { cost } => {
                ADAPTIVE_HIT_SCALE
                    * ADAPTIVE_DECAY_PER_COST.powi(*cost as i32 - ADAPTIVE_BASELINE_COST as i32)
            }
            Scheme::MemoryHard { mem_kib } => {
                MEMORY_HIT_SCALE * MEMORY_DECAY_PER_LOG2.powf((f64::from(*mem_kib) + 1.0).log2())
            }
        }
    } else {
        match record.strength {
            Strength::Weak => MISS_WEAK,
            Strength::Medium => MISS_MEDIUM,
            Strength::Strong => MISS_STRONG,
        }
    };

    let damped = if salted {
        let damping = match scheme {
            Scheme::FastDigest(_) => SALT_DAMPING_FAST,
            _ => SALT_DAMPING_SLOW,
        };
        base * damping
    } else {
        base
    };

    damped.clamp(0.0, 1.0)
}

/// Decide a trial's boolean outcome from one uniform draw in [0, 1).
///
/// The outcome is sampled exactly once per trial and stored with it;
/// downstream code must not re-derive the boolean from a retained
/// probability.
pub fn sample_outcome(probability: f64, draw: f64) -> bool {
    draw < probability
}
