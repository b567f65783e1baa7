//! Trial construction and aggregation.
//!
//! Data flows one way: generated passwords and the dictionary go in,
//! a flat trial table comes out, and the summary is a pure reduction
//! over that table. Nothing here reads back its own output.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;

use crate::generator::AttackerDictionary;
use crate::model;
use crate::types::{DictSize, PasswordRecord, Scheme, SummaryRecord, TrialOutcome};

/// Evaluate every (configuration x salting x dictionary x password)
/// combination, in that nesting order.
///
/// Each trial consumes exactly one uniform draw, taken at the moment the
/// trial is evaluated, so the row count and RNG consumption are both
/// deterministic: `configs * 2 * 2 * passwords` rows and draws.
pub fn run_trials(
    passwords: &[PasswordRecord],
    dictionary: &AttackerDictionary,
    rng: &mut impl Rng,
) -> Vec<TrialOutcome> {
    let configs = Scheme::standard_configurations();
    let lookups = [
        (DictSize::Small, dictionary.lookup(DictSize::Small)),
        (DictSize::Large, dictionary.lookup(DictSize::Large)),
    ];

    let mut trials = Vec::with_capacity(configs.len() * 4 * passwords.len());
    for scheme in &configs {
        let hash_time_ms = model::hash_time_ms(scheme);
        for salted in [false, true] {
            for (dict, lookup) in &lookups {
                for record in passwords {
                    let probability = model::crack_probability(record, scheme, salted, lookup);
                    let cracked = model::sample_outcome(probability, rng.gen());
                    trials.push(TrialOutcome {
                        algorithm: scheme.name(),
                        param: scheme.param_label(),
                        salted,
                        dict: *dict,
                        strength: record.strength,
                        hash_time_ms,
                        cracked,
                    });
                }
            }
        }
    }

    debug!(trials = trials.len(), configs = configs.len(), "built trial table");
    trials
}

#[derive(Default)]
struct Group {
    total: u64,
    cracked_sum: u64,
    hash_time_total: f64,
}

/// Reduce the trial table into one row per (algorithm, param, salted,
/// dict) group: count, cracked count, crack rate, mean hash time.
/// Output is sorted by group key. No error states.
pub fn summarize(trials: &[TrialOutcome]) -> Vec<SummaryRecord> {
    let mut groups: BTreeMap<(&str, &str, bool, DictSize), Group> = BTreeMap::new();
    for trial in trials {
        let key = (trial.algorithm, trial.param.as_str(), trial.salted, trial.dict);
        let group = groups.entry(key).or_default();
        group.total += 1;
        group.cracked_sum += u64::from(trial.cracked);
        group.hash_time_total += trial.hash_time_ms;
    }

    groups
        .into_iter()
        .map(|((algorithm, param, salted, dict), group)| SummaryRecord {
            algorithm: algorithm.to_string(),
            param: param.to_string(),
            salted,
            dict,
            total: group.total,
            cracked_sum: group.cracked_sum,
            cracked_rate: group.cracked_sum as f64 / group.total as f64,
            avg_hash_time_ms: group.hash_time_total / group.total as f64,
        })
        .collect()
}
