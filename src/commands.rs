use std::path::Path;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use hashsim::{generator, measure, output, pipeline};

/// Print `data` as pretty JSON if `json` is true, otherwise call `human_fmt`.
fn output<T: Serialize>(data: &T, json: bool, human_fmt: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        human_fmt(data);
    }
    Ok(())
}

/// Time single-hash computation for the available KDF backends.
pub fn cmd_measure(repeats: Option<u32>, json: bool) -> Result<()> {
    let report = measure::run(repeats)?;

    output(&report, json, |report| {
        for timing in &report.timings {
            println!(
                "{label}: mean {mean:.3} ms (sd {sd:.3}, n={n})",
                label = timing.label,
                mean = timing.mean_ms,
                sd = timing.std_ms,
                n = timing.repeats,
            );
        }
        for missing in &report.missing {
            println!("{} not available in this build. {}", missing.scheme, missing.hint);
        }
    })
}

#[derive(Debug, Serialize)]
struct SimulateResult {
    passwords: usize,
    dictionary_entries: usize,
    trials: usize,
    summary_groups: usize,
    out_dir: String,
}

/// Run the crack-likelihood simulation end to end and write all
/// artifacts.
pub fn cmd_simulate(out: &str, passwords: usize, seed: u64, json: bool) -> Result<()> {
    let out_dir = Path::new(out);
    let mut rng = StdRng::seed_from_u64(seed);

    let records = generator::generate_passwords(passwords, &mut rng);
    let dictionary = generator::build_dictionary();
    info!(
        passwords = records.len(),
        dictionary = dictionary.len(),
        seed,
        "generated simulation inputs"
    );

    let trials = pipeline::run_trials(&records, &dictionary, &mut rng);
    let summary = pipeline::summarize(&trials);

    output::write_all(out_dir, &records, &dictionary, &trials, &summary)?;

    let result = SimulateResult {
        passwords: records.len(),
        dictionary_entries: dictionary.len(),
        trials: trials.len(),
        summary_groups: summary.len(),
        out_dir: out.to_string(),
    };
    output(&result, json, |r| {
        println!("Simulated {} trials over {} passwords", r.trials, r.passwords);
        println!(
            "  {} summary groups, artifacts in {}/",
            r.summary_groups, r.out_dir
        );
    })
}
