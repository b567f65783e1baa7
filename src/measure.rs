//! Wall-clock timing of real password-hashing primitives.
//!
//! This is the one place in the crate that computes actual hashes. It
//! times single-hash cost (useful for picking KDF parameters) and does
//! no cracking of any kind. The optional backends are compile-time
//! features; their presence is probed once into plain data, and a build
//! without one reports an installation hint instead of failing.

use std::time::Instant;

use anyhow::{anyhow, Result};
use hmac::Hmac;
use serde::Serialize;
use sha2::Sha256;
use tracing::debug;

/// Input hashed by every measurement.
const SAMPLE_PASSWORD: &[u8] = b"password123!";
const SAMPLE_SALT: &[u8] = b"saltsaltsaltsalt";

/// Which optional backends this build carries. Probed once at startup;
/// the rest of the program consumes the result as data and never handles
/// a missing backend at a call site.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Capabilities {
    pub bcrypt: bool,
    pub argon2: bool,
}

impl Capabilities {
    pub fn probe() -> Self {
        Self {
            bcrypt: cfg!(feature = "bcrypt"),
            argon2: cfg!(feature = "argon2"),
        }
    }
}

/// Mean and spread of single-hash wall-clock cost for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timing {
    pub label: String,
    pub mean_ms: f64,
    pub std_ms: f64,
    pub repeats: u32,
}

/// A scheme this build cannot measure, with the hint shown instead of a
/// measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingCapability {
    pub scheme: &'static str,
    pub hint: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasureReport {
    pub timings: Vec<Timing>,
    pub missing: Vec<MissingCapability>,
}

/// Time `f` over `repeats` invocations. Returns mean and sample standard
/// deviation in milliseconds; the deviation is 0.0 with fewer than two
/// samples.
fn time_func(repeats: u32, mut f: impl FnMut() -> Result<()>) -> Result<(f64, f64)> {
    let mut samples = Vec::with_capacity(repeats as usize);
    for _ in 0..repeats {
        let start = Instant::now();
        f()?;
        samples.push(start.elapsed().as_secs_f64() * 1_000.0);
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let std = if samples.len() > 1 {
        (samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
    } else {
        0.0
    };
    Ok((mean, std))
}

fn time_pbkdf2(iterations: u32, repeats: u32) -> Result<Timing> {
    let (mean_ms, std_ms) = time_func(repeats, || {
        let mut key = [0u8; 32];
        pbkdf2::pbkdf2::<Hmac<Sha256>>(SAMPLE_PASSWORD, SAMPLE_SALT, iterations, &mut key)
            .map_err(|e| anyhow!("pbkdf2: {e}"))?;
        std::hint::black_box(key);
        Ok(())
    })?;
    Ok(Timing {
        label: format!("PBKDF2-HMAC-SHA256 ({iterations} iters)"),
        mean_ms,
        std_ms,
        repeats,
    })
}

#[cfg(feature = "bcrypt")]
fn time_bcrypt(cost: u32, repeats: u32) -> Result<Timing> {
    let (mean_ms, std_ms) = time_func(repeats, || {
        let hashed = bcrypt::hash("password123!", cost)?;
        std::hint::black_box(hashed);
        Ok(())
    })?;
    Ok(Timing {
        label: format!("bcrypt (cost={cost})"),
        mean_ms,
        std_ms,
        repeats,
    })
}

#[cfg(feature = "argon2")]
fn time_argon2(mem_kib: u32, time_cost: u32, repeats: u32) -> Result<Timing> {
    use argon2::{Algorithm, Argon2, Params, Version};

    let params =
        Params::new(mem_kib, time_cost, 1, None).map_err(|e| anyhow!("argon2 params: {e}"))?;
    let hasher = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let (mean_ms, std_ms) = time_func(repeats, || {
        let mut key = [0u8; 32];
        hasher
            .hash_password_into(SAMPLE_PASSWORD, SAMPLE_SALT, &mut key)
            .map_err(|e| anyhow!("argon2: {e}"))?;
        std::hint::black_box(key);
        Ok(())
    })?;
    Ok(Timing {
        label: format!("Argon2id (t={time_cost}, m={mem_kib}KB)"),
        mean_ms,
        std_ms,
        repeats,
    })
}

/// Measure every primitive this build carries.
///
/// Default repeat counts shrink for the slower schemes, as a single
/// sample already takes tens of milliseconds there; `repeats` overrides
/// all of them.
pub fn run(repeats: Option<u32>) -> Result<MeasureReport> {
    let caps = Capabilities::probe();
    debug!(bcrypt = caps.bcrypt, argon2 = caps.argon2, "probed hashing backends");

    let mut timings = vec![
        time_pbkdf2(1_000, repeats.unwrap_or(10))?,
        time_pbkdf2(50_000, repeats.unwrap_or(5))?,
    ];
    let mut missing = Vec::new();

    if caps.bcrypt {
        #[cfg(feature = "bcrypt")]
        timings.push(time_bcrypt(12, repeats.unwrap_or(5))?);
    } else {
        missing.push(MissingCapability {
            scheme: "bcrypt",
            hint: "rebuild with: cargo build --features bcrypt",
        });
    }

    if caps.argon2 {
        #[cfg(feature = "argon2")]
        timings.push(time_argon2(1_024, 2, repeats.unwrap_or(5))?);
    } else {
        missing.push(MissingCapability {
            scheme: "Argon2",
            hint: "rebuild with: cargo build --features argon2",
        });
    }

    Ok(MeasureReport { timings, missing })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_func_single_sample_has_zero_std() {
        let (mean, std) = time_func(1, || Ok(())).expect("timing closure");
        assert!(mean >= 0.0);
        assert_eq!(std, 0.0);
    }

    #[test]
    fn time_func_propagates_closure_errors() {
        let result = time_func(3, || Err(anyhow!("boom")));
        assert!(result.is_err());
    }

    #[test]
    fn pbkdf2_timing_is_positive() {
        let timing = time_pbkdf2(100, 3).expect("pbkdf2 measurement");
        assert!(timing.mean_ms > 0.0);
        assert_eq!(timing.repeats, 3);
        assert!(timing.label.contains("100 iters"));
    }

    #[test]
    fn probe_matches_compiled_features() {
        let caps = Capabilities::probe();
        assert_eq!(caps.bcrypt, cfg!(feature = "bcrypt"));
        assert_eq!(caps.argon2, cfg!(feature = "argon2"));
    }

    #[test]
    fn report_covers_every_scheme_one_way_or_the_other() {
        let report = run(Some(1)).expect("measurement run");
        // PBKDF2 is always measured twice; bcrypt and Argon2 each show up
        // as either a timing or a hint.
        assert_eq!(report.timings.len() + report.missing.len(), 4);
        assert!(report.timings.iter().filter(|t| t.label.starts_with("PBKDF2")).count() == 2);
    }
}
