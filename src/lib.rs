//! Synthetic password-hashing benchmarks.
//!
//! Two independent pipelines share this library: a timing probe that
//! measures real single-hash cost for a handful of KDF backends, and a
//! probabilistic simulation of password strength versus offline
//! dictionary-cracking success. Nothing in this crate performs real
//! cracking; the simulation runs on closed-form models, not
//! measurements.

pub mod generator;
pub mod measure;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod types;
