//! Synthetic password and attacker-dictionary generation.
//!
//! Both generators are deterministic for a given RNG state; the caller
//! constructs the RNG from a seed and passes it down, so reruns with the
//! same seed reproduce identical records.

use std::collections::HashSet;

use rand::Rng;

use crate::types::{DictSize, PasswordRecord, Strength};

/// Base words for the weak branch. The same words (with their common
/// suffix variants) seed the attacker dictionary, so weak passwords are
/// frequently dictionary hits.
const WEAK_BASES: [&str; 10] = [
    "password", "123456", "qwerty", "letmein", "welcome", "admin", "iloveyou", "sunshine",
    "monkey", "dragon",
];

const MEDIUM_BASES: [&str; 7] = [
    "football", "baseball", "computer", "coffee", "iloveu", "flower", "purple",
];
const MEDIUM_SUFFIXES: [&str; 5] = ["2020", "!", "$", "123", "_"];
const MEDIUM_TAILS: [&str; 3] = ["1", "99", "x"];

const STRONG_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_=+";

fn pick<'a>(rng: &mut impl Rng, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

/// Generate `n` password records.
///
/// Branch policy: with probability 0.5 a weak base word plus a numeric
/// suffix (label `weak`); with probability 0.35 a medium base word plus a
/// symbol/number suffix pair (label `medium`); otherwise 12-20 random
/// characters from a 76-char alphabet (label `strong`). Ids are sequence
/// positions. No error conditions.
pub fn generate_passwords(n: usize, rng: &mut impl Rng) -> Vec<PasswordRecord> {
    (0..n)
        .map(|i| {
            let r: f64 = rng.gen();
            let (password, strength) = if r < 0.5 {
                let base = pick(rng, &WEAK_BASES);
                let suffix = rng.gen_range(0..=999);
                (format!("{base}{suffix}"), Strength::Weak)
            } else if r < 0.85 {
                let base = pick(rng, &MEDIUM_BASES);
                let suffix = pick(rng, &MEDIUM_SUFFIXES);
                let tail = pick(rng, &MEDIUM_TAILS);
                (format!("{base}{suffix}{tail}"), Strength::Medium)
            } else {
                let len = rng.gen_range(12..=20);
                let password = (0..len)
                    .map(|_| STRONG_ALPHABET[rng.gen_range(0..STRONG_ALPHABET.len())] as char)
                    .collect();
                (password, Strength::Strong)
            };
            PasswordRecord {
                id: i as u32,
                password,
                strength,
            }
        })
        .collect()
}

/// Seed words known to the attacker: the weak bases plus the medium
/// bases.
const DICT_SEEDS: [&str; 17] = [
    "password", "123456", "qwerty", "letmein", "welcome", "admin", "iloveyou", "sunshine",
    "monkey", "dragon", "football", "baseball", "computer", "coffee", "flower", "purple",
    "iloveu",
];

/// Suffixes the attacker appends to every seed word.
const DICT_SUFFIXES: [&str; 3] = ["123", "2020", "!"];

/// Synthetic filler entries padding the master list out to realistic
/// dictionary sizes.
const FILLER_WORDS: usize = 5_000;

/// Deduplicated attacker word list with a fixed insertion order: seed
/// words, then suffixed variants, then filler words. The small/large
/// attacker dictionaries are prefixes of this list, so their contents
/// are stable across runs.
#[derive(Debug, Clone)]
pub struct AttackerDictionary {
    entries: Vec<String>,
}

impl AttackerDictionary {
    /// Full entry list, in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Membership set over the prefix a given attacker size can afford.
    pub fn lookup(&self, size: DictSize) -> HashSet<&str> {
        let n = size.entries().min(self.entries.len());
        self.entries[..n].iter().map(String::as_str).collect()
    }
}

/// Build the master attacker dictionary. Pure and deterministic: no RNG
/// is involved, only the fixed seed-word order.
pub fn build_dictionary() -> AttackerDictionary {
    let mut entries = Vec::with_capacity(DICT_SEEDS.len() * (1 + DICT_SUFFIXES.len()) + FILLER_WORDS);
    let mut seen = HashSet::new();

    {
        let mut add = |word: String| {
            if seen.insert(word.clone()) {
                entries.push(word);
            }
        };

        for seed in DICT_SEEDS {
            add(seed.to_string());
        }
        for seed in DICT_SEEDS {
            for suffix in DICT_SUFFIXES {
                add(format!("{seed}{suffix}"));
            }
        }
        for i in 0..FILLER_WORDS {
            add(format!("word{i}"));
        }
    }

    AttackerDictionary { entries }
}
