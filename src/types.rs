use serde::Serialize;

/// Strength label assigned by the password generator.
///
/// The label records which generation branch produced the password; it is
/// never re-derived from the password text afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl std::str::FromStr for Strength {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "weak" => Ok(Self::Weak),
            "medium" => Ok(Self::Medium),
            "strong" => Ok(Self::Strong),
            _ => Err(anyhow::anyhow!("unknown strength label: '{s}'")),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Members of the fast unsalted digest family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Digest {
    Md5,
    Sha1,
    Sha256,
}

impl Digest {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
        }
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One hashing scheme together with the parameter that positions it on
/// its cost curve.
///
/// Each variant carries its own parameter payload and is dispatched by
/// pattern match; there are no string-keyed parameter maps anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// General-purpose unsalted digest (MD5, SHA1, SHA256).
    FastDigest(Digest),
    /// Iterated key derivation, cost linear in the iteration count
    /// (PBKDF2-style).
    Iterated { iterations: u32 },
    /// Adaptive scheme whose cost doubles with the cost factor
    /// (bcrypt-style).
    AdaptiveCost { cost: u32 },
    /// Memory-hard scheme whose cost tracks configured memory
    /// (Argon2-style).
    MemoryHard { mem_kib: u32 },
}

impl Scheme {
    /// Scheme name as it appears in the result tables.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FastDigest(digest) => digest.as_str(),
            Self::Iterated { .. } => "PBKDF2",
            Self::AdaptiveCost { .. } => "bcrypt",
            Self::MemoryHard { .. } => "Argon2",
        }
    }

    /// Parameter label for the result tables. Fast digests take no
    /// parameter and render as an empty string.
    pub fn param_label(&self) -> String {
        match self {
            Self::FastDigest(_) => String::new(),
            Self::Iterated { iterations } => format!("iters={iterations}"),
            Self::AdaptiveCost { cost } => format!("cost={cost}"),
            Self::MemoryHard { mem_kib } => format!("mem={mem_kib}KB"),
        }
    }

    /// The fixed set of configuration points the simulation evaluates:
    /// three fast digests, then three parameter steps each for the
    /// iterated, adaptive-cost, and memory-hard families.
    pub fn standard_configurations() -> Vec<Scheme> {
        let mut configs = vec![
            Self::FastDigest(Digest::Md5),
            Self::FastDigest(Digest::Sha1),
            Self::FastDigest(Digest::Sha256),
        ];
        configs.extend([1_000, 10_000, 50_000].map(|iterations| Self::Iterated { iterations }));
        configs.extend([8, 10, 12].map(|cost| Self::AdaptiveCost { cost }));
        configs.extend([32, 256, 1_024].map(|mem_kib| Self::MemoryHard { mem_kib }));
        configs
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let param = self.param_label();
        if param.is_empty() {
            f.write_str(self.name())
        } else {
            write!(f, "{} {param}", self.name())
        }
    }
}

/// Attacker dictionary size variants. Both are prefixes of the master
/// word list, so the small dictionary is a strict subset of the large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DictSize {
    Small,
    Large,
}

impl DictSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }

    /// Prefix length of the master dictionary this variant exposes.
    pub fn entries(&self) -> usize {
        match self {
            Self::Small => 500,
            Self::Large => 4_000,
        }
    }
}

impl std::fmt::Display for DictSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated password. Immutable once produced; everything downstream
/// reads it and nothing writes it back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordRecord {
    pub id: u32,
    pub password: String,
    pub strength: Strength,
}

/// One evaluation of (password x scheme configuration x salting x
/// dictionary).
///
/// `cracked` is sampled once from a single uniform draw against the
/// clamped probability and stored; it is not a threshold function over a
/// retained probability and must not be re-derived after the fact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialOutcome {
    pub algorithm: &'static str,
    pub param: String,
    pub salted: bool,
    pub dict: DictSize,
    pub strength: Strength,
    pub hash_time_ms: f64,
    pub cracked: bool,
}

/// Aggregated view of one (algorithm, param, salted, dict) group.
/// Derived from the trial table, written once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub algorithm: String,
    pub param: String,
    pub salted: bool,
    pub dict: DictSize,
    pub total: u64,
    pub cracked_sum: u64,
    pub cracked_rate: f64,
    pub avg_hash_time_ms: f64,
}
