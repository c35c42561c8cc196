use serde::Serialize;

pub const MULTIPLICATIVE_SEED: i32 = 5381;
pub const MULTIPLICATIVE_FACTOR: i32 = 33;

pub const POLYNOMIAL_BASE: u64 = 31;
pub const POLYNOMIAL_MODULUS: u64 = 1_000_000_009;
const NON_LETTER_RANK: u64 = 27;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HashFunction {
    /// `acc = (acc * 33) ^ c` over the characters, starting from 5381.
    #[default]
    Multiplicative,
    /// `sum(rank(c_i) * 31^i) mod 1_000_000_009`, letters ranked 1..=26.
    Polynomial,
}

impl HashFunction {
    /// Home bucket of `key`, always in `0..num_buckets`.
    pub fn bucket_of(&self, key: &str, num_buckets: usize) -> usize {
        let num_buckets = num_buckets.max(1) as u64;
        let raw = match self {
            HashFunction::Multiplicative => multiplicative(key) as u64,
            HashFunction::Polynomial => polynomial(key),
        };
        (raw % num_buckets) as usize
    }
}

/// Hash with the default function.
pub fn hash(key: &str, num_buckets: usize) -> usize {
    HashFunction::default().bucket_of(key, num_buckets)
}

fn multiplicative(key: &str) -> u32 {
    let acc = key.chars().fold(MULTIPLICATIVE_SEED, |acc, c| {
        acc.wrapping_mul(MULTIPLICATIVE_FACTOR) ^ c as i32
    });
    acc.unsigned_abs()
}

fn polynomial(key: &str) -> u64 {
    let mut acc = 0;
    let mut power = 1;
    for c in key.chars() {
        acc = (acc + rank(c) * power) % POLYNOMIAL_MODULUS;
        power = (power * POLYNOMIAL_BASE) % POLYNOMIAL_MODULUS;
    }
    acc
}

fn rank(c: char) -> u64 {
    if c.is_ascii_alphabetic() {
        (c.to_ascii_lowercase() as u8 - b'a') as u64 + 1
    } else {
        NON_LETTER_RANK
    }
}

/// How keys are folded before hashing and comparing.
///
/// Insertion, lookup and scan all go through the same policy; mixing two
/// policies between build and query makes keys unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyNormalization {
    #[default]
    Lowercase,
    Exact,
}

impl KeyNormalization {
    pub fn apply(&self, key: &str) -> String {
        match self {
            KeyNormalization::Lowercase => key.to_lowercase(),
            KeyNormalization::Exact => key.to_string(),
        }
    }
}
