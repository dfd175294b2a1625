//! ID generation and timestamp utilities.

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};

/// Prefix for every generated bug ID.
pub const ID_PREFIX: &str = "bug";

// ============================================================================
// ID Generation
// ============================================================================

/// Generate a unique bug ID.
///
/// SHA256 over the bug's content and creation instant, base36 encoded.
/// The `exists` closure checks for collisions; length grows with the
/// collection so collisions stay unlikely.
pub fn generate_id<F>(
    title: &str,
    description: &str,
    creator: &str,
    created_at: DateTime<Utc>,
    bug_count: usize,
    exists: F,
) -> String
where
    F: Fn(&str) -> bool,
{
    let mut length = optimal_hash_length(bug_count);

    loop {
        for nonce in 0..10 {
            let seed = id_seed(title, description, creator, created_at, nonce);
            let id = format!("{ID_PREFIX}-{}", compute_id_hash(&seed, length));
            if !exists(&id) {
                return id;
            }
        }

        if length < 8 {
            length += 1;
        } else {
            let mut nonce = 10u32;
            loop {
                let seed = id_seed(title, description, creator, created_at, nonce);
                let id = format!("{ID_PREFIX}-{}", compute_id_hash(&seed, 12));
                if !exists(&id) {
                    return id;
                }
                nonce += 1;
            }
        }
    }
}

/// Smallest hash length whose birthday-collision probability stays below 25%.
#[must_use]
#[allow(clippy::cast_precision_loss)]
fn optimal_hash_length(bug_count: usize) -> usize {
    let n = bug_count as f64;
    let max_prob = 0.25;

    for (len, exp) in [(4_usize, 4_i32), (5, 5), (6, 6), (7, 7), (8, 8)] {
        let space = 36_f64.powi(exp);
        let prob = 1.0 - (-n * n / (2.0 * space)).exp();
        if prob < max_prob {
            return len;
        }
    }
    8
}

fn id_seed(
    title: &str,
    description: &str,
    creator: &str,
    created_at: DateTime<Utc>,
    nonce: u32,
) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        title,
        description,
        creator,
        created_at.timestamp_nanos_opt().unwrap_or(0),
        nonce
    )
}

fn compute_id_hash(input: &str, length: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();

    let mut num = 0u64;
    for &byte in result.iter().take(8) {
        num = (num << 8) | u64::from(byte);
    }

    let mut encoded = base36_encode(num);
    if encoded.len() < length {
        encoded = format!("{encoded:0>length$}");
    }
    encoded.chars().take(length).collect()
}

fn base36_encode(mut num: u64) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if num == 0 {
        return "0".to_string();
    }
    let mut chars = Vec::new();
    while num > 0 {
        chars.push(ALPHABET[(num % 36) as usize] as char);
        num /= 36;
    }
    chars.into_iter().rev().collect()
}

// ============================================================================
// Timestamps
// ============================================================================

/// The current instant, forced strictly after `previous`.
///
/// Guarantees `updated_at` moves forward even when the clock resolution
/// would otherwise return an equal value.
#[must_use]
pub fn advance_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
