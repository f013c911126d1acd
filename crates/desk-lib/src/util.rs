//! ID generation utilities.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Number of base36 characters after the prefix.
///
/// 36^12 is about 4.7e18, so even a long-lived desk that has issued
/// millions of IDs has a negligible chance of handing one out twice.
pub const ID_HASH_LEN: usize = 12;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Inputs that make an ID seed unique even when two issues share a
/// timestamp: the per-store sequence number always differs.
#[derive(Debug, Clone, Copy)]
pub struct IdSeed<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub created_at: DateTime<Utc>,
    pub sequence: u64,
}

/// Generate an issue ID `<prefix>-<12 base36 chars>` for which `exists`
/// returns false.
///
/// The seed also carries the process id, so a restarted process whose
/// sequence counter starts over does not replay an earlier seed.
pub fn generate_id<F>(prefix: &str, seed: IdSeed<'_>, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    for nonce in 0_u64.. {
        let id = format!("{prefix}-{}", compute_id_hash(&seed_string(seed, nonce)));
        if !exists(&id) {
            return id;
        }
        tracing::trace!(%id, "ID collision, retrying");
    }
    unreachable!("nonce sequence is unbounded")
}

fn seed_string(seed: IdSeed<'_>, nonce: u64) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}",
        seed.title,
        seed.description,
        seed.created_at.timestamp_nanos_opt().unwrap_or(0),
        seed.sequence,
        std::process::id(),
        nonce
    )
}

/// Low-order base36 digits of the first 128 bits of SHA-256.
///
/// Taking digits from the low end keeps every position uniform; the
/// leading digit of a fixed-width number is not.
#[allow(clippy::cast_possible_truncation)]
fn compute_id_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut bytes = [0_u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    let mut num = u128::from_be_bytes(bytes);

    let mut out = String::with_capacity(ID_HASH_LEN);
    for _ in 0..ID_HASH_LEN {
        out.push(char::from(ALPHABET[(num % 36) as usize]));
        num /= 36;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn seed(sequence: u64, created_at: DateTime<Utc>) -> IdSeed<'static> {
        IdSeed {
            title: "Printer jam",
            description: "Tray 2 stuck",
            created_at,
            sequence,
        }
    }

    #[test]
    fn test_generate_id_format() {
        let id = generate_id("iss", seed(0, Utc::now()), |_| false);
        let hash = id.strip_prefix("iss-").unwrap();
        assert_eq!(hash.len(), ID_HASH_LEN);
        assert!(hash.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_same_timestamp_different_sequence_differs() {
        let now = Utc::now();
        let a = generate_id("iss", seed(1, now), |_| false);
        let b = generate_id("iss", seed(2, now), |_| false);
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_id_collision_handling() {
        let mut generated = HashSet::new();
        let now = Utc::now();
        let id1 = generate_id("iss", seed(0, now), |id| generated.contains(id));
        generated.insert(id1.clone());
        let id2 = generate_id("iss", seed(0, now), |id| generated.contains(id));
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_leading_character_is_spread() {
        let now = Utc::now();
        let mut first: HashMap<char, usize> = HashMap::new();
        for sequence in 0..3_600 {
            let id = generate_id("iss", seed(sequence, now), |_| false);
            let c = id.chars().nth("iss-".len()).unwrap();
            *first.entry(c).or_default() += 1;
        }
        // About 100 per character when uniform.
        assert_eq!(first.len(), 36, "{first:?}");
        assert!(first.values().all(|&n| n < 250), "{first:?}");
    }
}
