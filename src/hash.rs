//! Content hashing shared by `Data` and every `Layout`.

use core::hash::Hasher;
use seahash::SeaHasher;

/// Hash of a single word.
pub fn value(word: u64) -> u64 {
    let mut hasher = SeaHasher::new();
    hasher.write_u64(word);
    hasher.finish()
}

/// Hash of a byte sequence.
pub fn bytes(data: &[u8]) -> u64 {
    let mut hasher = SeaHasher::new();
    hasher.write(data);
    hasher.finish()
}

/// Hash of a word sequence, order-sensitive.
pub fn words(data: &[u64]) -> u64 {
    data.iter().fold(value(data.len() as u64), |h, w| combine(h, value(*w)))
}

pub fn combine(seed: u64, hash: u64) -> u64 {
    seed ^ (hash
        .wrapping_add(0x9e37_79b9_7f4a_7c15)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2))
}
