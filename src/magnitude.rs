//! Unsigned arithmetic on magnitudes stored as little-word-first `u64` sequences.
//!
//! The layouts keep their words as they are, the arithmetic itself goes
//! through `num_bigint::BigUint`. All functions accept non-normalised input
//! (trailing zero words are ignored) and return trimmed output: no trailing
//! zero words, zero is the empty vector. The sign of a value is never stored
//! here, it lives in the owning `Data` cell.

use std::cmp::Ordering;

// used for the actual big number arithmetic
use num_bigint::BigUint;
// gcd and div_rem for BigUint
use num_integer::Integer as _;
use num_traits::Pow;

pub(crate) fn to_big(words: &[u64]) -> BigUint {
    BigUint::new(
        words
            .iter()
            .flat_map(|w| [*w as u32, (*w >> 32) as u32])
            .collect(),
    )
}

pub(crate) fn from_big(value: &BigUint) -> Vec<u64> {
    value.to_u64_digits()
}

pub(crate) fn trim(mut words: Vec<u64>) -> Vec<u64> {
    while words.last() == Some(&0) {
        words.pop();
    }
    words
}

pub(crate) fn significant(words: &[u64]) -> &[u64] {
    let mut len = words.len();
    while len > 0 && words[len - 1] == 0 {
        len -= 1;
    }
    &words[..len]
}

pub(crate) fn is_zero(words: &[u64]) -> bool {
    words.iter().all(|w| *w == 0)
}

pub(crate) fn cmp(a: &[u64], b: &[u64]) -> Ordering {
    let (a, b) = (significant(a), significant(b));
    a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

pub(crate) fn add(a: &[u64], b: &[u64]) -> Vec<u64> {
    from_big(&(to_big(a) + to_big(b)))
}

/// `a - b`, requires `a >= b`.
pub(crate) fn sub(a: &[u64], b: &[u64]) -> Vec<u64> {
    from_big(&(to_big(a) - to_big(b)))
}

pub(crate) fn mul(a: &[u64], b: &[u64]) -> Vec<u64> {
    from_big(&(to_big(a) * to_big(b)))
}

/// Returns `(quotient, remainder)`. The divisor must not be zero.
pub(crate) fn divrem(a: &[u64], b: &[u64]) -> (Vec<u64>, Vec<u64>) {
    let (quotient, remainder) = to_big(a).div_rem(&to_big(b));
    (from_big(&quotient), from_big(&remainder))
}

pub(crate) fn shl(a: &[u64], shift: u64) -> Vec<u64> {
    from_big(&(to_big(a) << shift))
}

pub(crate) fn shr(a: &[u64], shift: u64) -> Vec<u64> {
    from_big(&(to_big(a) >> shift))
}

/// Complements every stored word, the magnitude keeps its word count.
pub(crate) fn not(a: &[u64]) -> Vec<u64> {
    trim(a.iter().map(|w| !w).collect())
}

pub(crate) fn gcd(a: &[u64], b: &[u64]) -> Vec<u64> {
    from_big(&to_big(a).gcd(&to_big(b)))
}

pub(crate) fn pow(base: &[u64], exponent: u64) -> Vec<u64> {
    from_big(&Pow::pow(to_big(base), exponent))
}
