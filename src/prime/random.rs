//! Uniform random big integers
//!
//! Sampling primitives for the prime search: fixed-bit-width random values
//! assembled limb by limb from the CSPRNG, and range-constrained values by
//! rejection sampling.

use crate::bignum::BigNum;
use crate::rng::Csprng;
use std::cmp::Ordering;

/// Draws a non-negative random value of at most `bits` bits.
///
/// Whole limbs are filled from the generator; the remaining `bits mod 32`
/// high bits are a masked sample kept only when nonzero. The top bit is
/// **not** forced, so the result may be shorter than `bits` bits.
pub fn random_bits(rng: &mut Csprng, bits: usize) -> BigNum {
    let mut value = BigNum::new();

    for _ in 0..bits / 32 {
        value.limbs.push(rng.next_u32());
    }

    let partial_bits = bits % 32;
    if partial_bits > 0 {
        let top = rng.next_u32() & ((1u32 << partial_bits) - 1);
        if top != 0 {
            value.limbs.push(top);
        }
    }

    value.normalize();
    value
}

/// Draws a random value in `[low, high)` by magnitude.
///
/// Each attempt picks a bit count uniformly from
/// `[bit_len(low), bit_len(high)]`, draws a value of that width, and
/// rejects it when it falls outside the range.
///
/// # Panics
/// Panics when the range is empty (`low ≥ high` by magnitude).
pub fn random_in_range(rng: &mut Csprng, low: &BigNum, high: &BigNum) -> BigNum {
    assert!(
        low.unsigned_cmp(high) == Ordering::Less,
        "empty sampling range"
    );

    let low_bits = low.bit_len();
    let high_bits = high.bit_len();
    let spread = (high_bits - low_bits + 1) as u32;

    loop {
        let bits = low_bits + (rng.next_u32() % spread) as usize;
        let candidate = random_bits(rng, bits);

        if low.unsigned_cmp(&candidate) != Ordering::Greater
            && high.unsigned_cmp(&candidate) == Ordering::Greater
        {
            return candidate;
        }
    }
}
