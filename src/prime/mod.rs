//! Probabilistic primality and random prime generation
//!
//! This module houses the probable-prime machinery behind RSA key
//! generation:
//!
//! - uniform random big integers of a requested bit width,
//! - a trial-division pre-screen against a fixed table of small primes,
//!   rejecting obvious composites before any modular exponentiation runs,
//! - the Miller–Rabin witness loop, and
//! - a random-prime search, in both a single-threaded form and a
//!   multi-threaded form that races several workers and keeps the first
//!   find.
//!
//! A candidate that survives `t` rounds of Miller–Rabin is composite with
//! probability at most `4^(−t)`; the RSA layer uses `t = 20` by default.
//!
//! ## Threading model
//!
//! The parallel search is the only place in the crate that spawns threads.
//! Workers share exactly two things: an atomic stop flag, written once, and
//! a mutex-guarded result slot, written once. Every worker owns its own
//! OS-seeded generator and all of its candidate values; the winning value
//! moves into the result slot under the mutex, after which the stop flag
//! release makes every other worker wind down. The caller joins all workers
//! before reading the slot.

mod random;

pub use random::{random_bits, random_in_range};

use crate::bignum::BigNum;
use crate::rng::Csprng;
use std::cmp::Ordering;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::thread;

/// Every prime up to and including 401.
///
/// Trial division by this table is cheap compared to a single Miller–Rabin
/// round and filters the overwhelming majority of random candidates.
const SMALL_PRIMES: [u32; 79] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293,
    307, 311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401,
];

/// Miller–Rabin probable-prime test.
///
/// Writes `candidate − 1 = 2^s · u` with `u` odd, then runs `rounds`
/// independent witness rounds. Each round samples a witness `a` uniformly
/// from `[2, candidate)` and passes when `a^u ≡ 1` or
/// `a^(u·2^j) ≡ candidate − 1 (mod candidate)` for some `j ∈ [0, s)`;
/// a single failing round proves the candidate composite.
///
/// Returns true when every round passes. Values below 2 and even values
/// other than 2 are rejected outright.
pub fn is_probable_prime(candidate: &BigNum, rounds: u32, rng: &mut Csprng) -> bool {
    let one = BigNum::from(1u32);
    let two = BigNum::from(2u32);

    match candidate.unsigned_cmp(&two) {
        Ordering::Less => return false,
        Ordering::Equal => return true,
        Ordering::Greater => {}
    }
    if candidate.is_even() {
        return false;
    }

    let candidate_minus_1 = candidate.sub(&one);

    // Strip the factors of two from candidate − 1.
    let mut odd_part = candidate_minus_1.clone();
    let mut two_exponent = 0usize;
    let mut previous = odd_part.clone();
    let mut bit = odd_part.halve();
    while bit == 0 {
        two_exponent += 1;
        previous = odd_part.clone();
        bit = odd_part.halve();
    }
    let odd_part = previous;

    let pow = |base: &BigNum, exponent: &BigNum| {
        base.mod_pow(exponent, candidate)
            .expect("candidate is nonzero")
    };

    for _ in 0..rounds {
        let witness = random_in_range(rng, &two, candidate);

        let mut passed = pow(&witness, &odd_part) == one;
        if !passed {
            for j in 0..two_exponent {
                let exponent = odd_part.mul_pow2(j);
                if pow(&witness, &exponent) == candidate_minus_1 {
                    passed = true;
                    break;
                }
            }
        }

        if !passed {
            return false;
        }
    }

    true
}

/// Draws random values of the requested width until one survives the
/// small-prime trial-division screen.
fn screened_candidate(rng: &mut Csprng, bits: usize) -> BigNum {
    'search: loop {
        let candidate = random_bits(rng, bits);

        for &prime in SMALL_PRIMES.iter() {
            let divisor = BigNum::from(prime);
            if (&candidate % &divisor).is_zero() {
                continue 'search;
            }
        }

        return candidate;
    }
}

/// Searches for a random probable prime of at most `bits` bits.
///
/// Candidates are drawn uniformly, filtered through the small-prime
/// screen, and then subjected to `rounds` Miller–Rabin rounds; the loop
/// runs until a candidate survives. Termination is probabilistic but
/// assured in practice by the density of primes.
pub fn random_prime(rng: &mut Csprng, bits: usize, rounds: u32) -> BigNum {
    loop {
        let candidate = screened_candidate(rng, bits);

        if is_probable_prime(&candidate, rounds, rng) {
            return candidate;
        }
    }
}

/// Races several worker threads over [`random_prime`] and returns the
/// first find.
///
/// `threads` asks for a worker count: zero or a negative value selects the
/// machine's available parallelism, and larger requests are clamped to it.
/// Each worker seeds its own generator from the operating system and checks
/// the shared stop flag once per candidate. The first worker to find a
/// probable prime publishes it under the result mutex (only if the slot is
/// still empty) and raises the stop flag; everyone else winds down.
pub fn random_prime_parallel(bits: usize, rounds: u32, threads: i32) -> BigNum {
    let available = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let workers = if threads <= 0 {
        available
    } else {
        (threads as usize).min(available)
    };

    let stop = AtomicBool::new(false);
    let slot: Mutex<Option<BigNum>> = Mutex::new(None);

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| {
                let mut rng = Csprng::new();

                while !stop.load(AtomicOrdering::Acquire) {
                    let candidate = screened_candidate(&mut rng, bits);

                    if is_probable_prime(&candidate, rounds, &mut rng) {
                        let mut found = slot.lock().expect("prime search worker panicked");
                        if found.is_none() {
                            *found = Some(candidate);
                            stop.store(true, AtomicOrdering::Release);
                        }
                        break;
                    }
                }
            });
        }
    });

    slot.into_inner()
        .expect("prime search worker panicked")
        .expect("prime search finished without a result")
}
