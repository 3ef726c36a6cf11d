use rsanum::bignum::{BigNum, Radix};
use rsanum::prime::{is_probable_prime, random_bits, random_in_range, random_prime,
    random_prime_parallel};
use rsanum::rng::Csprng;

use std::cmp::Ordering;

fn num(v: i64) -> BigNum {
    BigNum::from(v)
}

#[test]
fn random_values_respect_the_bit_bound() {
    let mut rng = Csprng::new();

    for bits in [1usize, 8, 31, 32, 33, 64, 100, 256] {
        for _ in 0..20 {
            let value = random_bits(&mut rng, bits);
            assert!(value.bit_len() <= bits, "{bits} bit draw");
            assert!(!value.is_negative());
        }
    }
}

#[test]
fn ranged_values_stay_in_range() {
    let mut rng = Csprng::new();
    let low = num(2);
    let high = BigNum::from_str_radix("DEADBEEF", Radix::Hexadecimal).unwrap();

    for _ in 0..50 {
        let value = random_in_range(&mut rng, &low, &high);
        assert!(low.unsigned_cmp(&value) != Ordering::Greater);
        assert!(high.unsigned_cmp(&value) == Ordering::Greater);
    }
}

#[test]
fn known_primes_pass_miller_rabin() {
    let mut rng = Csprng::new();

    for prime in [2i64, 3, 5, 13, 101, 7919, 104729, 999999937] {
        assert!(
            is_probable_prime(&num(prime), 20, &mut rng),
            "{prime} should pass"
        );
    }

    // 2^61 - 1, a Mersenne prime.
    let wide = BigNum::from_str_radix("1FFFFFFFFFFFFFFF", Radix::Hexadecimal).unwrap();
    assert!(is_probable_prime(&wide, 20, &mut rng));
}

#[test]
fn known_composites_are_rejected() {
    let mut rng = Csprng::new();

    // 561, 1105 and 6601 are Carmichael numbers; Fermat alone would miss
    // them, Miller–Rabin must not.
    for composite in [15i64, 21, 91, 561, 1105, 6601, 999999938] {
        assert!(
            !is_probable_prime(&num(composite), 20, &mut rng),
            "{composite} should be rejected"
        );
    }
}

#[test]
fn small_values_are_classified() {
    let mut rng = Csprng::new();

    assert!(!is_probable_prime(&num(0), 20, &mut rng));
    assert!(!is_probable_prime(&num(1), 20, &mut rng));
    assert!(is_probable_prime(&num(2), 20, &mut rng));
    assert!(!is_probable_prime(&num(4), 20, &mut rng));
}

#[test]
fn sequential_search_finds_a_probable_prime() {
    let mut rng = Csprng::new();

    let prime = random_prime(&mut rng, 24, 10);
    assert!(prime.bit_len() <= 24);
    assert!(is_probable_prime(&prime, 30, &mut rng));
}

#[test]
fn parallel_search_finds_a_probable_prime() {
    let prime = random_prime_parallel(32, 10, 2);

    let mut rng = Csprng::new();
    assert!(prime.bit_len() <= 32);
    assert!(is_probable_prime(&prime, 30, &mut rng));
}

#[test]
fn parallel_search_with_automatic_worker_count() {
    let prime = random_prime_parallel(24, 10, 0);

    let mut rng = Csprng::new();
    assert!(is_probable_prime(&prime, 30, &mut rng));
}
