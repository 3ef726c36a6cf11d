use rsanum::bignum::{BigNum, Radix};
use rsanum::rsa::{Rsa, RsaError};

fn hex(s: &str) -> BigNum {
    BigNum::from_str_radix(s, Radix::Hexadecimal).unwrap()
}

#[test]
fn invalid_key_sizes_are_rejected() {
    assert!(matches!(Rsa::new(0), Err(RsaError::InvalidBitSize)));
    assert!(matches!(Rsa::new(62), Err(RsaError::InvalidBitSize)));
    assert!(matches!(Rsa::new(63), Err(RsaError::InvalidBitSize)));
    assert!(matches!(Rsa::new(127), Err(RsaError::InvalidBitSize)));
}

#[test]
fn key_generation_produces_expected_parameters() {
    let rsa = Rsa::new(128).expect("key generation failed");

    assert_eq!(rsa.public_key(), BigNum::from(0x10001u32));
    assert_eq!(rsa.key_bits(), 128);

    // Both primes are drawn at 64 bits without forcing the top bit, so the
    // modulus can come out slightly short of the requested width.
    let modulus_bits = rsa.modulus().bit_len();
    assert!(modulus_bits <= 128, "modulus too wide: {modulus_bits}");
    assert!(modulus_bits >= 120, "modulus too narrow: {modulus_bits}");

    assert!(!rsa.private_key().is_zero());
    assert_ne!(rsa.private_key(), rsa.public_key());
}

#[test]
fn round_trip_through_both_decryption_paths() {
    let rsa = Rsa::new(128).expect("key generation failed");
    let plain = hex("DEAD");

    let cipher = rsa.encrypt(&plain).unwrap();
    let fast = rsa.decrypt(&cipher).unwrap();
    let reference = rsa.decrypt_textbook(&cipher).unwrap();

    assert_eq!(fast, plain);
    assert_eq!(reference, plain);
}

#[test]
fn wider_plaintexts_round_trip() {
    let rsa = Rsa::new(128).expect("key generation failed");
    let plain = hex("DEADBEEF");

    let cipher = rsa.encrypt(&plain).unwrap();
    assert_eq!(rsa.decrypt(&cipher).unwrap(), plain);
}

#[test]
fn explicit_rounds_and_worker_count() {
    let rsa = Rsa::generate(64, 10, 2).expect("key generation failed");
    let plain = hex("BEEF");

    let cipher = rsa.encrypt(&plain).unwrap();
    assert_eq!(rsa.decrypt(&cipher).unwrap(), plain);
    assert_eq!(rsa.decrypt_textbook(&cipher).unwrap(), plain);
}

#[test]
fn oversized_messages_are_rejected() {
    let rsa = Rsa::new(64).expect("key generation failed");

    // 65 bits exceeds a 64-bit key.
    let too_long = hex("10000000000000000");
    assert!(matches!(
        rsa.encrypt(&too_long),
        Err(RsaError::MessageTooLong)
    ));
    assert!(matches!(
        rsa.decrypt(&too_long),
        Err(RsaError::MessageTooLong)
    ));
    assert!(matches!(
        rsa.decrypt_textbook(&too_long),
        Err(RsaError::MessageTooLong)
    ));
}

#[test]
fn distinct_keys_differ() {
    let first = Rsa::new(64).expect("key generation failed");
    let second = Rsa::new(64).expect("key generation failed");

    assert_ne!(first.modulus(), second.modulus());
}
