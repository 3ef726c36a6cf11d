//! RSA core implementation
//!
//! Parameter generation and the public API of the [`Rsa`] type. See the
//! module documentation in `rsa` for the shortcut semantics.

use crate::bignum::{BigNum, BigNumError};
use crate::prime;
use std::cmp::Ordering;

/// Default public exponent, 2^16 + 1.
///
/// The 64-bit minimum key size guarantees that the totient always exceeds
/// this value.
const DEFAULT_PUBLIC_EXPONENT: u32 = 0x10001;

/// Default Miller–Rabin round count for key generation.
const DEFAULT_ROUNDS: u32 = 20;

/// RSA key material.
///
/// All parameters are computed once at construction and never change; the
/// accessors hand out copies. The type holds both primes, the totient, and
/// the reduced private exponent, so it must be treated as secret material
/// in its entirety.
pub struct Rsa {
    /// Modulus width in bits as requested at construction.
    key_bits: usize,

    /// The two prime factors.
    p: BigNum,
    q: BigNum,

    /// `p − 1` and `q − 1`, kept for the totient and the reduced exponent.
    p_minus_1: BigNum,
    q_minus_1: BigNum,

    /// `n = p · q`.
    modulus: BigNum,

    /// `φ = (p − 1)(q − 1)`.
    phi: BigNum,

    /// Public exponent `e`.
    public_exponent: BigNum,

    /// Private exponent `d = e⁻¹ mod φ`.
    private_exponent: BigNum,

    /// The smaller of the two primes; every ciphertext lives modulo this.
    smaller_prime: BigNum,

    /// `d mod (smaller_prime − 1)`, the Fermat-reduced decryption exponent.
    reduced_private_exponent: BigNum,
}

/// Errors surfaced by the RSA layer.
///
/// Every failure at this boundary is an invalid-argument condition: either
/// the requested parameters are unusable or a message does not fit the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsaError {
    /// The requested modulus size is below 64 bits or odd.
    InvalidBitSize,

    /// The key-generation pipeline produced unusable parameters.
    KeyGeneration,

    /// A plaintext or ciphertext is wider than the modulus.
    MessageTooLong,
}

impl From<BigNumError> for RsaError {
    /// Any engine error escaping the key pipeline makes the parameters
    /// unusable as a whole.
    fn from(_: BigNumError) -> Self {
        RsaError::KeyGeneration
    }
}

impl Rsa {
    /// Generates a fresh key of `key_bits` modulus bits with the default
    /// Miller–Rabin round count and automatic worker-thread selection.
    ///
    /// # Errors
    /// See [`Rsa::generate`].
    pub fn new(key_bits: usize) -> Result<Self, RsaError> {
        Self::generate(key_bits, DEFAULT_ROUNDS, 0)
    }

    /// Generates a fresh key.
    ///
    /// `rounds` is the Miller–Rabin round count used for both primes;
    /// `threads` requests a worker count for the parallel prime search
    /// (zero or negative selects the machine's available parallelism).
    ///
    /// Both primes have `key_bits / 2` bits drawn at random, so the modulus
    /// may come out one bit short of `key_bits`.
    ///
    /// # Errors
    /// - [`RsaError::InvalidBitSize`] when `key_bits` is below 64 or odd.
    /// - [`RsaError::KeyGeneration`] when the public exponent does not fit
    ///   below the totient or is not invertible in it.
    pub fn generate(key_bits: usize, rounds: u32, threads: i32) -> Result<Self, RsaError> {
        if key_bits < 64 || key_bits % 2 != 0 {
            return Err(RsaError::InvalidBitSize);
        }

        let prime_bits = key_bits / 2;

        // Draw until the primes are distinct.
        let (p, q) = loop {
            let p = prime::random_prime_parallel(prime_bits, rounds, threads);
            let q = prime::random_prime_parallel(prime_bits, rounds, threads);

            if p.unsigned_cmp(&q) != Ordering::Equal {
                break (p, q);
            }
        };

        let one = BigNum::from(1u32);
        let modulus = p.mul(&q);
        let p_minus_1 = p.unsigned_sub(&one)?;
        let q_minus_1 = q.unsigned_sub(&one)?;
        let phi = p_minus_1.mul(&q_minus_1);

        let public_exponent = BigNum::from(DEFAULT_PUBLIC_EXPONENT);
        if public_exponent.unsigned_cmp(&phi) != Ordering::Less {
            return Err(RsaError::KeyGeneration);
        }

        let private_exponent = public_exponent.mod_inverse(&phi)?;

        // Cache the smaller prime and the Fermat-reduced exponent for the
        // fast decryption path.
        let (smaller_prime, reduced_private_exponent) =
            if p.unsigned_cmp(&q) == Ordering::Greater {
                (q.clone(), private_exponent.modulus(&q_minus_1)?)
            } else {
                (p.clone(), private_exponent.modulus(&p_minus_1)?)
            };

        Ok(Self {
            key_bits,
            p,
            q,
            p_minus_1,
            q_minus_1,
            modulus,
            phi,
            public_exponent,
            private_exponent,
            smaller_prime,
            reduced_private_exponent,
        })
    }

    /// Encrypts a plaintext: `plain^e` reduced modulo the smaller prime.
    ///
    /// # Errors
    /// [`RsaError::MessageTooLong`] when the plaintext is wider than the
    /// key.
    pub fn encrypt(&self, plain: &BigNum) -> Result<BigNum, RsaError> {
        if plain.bit_len() > self.key_bits {
            return Err(RsaError::MessageTooLong);
        }

        Ok(plain.mod_pow(&self.public_exponent, &self.smaller_prime)?)
    }

    /// Decrypts a ciphertext along the fast path: the ciphertext is first
    /// reduced modulo the smaller prime, then raised to the reduced private
    /// exponent.
    ///
    /// # Errors
    /// [`RsaError::MessageTooLong`] when the ciphertext is wider than the
    /// key.
    pub fn decrypt(&self, cipher: &BigNum) -> Result<BigNum, RsaError> {
        if cipher.bit_len() > self.key_bits {
            return Err(RsaError::MessageTooLong);
        }

        let reduced = cipher.modulus(&self.smaller_prime)?;

        Ok(reduced.mod_pow(&self.reduced_private_exponent, &self.smaller_prime)?)
    }

    /// Decrypts a ciphertext with the full private exponent:
    /// `cipher^d` reduced modulo the smaller prime.
    ///
    /// Slower than [`Rsa::decrypt`] and produces identical results; kept as
    /// the reference path.
    ///
    /// # Errors
    /// [`RsaError::MessageTooLong`] when the ciphertext is wider than the
    /// key.
    pub fn decrypt_textbook(&self, cipher: &BigNum) -> Result<BigNum, RsaError> {
        if cipher.bit_len() > self.key_bits {
            return Err(RsaError::MessageTooLong);
        }

        Ok(cipher.mod_pow(&self.private_exponent, &self.smaller_prime)?)
    }

    /// Returns the public exponent `e`.
    pub fn public_key(&self) -> BigNum {
        self.public_exponent.clone()
    }

    /// Returns the private exponent `d`.
    pub fn private_key(&self) -> BigNum {
        self.private_exponent.clone()
    }

    /// Returns the modulus `n = p · q`.
    pub fn modulus(&self) -> BigNum {
        self.modulus.clone()
    }

    /// Returns the modulus width requested at construction.
    pub fn key_bits(&self) -> usize {
        self.key_bits
    }
}

impl Drop for Rsa {
    /// Wipes the secret components before their storage is released, so
    /// freed heap blocks do not retain key material.
    fn drop(&mut self) {
        let secrets = [
            &mut self.p,
            &mut self.q,
            &mut self.p_minus_1,
            &mut self.q_minus_1,
            &mut self.phi,
            &mut self.private_exponent,
            &mut self.smaller_prime,
            &mut self.reduced_private_exponent,
        ];

        for secret in secrets {
            secret.limbs.fill(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prime::is_probable_prime;
    use crate::rng::Csprng;

    /// Internal key invariants that the public accessors cannot reach.
    #[test]
    fn generated_key_internals_are_consistent() {
        let rsa = Rsa::generate(128, 20, 0).expect("key generation failed");
        let one = BigNum::from(1u32);

        assert_ne!(rsa.p, rsa.q);

        let mut rng = Csprng::new();
        assert!(is_probable_prime(&rsa.p, 40, &mut rng));
        assert!(is_probable_prime(&rsa.q, 40, &mut rng));

        // d is the inverse of e in the totient.
        let product = rsa.public_exponent.mul(&rsa.private_exponent);
        assert_eq!(product.modulus(&rsa.phi).unwrap(), one);

        // The cached shortcut state matches its definition.
        let smaller_minus_1 = if rsa.smaller_prime == rsa.p {
            &rsa.p_minus_1
        } else {
            &rsa.q_minus_1
        };
        assert_eq!(
            rsa.private_exponent.modulus(smaller_minus_1).unwrap(),
            rsa.reduced_private_exponent
        );

        assert_eq!(rsa.modulus, rsa.p.mul(&rsa.q));
    }
}
