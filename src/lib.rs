//! Arbitrary-precision integer arithmetic and RSA for Nebula
//!
//! This crate provides a self-contained big-integer engine and a small RSA
//! construction built on top of it, used for asymmetric key material inside
//! the Nebula ecosystem.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on raw throughput or a large API surface. Every algorithm is written
//! out explicitly over 32-bit limbs; there is no Montgomery or Barrett
//! machinery, no constant-time guarantee, and no padding scheme. The RSA
//! layer is the textbook construction and is intended for key material
//! experiments and protocol prototyping, not for interoperable production
//! cryptography.
//!
//! # Module overview
//!
//! - `bignum`
//!   The signed arbitrary-precision integer type (`BigNum`) and all of its
//!   arithmetic: limb-wise addition and subtraction, schoolbook
//!   multiplication, restoring long division, logical shifts, Euclidean
//!   modulus, the extended-Euclidean modular inverse, and fast modular
//!   exponentiation. String parsing and emission in binary, decimal, and
//!   hexadecimal also live here.
//!
//! - `prime`
//!   Probabilistic primality testing and random prime generation: uniform
//!   random big integers, a fixed small-prime trial-division screen, the
//!   Miller–Rabin witness loop, and a multi-threaded search for random
//!   probable primes.
//!
//! - `rng`
//!   A ChaCha20-based cryptographically secure pseudorandom number
//!   generator seeded from the operating system. Every prime-search worker
//!   owns an independent instance; there is no shared generator state.
//!
//! - `rsa`
//!   RSA parameter generation (two random primes, modulus, totient, key
//!   pair) plus encryption and two decryption paths, one of them the
//!   Fermat single-prime shortcut.
//!
//! # Design goals
//!
//! - Explicit, auditable limb arithmetic with stated invariants
//! - Minimal APIs with well-defined failure modes
//! - No dependencies beyond the OS entropy bindings
//! - Clear separation between the integer engine and the RSA layer
//!
//! This crate is not a replacement for externally audited cryptographic
//! libraries; it is a small, controlled foundation for Nebula's internal
//! asymmetric-key needs.

mod os;

pub mod bignum;
pub mod prime;
pub mod rng;
pub mod rsa;
