//! RSA key generation, encryption, and decryption
//!
//! This module implements the textbook RSA construction on top of the
//! crate's big-integer engine.
//!
//! Key generation draws two distinct random probable primes of half the
//! requested modulus width through the multi-threaded prime search, fixes
//! the public exponent at 65537, and derives the private exponent as its
//! modular inverse in the totient. The smaller prime and the private
//! exponent reduced modulo that prime minus one are cached at construction
//! for the fast decryption path.
//!
//! ## Single-prime shortcut
//!
//! Both encryption and decryption reduce modulo the **smaller prime
//! factor** rather than the full modulus, and the fast decryption path
//! additionally uses the reduced private exponent, exploiting Fermat's
//! little theorem. The two sides are mutually consistent, and any plaintext
//! below the smaller prime round-trips exactly, but the ciphertexts are
//! **not interoperable with standard RSA**, and plaintexts at the full
//! modulus width are only recoverable modulo that prime. Treat this module
//! as an educational construction, not a wire format.
//!
//! No padding is applied; plaintexts are raw integers bounded by the key
//! size.

mod core;

pub use self::core::{Rsa, RsaError};
