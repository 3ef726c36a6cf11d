//! Random number generation module
//!
//! This module provides the cryptographically secure randomness used by the
//! prime-search and key-generation machinery.
//!
//! It is built around a word-oriented, fast-key-erasure ChaCha20 generator
//! seeded from the operating system: every generated block replaces the key
//! that produced it, and output words are wiped as they are consumed. Every
//! prime-search worker thread constructs its own generator from an
//! independent OS entropy draw; no generator state is ever shared between
//! threads.

mod csprng;

/// Cryptographically secure pseudorandom number generator.
///
/// This type is the only entry point for randomness within the crate:
/// candidate primes, Miller–Rabin witnesses, and witness bit counts are all
/// drawn from it, one 32-bit limb at a time.
pub use csprng::Csprng;
