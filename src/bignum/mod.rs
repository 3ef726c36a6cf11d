//! Signed arbitrary-precision integer
//!
//! This module defines the crate's central value type, [`BigNum`]: a signed
//! integer of arbitrary magnitude stored as little-endian 32-bit limbs with
//! a separate sign flag.
//!
//! It is written as an **explicit, auditable big-integer engine**, not as a
//! general-purpose numerics library. The operations it provides are exactly
//! the ones the RSA layer needs:
//! - limb-wise addition and subtraction with 64-bit carry/borrow
//! - schoolbook multiplication from single-limb partial products
//! - restoring long division, one hexadecimal digit per step
//! - logical shifts by limbs and by bits, plus a fast halving primitive
//! - Euclidean modulus with the mathematical sign convention
//! - the extended-Euclidean modular inverse and fast modular exponentiation
//! - parsing and emission in binary, decimal, and hexadecimal
//!
//! ## Representation invariants
//!
//! After every public operation the value is in **canonical form**:
//!
//! - no trailing zero limbs at the most significant end,
//! - zero is the empty limb vector,
//! - zero is never negative.
//!
//! Because the form is canonical, derived equality is value equality and the
//! manual [`Ord`] implementation is the signed comparison.
//!
//! Each value owns its limb buffer exclusively; `Clone` is a deep value
//! copy. Growth of the buffer is handled by `Vec`, for which allocation
//! exhaustion aborts the process.
//!
//! Operator sugar is intentionally thin: `/` and `%` are provided for
//! reference operands and panic on a zero divisor, mirroring the primitive
//! integer types. The checked entry point is [`BigNum::div_rem`].

use std::fmt::{Display, Formatter, Result as FmtResult};

mod core;
mod div;
mod modular;
mod ops;
mod radix;

pub use radix::{Radix, RadixError, convert_digits};

/// Signed arbitrary-precision integer.
///
/// The magnitude is stored as little-endian 32-bit limbs (`limbs[0]` is the
/// least significant); `negative` is true iff the value is strictly below
/// zero. See the module documentation for the canonical-form invariants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BigNum {
    /// Little-endian limbs of the magnitude; empty means zero.
    pub(crate) limbs: Vec<u32>,

    /// Sign flag; never set while the value is zero.
    pub(crate) negative: bool,
}

/// Errors reported by the big-integer engine.
///
/// Anything not representable as a value of the requested operation is
/// reported through this enum; allocation exhaustion is the only fatal
/// condition and aborts instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigNumError {
    /// Division or modulus with a zero divisor.
    DivideByZero,

    /// Unsigned subtraction where the subtrahend magnitude exceeds the
    /// minuend magnitude.
    SubtrahendTooLarge,

    /// Modular inverse of a value that is not coprime with the modulus,
    /// of zero, or with a zero modulus.
    NotInvertible,

    /// Modular exponentiation with a zero modulus.
    ZeroModulus,
}

impl Display for BigNum {
    /// Formats the value as an uppercase hexadecimal string without a
    /// radix prefix, e.g. `-1A2B`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_str_radix(Radix::Hexadecimal))
    }
}
