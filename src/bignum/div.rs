//! Restoring long division for `BigNum`
//!
//! Division proceeds one hexadecimal digit at a time: the dividend is
//! aligned to the divisor by a nibble-granular right shift, then each step
//! finds the single hex digit `d` with `d·b ≤ rem < (d+1)·b` by a linear
//! probe over the divisor's small multiples, subtracts `d·b`, and pulls the
//! next nibble of the dividend down into the working remainder.
//!
//! This is deliberately simpler than a full word-at-a-time algorithm and is
//! adequate at RSA scale.

use crate::bignum::{BigNum, BigNumError};
use std::cmp::Ordering;
use std::ops::{Div, Rem};

impl BigNum {
    /// Divides one step, producing a single hexadecimal quotient digit and
    /// the remainder `|self| − digit·|divisor|`.
    ///
    /// Requires `|self| < 16·|divisor|`, which the alignment of the outer
    /// loop guarantees; signs are ignored.
    fn divide_once(&self, divisor: &Self) -> (u32, Self) {
        debug_assert!(!divisor.is_zero());

        if self.is_zero() {
            return (0, BigNum::new());
        }

        match self.unsigned_cmp(divisor) {
            Ordering::Less => return (0, self.abs()),
            Ordering::Equal => return (1, BigNum::new()),
            Ordering::Greater => {}
        }

        // Digits 0 and 1 are settled above; probe the remaining multiples.
        for digit in 2..=16u32 {
            let multiple = divisor.mul_limb(digit);
            match self.unsigned_cmp(&multiple) {
                Ordering::Less => {
                    let previous = divisor.mul_limb(digit - 1);
                    return (digit - 1, self.sub_magnitude(&previous));
                }
                Ordering::Equal => return (digit, BigNum::new()),
                Ordering::Greater => {}
            }
        }

        unreachable!("working remainder exceeded one hex digit of the divisor");
    }

    /// Euclidean division producing `(quotient, remainder)` with
    /// `self = quotient · divisor + remainder` and
    /// `0 ≤ |remainder| < |divisor|`.
    ///
    /// The remainder keeps the sign of the dividend; the quotient sign is
    /// the XOR of the operand signs.
    ///
    /// # Errors
    /// [`BigNumError::DivideByZero`] when `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), BigNumError> {
        if divisor.is_zero() {
            return Err(BigNumError::DivideByZero);
        }

        if self.is_zero() {
            return Ok((BigNum::new(), BigNum::new()));
        }

        let quotient_negative = self.negative != divisor.negative;

        match self.unsigned_cmp(divisor) {
            Ordering::Less => {
                // Divisor magnitude exceeds the dividend: the dividend is
                // the whole remainder.
                return Ok((BigNum::new(), self.clone()));
            }
            Ordering::Equal => {
                let mut quotient = BigNum::from(1u32);
                quotient.set_negative(quotient_negative);
                return Ok((quotient, BigNum::new()));
            }
            Ordering::Greater => {}
        }

        let dividend_digits = self.hex_len();
        let divisor_digits = divisor.hex_len();
        let steps = dividend_digits - divisor_digits + 1;

        // Align the dividend: start from its most significant
        // `divisor_digits` nibbles.
        let mut working = self.abs();
        working.shift_right(4 * (dividend_digits - divisor_digits));

        let mut quotient = BigNum::new();
        for step in 0..steps {
            let (digit, remainder) = working.divide_once(divisor);
            quotient.push_hex_digit(digit);

            working = remainder;
            if step + 1 < steps {
                working.push_hex_digit(self.hex_digit_from_lsb(steps - 2 - step));
            }
        }

        quotient.set_negative(quotient_negative);

        let mut remainder = working;
        remainder.set_negative(self.negative);

        Ok((quotient, remainder))
    }
}

/// Quotient operator for reference operands.
///
/// # Panics
/// Panics on division by zero; use [`BigNum::div_rem`] for the checked form.
impl Div<&BigNum> for &BigNum {
    type Output = BigNum;

    fn div(self, divisor: &BigNum) -> Self::Output {
        let (quotient, _) = self.div_rem(divisor).expect("division by zero");
        quotient
    }
}

/// Remainder operator for reference operands.
///
/// The remainder keeps the sign of the dividend, like the primitive integer
/// types.
///
/// # Panics
/// Panics on division by zero; use [`BigNum::div_rem`] for the checked form.
impl Rem<&BigNum> for &BigNum {
    type Output = BigNum;

    fn rem(self, divisor: &BigNum) -> Self::Output {
        let (_, remainder) = self.div_rem(divisor).expect("division by zero");
        remainder
    }
}
