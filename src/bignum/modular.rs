//! Modular arithmetic for `BigNum`
//!
//! Euclidean modulus with the mathematical sign convention, the
//! extended-Euclidean modular inverse, right-to-left binary modular
//! exponentiation, and the plain Euclidean GCD.
//!
//! ## Sign convention
//!
//! `a mod m` lands in `[0, |m|)` when `m > 0` and in `(−|m|, 0]` when
//! `m < 0`. The modular inverse follows the same convention, so
//! `a · inv(a, m) ≡ 1 (mod m)` holds with the result in the canonical
//! residue range of `m`.

use crate::bignum::{BigNum, BigNumError};
use std::cmp::Ordering;

impl BigNum {
    /// Euclidean modulus under the sign convention above.
    ///
    /// Derived from the division remainder by one correction step: when the
    /// raw remainder is nonzero and its sign disagrees with the modulus,
    /// it is replaced by `|m| − |r|` and given the sign of `m`.
    ///
    /// # Errors
    /// [`BigNumError::DivideByZero`] when `modulus` is zero.
    pub fn modulus(&self, modulus: &Self) -> Result<Self, BigNumError> {
        let (_, remainder) = self.div_rem(modulus)?;

        if !modulus.negative {
            if remainder.negative {
                return Ok(modulus.sub_magnitude(&remainder));
            }
            return Ok(remainder);
        }

        let mut result = if !remainder.negative && !remainder.is_zero() {
            modulus.sub_magnitude(&remainder)
        } else {
            remainder
        };
        result.set_negative(true);

        Ok(result)
    }

    /// Modular inverse by the extended Euclidean algorithm.
    ///
    /// Runs the Euclidean remainder chain on `(|m|, |a|)` while carrying the
    /// auxiliary sequence `p_i = (p_{i−2} − p_{i−1}·q_{i−2}) mod m`; the
    /// quotients feed the recurrence with a two-step delay, and one extra
    /// recurrence step after the chain terminates yields the inverse,
    /// provided the last nonzero remainder is 1.
    ///
    /// The result lands in the canonical residue range of `modulus`.
    ///
    /// # Errors
    /// [`BigNumError::NotInvertible`] when `gcd(a, m) ≠ 1`, when the modulus
    /// is zero, or when `a` is zero with `|m| > 1`.
    pub fn mod_inverse(&self, modulus: &Self) -> Result<Self, BigNumError> {
        let one = BigNum::from(1u32);

        if modulus.is_zero() {
            return Err(BigNumError::NotInvertible);
        }
        if modulus.abs() == one {
            // Everything is congruent to zero modulo ±1.
            return Ok(BigNum::new());
        }
        if self.abs() == one {
            return Ok(self.adjust_inverse_sign(modulus, one));
        }

        let modulus_magnitude = modulus.abs();
        let mut value = self.abs();

        if value.unsigned_cmp(&modulus_magnitude) != Ordering::Less {
            value = value.modulus(&modulus_magnitude)?;
        }
        if value.is_zero() {
            return Err(BigNumError::NotInvertible);
        }

        // Auxiliary sequence state: p_{i−1}, p_i, and the quotients delayed
        // by two steps.
        let mut p_previous = BigNum::new();
        let mut p_current = one.clone();
        let mut delayed_quotients = [BigNum::new(), BigNum::new()];
        let mut quotient = BigNum::new();

        let mut greater = modulus_magnitude.clone();
        let mut lower = value;
        let mut remainder = lower.clone();
        let mut last_nonzero;
        let mut step = 0usize;

        loop {
            step += 1;
            last_nonzero = remainder.clone();
            delayed_quotients.swap(0, 1);
            delayed_quotients[1] = quotient.clone();

            let (q, r) = greater.div_rem(&lower)?;
            quotient = q;
            remainder = r;
            greater = std::mem::replace(&mut lower, remainder.clone());

            if step > 2 {
                let product = p_current.mul(&delayed_quotients[0]);
                let next = p_previous.sub(&product).modulus(&modulus_magnitude)?;
                p_previous = std::mem::replace(&mut p_current, next);
            }

            if remainder.is_zero() {
                break;
            }
        }

        if last_nonzero != one {
            // The chain bottomed out above 1: the operands share a factor.
            return Err(BigNumError::NotInvertible);
        }

        // One step beyond the end of the chain produces the inverse.
        let product = p_current.mul(&delayed_quotients[1]);
        let inverse = p_previous.sub(&product).modulus(&modulus_magnitude)?;

        Ok(self.adjust_inverse_sign(modulus, inverse))
    }

    /// Maps an inverse computed on magnitudes into the residue range
    /// dictated by the signs of the original operands; same convention as
    /// [`BigNum::modulus`].
    fn adjust_inverse_sign(&self, modulus: &Self, inverse: Self) -> Self {
        let modulus_magnitude = modulus.abs();

        if !modulus.negative {
            if self.negative {
                return modulus_magnitude.sub_magnitude(&inverse);
            }
            return inverse;
        }

        let mut result = if !self.negative && !self.is_zero() {
            modulus_magnitude.sub_magnitude(&inverse)
        } else {
            inverse
        };
        result.set_negative(true);
        result
    }

    /// Fast modular exponentiation.
    ///
    /// Positive exponents run iterative right-to-left binary
    /// exponentiation, consuming exponent bits with [`BigNum::halve`].
    /// Negative exponents invert the base first and recurse on the
    /// magnitude of the exponent. Results land in the canonical residue
    /// range of `modulus`.
    ///
    /// Edge cases: `|m| = 1` yields 0; `0^e = 0` for `e > 0`; `x^0` is 1
    /// (sign-adjusted to the convention of `m`).
    ///
    /// # Errors
    /// - [`BigNumError::ZeroModulus`] when `modulus` is zero.
    /// - [`BigNumError::NotInvertible`] when a negative exponent requires an
    ///   inverse that does not exist (including base zero).
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Result<Self, BigNumError> {
        let one = BigNum::from(1u32);

        if modulus.is_zero() {
            return Err(BigNumError::ZeroModulus);
        }

        // An exponent of ±1 needs no squaring chain at all.
        if exponent.abs() == one {
            return if exponent.negative {
                self.mod_inverse(modulus)
            } else {
                self.modulus(modulus)
            };
        }

        if modulus.abs() == one {
            return Ok(BigNum::new());
        }

        if self.is_zero() {
            if exponent.negative {
                return Err(BigNumError::NotInvertible);
            }
            if exponent.is_zero() {
                return Ok(Self::unit_residue(modulus));
            }
            return Ok(BigNum::new());
        }

        if exponent.negative {
            let inverse = self.mod_inverse(modulus)?;
            return inverse.mod_pow(&exponent.abs(), modulus);
        }

        if exponent.is_zero() {
            return Ok(Self::unit_residue(modulus));
        }

        let mut result = one;
        let mut base = self.clone();
        let mut remaining = exponent.clone();

        while !remaining.is_zero() {
            let bit = remaining.halve();
            if bit != 0 {
                result = result.mul(&base).modulus(modulus)?;
            }
            base = base.mul(&base).modulus(modulus)?;
        }

        Ok(result)
    }

    /// The representative of 1 in the residue range of `modulus`, which
    /// must have magnitude at least 2: `1` for a positive modulus,
    /// `−(|m| − 1)` for a negative one.
    fn unit_residue(modulus: &Self) -> Self {
        let one = BigNum::from(1u32);
        if !modulus.negative {
            return one;
        }

        let mut residue = modulus.sub_magnitude(&one);
        residue.set_negative(true);
        residue
    }

    /// Greatest common divisor by the Euclidean algorithm on magnitudes.
    ///
    /// `gcd(0, 0) = 0`; otherwise the result is strictly positive.
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            return BigNum::new();
        }
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }

        let (mut greater, mut lower) = match self.unsigned_cmp(other) {
            Ordering::Equal => return self.abs(),
            Ordering::Greater => (self.abs(), other.abs()),
            Ordering::Less => (other.abs(), self.abs()),
        };

        // The divisor is nonzero on every pass: the loop ends as soon as a
        // remainder of zero appears.
        loop {
            let remainder = &greater % &lower;
            if remainder.is_zero() {
                return lower;
            }
            greater = std::mem::replace(&mut lower, remainder);
        }
    }
}
