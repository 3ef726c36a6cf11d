//! Arithmetic and shift operations for `BigNum`
//!
//! Limb-wise addition and subtraction with a 64-bit carry/borrow
//! accumulator, sign-dispatching signed addition and subtraction,
//! magnitude and signed comparison, logical shifts by limbs and by bits,
//! fast halving, schoolbook multiplication, and exponentiation by a
//! machine-word exponent.
//!
//! Unsigned operations work on magnitudes and produce non-negative results;
//! the signed entry points own all sign bookkeeping.

use crate::bignum::{BigNum, BigNumError};
use std::cmp::Ordering;

impl BigNum {
    /// Compares magnitudes, ignoring signs.
    ///
    /// Canonical form makes this a limb-count comparison first, then a
    /// limb-wise scan from the most significant end.
    pub fn unsigned_cmp(&self, other: &Self) -> Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => {}
            order => return order,
        }

        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                order => return order,
            }
        }

        Ordering::Equal
    }

    /// Returns the magnitude sum `|self| + |other|` as a non-negative value.
    pub fn unsigned_add(&self, other: &Self) -> Self {
        let mut result = self.abs();
        result.unsigned_add_assign(other);
        result
    }

    /// Adds `|other|` into the magnitude of `self` in place.
    pub(crate) fn unsigned_add_assign(&mut self, other: &Self) {
        if self.limbs.len() < other.limbs.len() {
            self.limbs.resize(other.limbs.len(), 0);
        }

        let mut carry = 0u64;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let sum = *limb as u64 + *other.limbs.get(i).unwrap_or(&0) as u64 + carry;
            *limb = sum as u32;
            carry = sum >> 32;
        }

        if carry != 0 {
            self.limbs.push(carry as u32);
        }
    }

    /// Returns the magnitude difference `|self| − |other|`.
    ///
    /// # Errors
    /// [`BigNumError::SubtrahendTooLarge`] when `|other| > |self|`.
    pub fn unsigned_sub(&self, other: &Self) -> Result<Self, BigNumError> {
        if self.unsigned_cmp(other) == Ordering::Less {
            return Err(BigNumError::SubtrahendTooLarge);
        }

        Ok(self.sub_magnitude(other))
    }

    /// Magnitude subtraction with the precondition `|self| ≥ |other|`
    /// already established by the caller.
    pub(crate) fn sub_magnitude(&self, other: &Self) -> Self {
        debug_assert!(self.unsigned_cmp(other) != Ordering::Less);

        let mut result = BigNum::new();
        result.limbs.reserve(self.limbs.len());

        let mut borrow = 0u64;
        for (i, &limb) in self.limbs.iter().enumerate() {
            let minuend = limb as u64;
            let subtrahend = *other.limbs.get(i).unwrap_or(&0) as u64 + borrow;

            if minuend >= subtrahend {
                result.limbs.push((minuend - subtrahend) as u32);
                borrow = 0;
            } else {
                result.limbs.push((minuend + (1u64 << 32) - subtrahend) as u32);
                borrow = 1;
            }
        }

        result.normalize();
        result
    }

    /// Signed addition.
    ///
    /// Same-sign operands reduce to a magnitude addition carrying the shared
    /// sign; opposite signs reduce to a magnitude subtraction of the smaller
    /// from the larger, carrying the sign of the larger magnitude.
    pub fn add(&self, other: &Self) -> Self {
        if self.negative == other.negative {
            let mut result = self.unsigned_add(other);
            result.set_negative(self.negative);
            return result;
        }

        match self.unsigned_cmp(other) {
            Ordering::Equal => BigNum::new(),
            Ordering::Greater => {
                let mut result = self.sub_magnitude(other);
                result.set_negative(self.negative);
                result
            }
            Ordering::Less => {
                let mut result = other.sub_magnitude(self);
                result.set_negative(other.negative);
                result
            }
        }
    }

    /// Signed subtraction, implemented as addition of the negation.
    pub fn sub(&self, other: &Self) -> Self {
        let mut negated = other.clone();
        negated.set_negative(!negated.negative);
        self.add(&negated)
    }

    /// Shifts the magnitude up by whole limbs, zero-filling the low end.
    pub fn shift_left_limbs(&mut self, limbs: usize) {
        if limbs == 0 || self.is_zero() {
            return;
        }

        let mut shifted = vec![0u32; limbs];
        shifted.extend_from_slice(&self.limbs);
        self.limbs = shifted;
    }

    /// Shifts the magnitude down by whole limbs, discarding the low end.
    pub fn shift_right_limbs(&mut self, limbs: usize) {
        if limbs == 0 {
            return;
        }

        if limbs >= self.limbs.len() {
            self.clear();
            return;
        }

        self.limbs.drain(..limbs);
    }

    /// Shifts the magnitude left by `bits`.
    pub fn shift_left(&mut self, bits: usize) {
        self.shift_left_limbs(bits / 32);

        let bit_shift = (bits % 32) as u32;
        if bit_shift > 0 {
            self.shift_left_bits(bit_shift);
        }
    }

    /// Shifts the magnitude right by `bits`, discarding shifted-out bits.
    pub fn shift_right(&mut self, bits: usize) {
        self.shift_right_limbs(bits / 32);

        let bit_shift = (bits % 32) as u32;
        if bit_shift > 0 {
            self.shift_right_bits(bit_shift);
        }
    }

    /// Sub-limb left shift, `0 < bits < 32`, via a double-width
    /// shift-with-carry over each limb.
    fn shift_left_bits(&mut self, bits: u32) {
        debug_assert!(bits > 0 && bits < 32);

        let mut carry = 0u32;
        for limb in self.limbs.iter_mut() {
            let wide = ((*limb as u64) << bits) | carry as u64;
            *limb = wide as u32;
            carry = (wide >> 32) as u32;
        }

        if carry != 0 {
            self.limbs.push(carry);
        }
    }

    /// Sub-limb right shift, `0 < bits < 32`; the low `bits` bits of the
    /// value are discarded.
    fn shift_right_bits(&mut self, bits: u32) {
        debug_assert!(bits > 0 && bits < 32);

        let mut carry = 0u32;
        for limb in self.limbs.iter_mut().rev() {
            let current = *limb;
            *limb = (current >> bits) | (carry << (32 - bits));
            carry = current & ((1u32 << bits) - 1);
        }

        self.normalize();
    }

    /// Halves the magnitude in place and returns the bit shifted out.
    ///
    /// This is the bit-consumption primitive of modular exponentiation and
    /// of the `n − 1 = 2^s · u` decomposition in Miller–Rabin.
    pub fn halve(&mut self) -> u32 {
        let mut carry = 0u32;
        for limb in self.limbs.iter_mut().rev() {
            let current = *limb;
            *limb = (current >> 1) | (carry << 31);
            carry = current & 1;
        }

        self.normalize();
        carry
    }

    /// Returns `self · 2^power`.
    pub fn mul_pow2(&self, power: usize) -> Self {
        let mut result = self.clone();
        result.shift_left(power);
        result
    }

    /// Splits `self` into `(self / 2^power, self mod 2^power)`.
    ///
    /// The remainder is the low `power` bits of the magnitude and keeps the
    /// sign of `self`; the quotient is the magnitude shift with the sign of
    /// `self`.
    pub fn div_rem_pow2(&self, power: usize) -> (Self, Self) {
        let limb_count = power / 32;
        let bit_count = power % 32;

        if limb_count >= self.limbs.len() {
            return (BigNum::new(), self.clone());
        }

        let mut remainder = BigNum::new();
        remainder.limbs.extend_from_slice(&self.limbs[..limb_count]);
        if bit_count > 0 {
            remainder
                .limbs
                .push(self.limbs[limb_count] & ((1u32 << bit_count) - 1));
        }
        remainder.normalize();
        remainder.set_negative(self.negative);

        let mut quotient = self.clone();
        quotient.shift_right(power);
        quotient.set_negative(self.negative);

        (quotient, remainder)
    }

    /// Multiplies the magnitude by a single limb, producing a non-negative
    /// partial product.
    pub fn mul_limb(&self, factor: u32) -> Self {
        let mut result = BigNum::new();

        if self.is_zero() || factor == 0 {
            return result;
        }

        result.limbs.reserve(self.limbs.len() + 1);

        let mut carry = 0u64;
        for &limb in &self.limbs {
            let wide = limb as u64 * factor as u64 + carry;
            result.limbs.push(wide as u32);
            carry = wide >> 32;
        }

        if carry != 0 {
            result.limbs.push(carry as u32);
        }

        result
    }

    /// Schoolbook multiplication.
    ///
    /// One single-limb partial product per limb of `other`, shifted into
    /// position and accumulated. The sign of the product is the XOR of the
    /// operand signs.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return BigNum::new();
        }

        let mut result = BigNum::new();
        for (i, &limb) in other.limbs.iter().enumerate() {
            let mut partial = self.mul_limb(limb);
            partial.shift_left_limbs(i);
            result.unsigned_add_assign(&partial);
        }

        result.set_negative(self.negative != other.negative);
        result
    }

    /// Raises the value to a machine-word exponent by repeated
    /// multiplication. `0^0 = 1`; `0^k = 0` for `k > 0`.
    pub fn pow_u32(&self, exponent: u32) -> Self {
        if self.is_zero() {
            return if exponent == 0 {
                BigNum::from(1u32)
            } else {
                BigNum::new()
            };
        }

        let mut result = BigNum::from(1u32);
        for _ in 0..exponent {
            result = result.mul(self);
        }

        result
    }
}

impl Ord for BigNum {
    /// Signed comparison: equal signs compare magnitudes (reversed when both
    /// are negative); different signs order by the positive operand.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.unsigned_cmp(other),
            (true, true) => self.unsigned_cmp(other).reverse(),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
