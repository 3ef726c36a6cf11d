//! Limb store and structural operations for `BigNum`
//!
//! Construction, canonicalization, sign and parity queries, bit and
//! hex-digit length, nibble access, and conversions from machine integers.
//! Everything arithmetic lives in the sibling modules.

use crate::bignum::BigNum;

impl BigNum {
    /// Creates a new value equal to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the value to zero, retaining the limb storage.
    pub fn clear(&mut self) {
        self.limbs.clear();
        self.negative = false;
    }

    /// Restores canonical form: trims zero limbs from the most significant
    /// end and clears the sign if the value collapsed to zero.
    pub(crate) fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }

        if self.limbs.is_empty() {
            self.negative = false;
        }
    }

    /// Returns true iff the value is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Returns true iff the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true iff the value is even. Zero is even.
    pub fn is_even(&self) -> bool {
        match self.limbs.first() {
            Some(limb) => limb % 2 == 0,
            None => true,
        }
    }

    /// Sets or clears the sign flag.
    ///
    /// Zero has no sign; the request is ignored for a zero value so the
    /// canonical form is preserved.
    pub fn set_negative(&mut self, negative: bool) {
        if !self.is_zero() {
            self.negative = negative;
        }
    }

    /// Returns the magnitude of the value.
    pub fn abs(&self) -> Self {
        let mut magnitude = self.clone();
        magnitude.negative = false;
        magnitude
    }

    /// Returns the number of significant bits in the magnitude.
    ///
    /// Zero has zero bits.
    pub fn bit_len(&self) -> usize {
        match self.limbs.last() {
            Some(&top) => (self.limbs.len() - 1) * 32 + (32 - top.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Returns the number of significant hexadecimal digits (4-bit nibbles)
    /// in the magnitude.
    ///
    /// This is the step unit of the restoring long division. Zero has zero
    /// digits.
    pub fn hex_len(&self) -> usize {
        match self.limbs.last() {
            Some(&top) => {
                let top_bits = 32 - top.leading_zeros() as usize;
                (self.limbs.len() - 1) * 8 + top_bits.div_ceil(4)
            }
            None => 0,
        }
    }

    /// Returns the hexadecimal digit at `index`, counting from the least
    /// significant nibble. Positions beyond the magnitude read as zero.
    pub(crate) fn hex_digit_from_lsb(&self, index: usize) -> u32 {
        match self.limbs.get(index / 8) {
            Some(&limb) => (limb >> ((index % 8) * 4)) & 0xF,
            None => 0,
        }
    }

    /// Appends `digit` as the new least significant hexadecimal digit,
    /// shifting the existing magnitude up by one nibble.
    ///
    /// Appending a zero digit to a zero value leaves it zero, so quotients
    /// built most-significant-digit-first stay canonical.
    pub(crate) fn push_hex_digit(&mut self, digit: u32) {
        debug_assert!(digit <= 0xF);

        if digit == 0 && self.is_zero() {
            return;
        }

        self.shift_left(4);

        match self.limbs.first_mut() {
            Some(low) => *low |= digit,
            None => self.limbs.push(digit),
        }
    }
}

impl From<u32> for BigNum {
    fn from(value: u32) -> Self {
        let mut result = Self::new();
        if value != 0 {
            result.limbs.push(value);
        }
        result
    }
}

impl From<u64> for BigNum {
    fn from(value: u64) -> Self {
        let mut result = Self::new();
        result.limbs.push(value as u32);
        result.limbs.push((value >> 32) as u32);
        result.normalize();
        result
    }
}

impl From<i64> for BigNum {
    fn from(value: i64) -> Self {
        let mut result = Self::from(value.unsigned_abs());
        result.set_negative(value < 0);
        result
    }
}
