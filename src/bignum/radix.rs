//! String parsing and emission for `BigNum`
//!
//! Values parse from and emit to digit strings in binary, decimal, and
//! hexadecimal. The accepted grammar is
//!
//! ```text
//! bignum := ['-'] ['0x' | '0X'] digits
//! ```
//!
//! where the `0x` prefix is accepted only in hexadecimal. Leading zeros are
//! stripped, emission of zero is `"0"` with no sign, and `"-0"` parses to
//! positive zero. Hexadecimal parses case-insensitively and emits uppercase.
//!
//! Binary and decimal strings are transcoded to hexadecimal (and back)
//! through a generic alphabet converter: the source digit string is
//! repeatedly long-divided by the target base, the remainders are collected
//! least-significant first, and the result is reversed. Only the
//! hexadecimal form touches the limb representation directly, eight nibbles
//! per limb.

use crate::bignum::BigNum;

const BINARY_DIGITS: &str = "01";
const DECIMAL_DIGITS: &str = "0123456789";
const HEX_DIGITS: &str = "0123456789ABCDEF";

/// Supported string bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Decimal,
    Hexadecimal,
}

/// Errors reported while parsing or transcoding digit strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadixError {
    /// An alphabet with fewer than two symbols cannot express a positional
    /// number system.
    InvalidAlphabet,

    /// The input contains a character outside the selected alphabet.
    InvalidDigit(char),

    /// The input contains no digits.
    EmptyInput,
}

/// Transcodes a digit string between two positional alphabets.
///
/// The index of a character within an alphabet is its digit value. The
/// conversion repeatedly long-divides the source digit string by the target
/// base, emitting one target digit (the remainder) per pass.
///
/// # Errors
/// - [`RadixError::InvalidAlphabet`] when either alphabet has fewer than
///   two symbols.
/// - [`RadixError::InvalidDigit`] when `value` contains a character outside
///   the source alphabet.
/// - [`RadixError::EmptyInput`] when `value` is empty.
pub fn convert_digits(value: &str, source: &str, target: &str) -> Result<String, RadixError> {
    let source_base = source.chars().count() as u64;
    let target_symbols: Vec<char> = target.chars().collect();
    let target_base = target_symbols.len() as u64;

    if source_base < 2 || target_base < 2 {
        return Err(RadixError::InvalidAlphabet);
    }
    if value.is_empty() {
        return Err(RadixError::EmptyInput);
    }

    let mut digits = value
        .chars()
        .map(|c| {
            source
                .chars()
                .position(|s| s == c)
                .map(|p| p as u64)
                .ok_or(RadixError::InvalidDigit(c))
        })
        .collect::<Result<Vec<u64>, RadixError>>()?;

    let mut emitted = String::new();
    loop {
        // One pass of long division of `digits` by the target base.
        let mut quotient = Vec::with_capacity(digits.len());
        let mut carry = 0u64;
        for &digit in &digits {
            let accumulator = carry * source_base + digit;
            quotient.push(accumulator / target_base);
            carry = accumulator % target_base;
        }

        emitted.push(target_symbols[carry as usize]);

        match quotient.iter().position(|&d| d != 0) {
            Some(first) => digits = quotient.split_off(first),
            None => break,
        }
    }

    Ok(emitted.chars().rev().collect())
}

impl BigNum {
    /// Parses a value from a digit string in the given base.
    ///
    /// See the module documentation for the accepted grammar. A lone
    /// negative zero normalizes to positive zero.
    ///
    /// # Errors
    /// - [`RadixError::EmptyInput`] when no digits remain after the sign
    ///   and prefix.
    /// - [`RadixError::InvalidDigit`] on a character outside the base's
    ///   alphabet.
    pub fn from_str_radix(input: &str, radix: Radix) -> Result<Self, RadixError> {
        let (negative, body) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let body = if radix == Radix::Hexadecimal {
            body.strip_prefix("0x")
                .or_else(|| body.strip_prefix("0X"))
                .unwrap_or(body)
        } else {
            body
        };

        if body.is_empty() {
            return Err(RadixError::EmptyInput);
        }

        let body = body.trim_start_matches('0');
        if body.is_empty() {
            // All digits were zero.
            return Ok(BigNum::new());
        }

        let hex = match radix {
            Radix::Hexadecimal => body.to_string(),
            Radix::Binary => convert_digits(body, BINARY_DIGITS, HEX_DIGITS)?,
            Radix::Decimal => convert_digits(body, DECIMAL_DIGITS, HEX_DIGITS)?,
        };

        let mut result = Self::from_hex_digits(&hex)?;
        result.set_negative(negative);

        Ok(result)
    }

    /// Emits the value as a digit string in the given base: leading zeros
    /// stripped, uppercase hexadecimal, `-` prefix for negative values,
    /// and `"0"` for zero.
    pub fn to_str_radix(&self, radix: Radix) -> String {
        let hex = self.to_hex_digits();

        let body = match radix {
            Radix::Hexadecimal => hex,
            Radix::Binary => convert_digits(&hex, HEX_DIGITS, BINARY_DIGITS)
                .expect("emitted hex digits are always valid"),
            Radix::Decimal => convert_digits(&hex, HEX_DIGITS, DECIMAL_DIGITS)
                .expect("emitted hex digits are always valid"),
        };

        if self.negative {
            format!("-{body}")
        } else {
            body
        }
    }

    /// Packs a stripped, non-empty hexadecimal digit string into limbs,
    /// eight nibbles per limb, least significant chunk first.
    fn from_hex_digits(hex: &str) -> Result<Self, RadixError> {
        let digits: Vec<char> = hex.chars().collect();

        let mut result = BigNum::new();
        result.limbs.reserve(digits.len().div_ceil(8));

        for chunk in digits.rchunks(8) {
            let mut limb = 0u32;
            for &c in chunk {
                let digit = c.to_digit(16).ok_or(RadixError::InvalidDigit(c))?;
                limb = (limb << 4) | digit;
            }
            result.limbs.push(limb);
        }

        result.normalize();
        Ok(result)
    }

    /// Unpacks the magnitude into an uppercase hexadecimal digit string
    /// with no leading zeros; zero becomes `"0"`.
    fn to_hex_digits(&self) -> String {
        let mut limbs = self.limbs.iter().rev();

        let top = match limbs.next() {
            Some(top) => top,
            None => return String::from("0"),
        };

        let mut out = format!("{top:X}");
        for limb in limbs {
            out.push_str(&format!("{limb:08X}"));
        }

        out
    }
}
