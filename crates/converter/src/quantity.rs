use num_bigint::BigUint;
use num_traits::pow;

use crate::{error::QuantityError, unit::Unit};

/// A validated non-negative decimal number, split around its decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Quantity<'a> {
    integer: &'a str,
    fraction: &'a str,
}

impl<'a> Quantity<'a> {
    /// Parse a plain decimal such as `1`, `0.5`, `.5` or `5.`.
    ///
    /// Surrounding whitespace is ignored. Signs, exponents and digit separators
    /// are not accepted.
    pub(crate) fn parse(input: &'a str) -> Result<Self, QuantityError> {
        let trimmed = input.trim();
        if let Some(unsigned) = trimmed.strip_prefix('-') {
            return Err(if Self::split(unsigned).is_some() {
                QuantityError::Negative(input.to_owned())
            } else {
                QuantityError::Invalid(input.to_owned())
            });
        }
        Self::split(trimmed).ok_or_else(|| QuantityError::Invalid(input.to_owned()))
    }

    fn split(s: &'a str) -> Option<Self> {
        let (integer, fraction) = s.split_once('.').unwrap_or((s, ""));
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty()) || !digits(integer) || !digits(fraction) {
            return None;
        }
        Some(Self { integer, fraction })
    }

    /// Amount of wei this quantity represents in `unit`, truncating sub-wei
    /// fractions.
    pub(crate) fn to_wei(self, unit: Unit) -> BigUint {
        let mantissa = self.integer.bytes().chain(self.fraction.bytes()).fold(
            BigUint::default(),
            |acc, digit| acc * 10u8 + (digit - b'0'),
        );
        let divisor = pow(BigUint::from(10u8), self.fraction.len());
        mantissa * unit.scale() / divisor
    }
}
