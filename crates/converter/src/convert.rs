use alloy_primitives::U256;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    error::{ConversionError, QuantityError},
    options::ConverterOptions,
    quantity::Quantity,
    unit::Unit,
};

/// A value expressed in one particular unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    /// The unit the amount is expressed in.
    pub unit: Unit,
    /// The amount, as a decimal string.
    pub amount: String,
}

/// Convert a decimal `value` from one unit to another.
///
/// Empty or whitespace-only input converts to an empty string. Converting to
/// the same unit returns `value` untouched once it has been validated.
/// Fractional digits beyond [`ConverterOptions::decimal_places`] are truncated
/// and trailing zeros are dropped.
///
/// ```
/// use converter::{ConverterOptions, Unit, convert};
///
/// let opts = ConverterOptions::default();
/// assert_eq!(convert("0.5", Unit::Ether, Unit::Finney, opts).unwrap(), "500");
/// assert!(convert("-1", Unit::Ether, Unit::Wei, opts).is_err());
/// ```
pub fn convert(
    value: &str,
    from: Unit,
    to: Unit,
    options: ConverterOptions,
) -> Result<String, ConversionError> {
    if value.trim().is_empty() {
        return Ok(String::new());
    }

    debug!(value, %from, %to, decimal_places = options.decimal_places, "Converting");
    let quantity = Quantity::parse(value)?;
    if from == to {
        return Ok(value.to_owned());
    }

    let wei = quantity.to_wei(from);
    trace!(%wei, "Scaled to wei");

    let scale = to.scale();
    let quotient = &wei / &scale;
    let remainder = &wei % &scale;
    if remainder.is_zero() {
        return Ok(quotient.to_string());
    }

    let width = to.exponent() as usize;
    let digits = remainder.to_string();
    let mut fraction = format!("{digits:0>width$}");
    fraction.truncate(options.decimal_places as usize);
    let formatted = format!("{quotient}.{fraction}");
    let result = formatted.trim_end_matches('0').trim_end_matches('.').to_owned();
    debug!(%result, "Converted");
    Ok(result)
}

/// [`convert`] with [`ConverterOptions::default`].
pub fn convert_default(value: &str, from: Unit, to: Unit) -> Result<String, ConversionError> {
    convert(value, from, to, ConverterOptions::default())
}

/// Express `value` in every unit, smallest unit first.
///
/// Empty input yields a row per unit with an empty amount.
pub fn convert_all(
    value: &str,
    from: Unit,
    options: ConverterOptions,
) -> Result<Vec<Denomination>, ConversionError> {
    Unit::ALL
        .into_iter()
        .map(|unit| Ok(Denomination { unit, amount: convert(value, from, unit, options)? }))
        .collect()
}

/// Exact amount of wei in `value` as a 256-bit integer.
///
/// Fractions of a wei are truncated. Empty input is rejected since there is no
/// empty integer.
pub fn to_wei_u256(value: &str, from: Unit) -> Result<U256, ConversionError> {
    let wei = Quantity::parse(value)?.to_wei(from);
    U256::try_from_be_slice(&wei.to_bytes_be())
        .ok_or_else(|| QuantityError::Overflow(value.to_owned()).into())
}
