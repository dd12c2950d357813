use thiserror::Error;

/// Reasons a quantity could not be turned into an amount of Wei.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// The input is not a plain decimal number.
    #[error("invalid number: {0:?}")]
    Invalid(String),
    /// The input is a number below zero.
    #[error("negative values are not supported: {0:?}")]
    Negative(String),
    /// The Wei amount does not fit in a 256-bit integer.
    #[error("{0:?} overflows a 256-bit wei amount")]
    Overflow(String),
}

/// The single failure mode of every conversion.
///
/// The underlying [`QuantityError`] is available through [`ConversionError::cause`]
/// and as the error [`source`](std::error::Error::source).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("conversion failed: {source}")]
pub struct ConversionError {
    #[from]
    source: QuantityError,
}

impl ConversionError {
    /// Returns what went wrong.
    pub const fn cause(&self) -> &QuantityError {
        &self.source
    }
}

/// Returned when a unit name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit {0:?}, expected one of: wei, gwei, szabo, finney, ether")]
pub struct UnknownUnit(pub String);
