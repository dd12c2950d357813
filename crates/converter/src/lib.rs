//! Exact conversion between Ethereum denominations.
//!
//! Amounts are handled as decimal strings and scaled with arbitrary-precision
//! integers, so converting between Wei and Ether never loses a digit.
//!
//! ```
//! use converter::{Unit, convert_default};
//!
//! assert_eq!(convert_default("1", Unit::Ether, Unit::Gwei).unwrap(), "1000000000");
//! assert_eq!(convert_default("1", Unit::Wei, Unit::Ether).unwrap(), "0.000000000000000001");
//! ```

/// Conversion entry points
pub mod convert;
/// Error types
pub mod error;
/// Conversion options
pub mod options;
/// Decimal quantity parsing
mod quantity;
/// Ethereum denominations
pub mod unit;

pub use convert::{Denomination, convert, convert_all, convert_default, to_wei_u256};
pub use error::{ConversionError, QuantityError, UnknownUnit};
pub use options::{ConverterOptions, DEFAULT_DECIMAL_PLACES};
pub use unit::Unit;
