use serde::{Deserialize, Serialize};

/// Default number of fractional digits kept in a result.
pub const DEFAULT_DECIMAL_PLACES: u32 = 18;

/// Options controlling how a conversion result is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConverterOptions {
    /// Maximum number of fractional digits in a non-integer result.
    /// Extra digits are truncated, never rounded.
    pub decimal_places: u32,
}

impl ConverterOptions {
    /// Create options keeping at most `decimal_places` fractional digits.
    pub const fn with_decimal_places(decimal_places: u32) -> Self {
        Self { decimal_places }
    }
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self { decimal_places: DEFAULT_DECIMAL_PLACES }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_eighteen_places() {
        assert_eq!(ConverterOptions::default().decimal_places, 18);
    }

    #[test]
    fn deserializes_camel_case() {
        let opts: ConverterOptions = serde_json::from_str(r#"{"decimalPlaces":10}"#).unwrap();
        assert_eq!(opts, ConverterOptions::with_decimal_places(10));
    }

    #[test]
    fn missing_field_uses_default() {
        let opts: ConverterOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ConverterOptions::default());
    }
}
