//! Unit descriptors and denominated amounts
//!
//! Every amount in the ledger is denominated in a unit: a fiat currency, an
//! exchange-traded equity, or some other asset class. A unit is identified by
//! a compound token `category:symbol` (`cash:USD`, `equity:AAPL`); this module
//! provides the parsed value type so call sites never split strings ad hoc.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while constructing a unit descriptor
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// Descriptor is missing the `:` between category and symbol
    #[error("Malformed unit descriptor: {0:?} (expected \"category:symbol\")")]
    Malformed(String),

    /// Category segment is empty or contains a delimiter
    #[error("Invalid unit category: {0:?}")]
    InvalidCategory(String),

    /// Symbol segment is empty or contains a delimiter
    #[error("Invalid unit symbol: {0:?}")]
    InvalidSymbol(String),
}

/// Identifies the unit an amount is denominated in.
///
/// A `UnitId` is the parsed form of a compound descriptor token: a category
/// (`cash`, `equity`, ...) plus the symbol within that category (`USD`,
/// `AAPL`, ...). The category set is open; the segments themselves are
/// validated so that every constructed `UnitId` has a canonical string form
/// that round-trips through [`FromStr`].
///
/// Malformed descriptors are a declared failure at construction and
/// deserialization time; there is no fallback placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitId {
    category: String,
    symbol: String,
}

impl UnitId {
    /// Category token for fiat currencies
    pub const CASH: &'static str = "cash";
    /// Category token for exchange-traded equities
    pub const EQUITY: &'static str = "equity";
    /// Category token for crypto currencies
    pub const CRYPTO: &'static str = "crypto";

    /// Creates a unit from a category and a symbol.
    ///
    /// Both segments must be non-empty and free of the `:` delimiter.
    pub fn new(
        category: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Result<Self, UnitError> {
        let category = category.into();
        let symbol = symbol.into();

        check_segment(&category, UnitError::InvalidCategory)?;
        check_segment(&symbol, UnitError::InvalidSymbol)?;

        Ok(Self { category, symbol })
    }

    /// Creates a fiat currency unit (`cash:<symbol>`)
    pub fn cash(symbol: impl Into<String>) -> Result<Self, UnitError> {
        Self::new(Self::CASH, symbol)
    }

    /// Creates an equity unit (`equity:<symbol>`)
    pub fn equity(symbol: impl Into<String>) -> Result<Self, UnitError> {
        Self::new(Self::EQUITY, symbol)
    }

    /// Creates a crypto currency unit (`crypto:<symbol>`)
    pub fn crypto(symbol: impl Into<String>) -> Result<Self, UnitError> {
        Self::new(Self::CRYPTO, symbol)
    }

    /// Returns the category segment
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the symbol segment, which is also the display unit
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns true when this unit is the given fiat currency
    pub fn is_cash(&self, symbol: &str) -> bool {
        self.category == Self::CASH && self.symbol == symbol
    }
}

fn check_segment(
    segment: &str,
    err: fn(String) -> UnitError,
) -> Result<(), UnitError> {
    if segment.is_empty() || segment.contains(':') {
        return Err(err(segment.to_string()));
    }
    Ok(())
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.symbol)
    }
}

impl FromStr for UnitId {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, symbol) = s
            .split_once(':')
            .ok_or_else(|| UnitError::Malformed(s.to_string()))?;
        Self::new(category, symbol)
    }
}

impl Serialize for UnitId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UnitId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An amount paired with the unit it is denominated in.
///
/// Serializes as the 2-element sequence `[amount, "category:symbol"]`, the
/// form ledger records carry on the wire. Amounts use [`Decimal`] so values
/// survive round-trips without floating-point drift.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitValue(Decimal, UnitId);

impl UnitValue {
    /// Creates a denominated amount
    pub fn new(amount: Decimal, unit: UnitId) -> Self {
        Self(amount, unit)
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the unit
    pub fn unit(&self) -> &UnitId {
        &self.1
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unit_creation() {
        let unit = UnitId::new("cash", "USD").unwrap();
        assert_eq!(unit.category(), "cash");
        assert_eq!(unit.symbol(), "USD");
    }

    #[test]
    fn test_category_constructors() {
        assert_eq!(UnitId::cash("CAD").unwrap().to_string(), "cash:CAD");
        assert_eq!(UnitId::equity("AAPL").unwrap().to_string(), "equity:AAPL");
        assert_eq!(UnitId::crypto("BTC").unwrap().to_string(), "crypto:BTC");
    }

    #[test]
    fn test_parse_round_trip() {
        let unit: UnitId = "equity:BRK.B".parse().unwrap();
        assert_eq!(unit.category(), "equity");
        assert_eq!(unit.symbol(), "BRK.B");
        assert_eq!(unit.to_string().parse::<UnitId>().unwrap(), unit);
    }

    #[test]
    fn test_rejects_missing_delimiter() {
        assert_eq!(
            "USD".parse::<UnitId>(),
            Err(UnitError::Malformed("USD".to_string()))
        );
        assert_eq!(
            "".parse::<UnitId>(),
            Err(UnitError::Malformed(String::new()))
        );
    }

    #[test]
    fn test_rejects_empty_segments() {
        assert_eq!(
            "cash:".parse::<UnitId>(),
            Err(UnitError::InvalidSymbol(String::new()))
        );
        assert_eq!(
            ":USD".parse::<UnitId>(),
            Err(UnitError::InvalidCategory(String::new()))
        );
    }

    #[test]
    fn test_rejects_extra_delimiter() {
        assert_eq!(
            "cash:USD:x".parse::<UnitId>(),
            Err(UnitError::InvalidSymbol("USD:x".to_string()))
        );
        assert!(UnitId::new("ca:sh", "USD").is_err());
        assert!(UnitId::cash("US:D").is_err());
    }

    #[test]
    fn test_is_cash() {
        let cad = UnitId::cash("CAD").unwrap();
        assert!(cad.is_cash("CAD"));
        assert!(!cad.is_cash("USD"));
        assert!(!UnitId::equity("CAD").unwrap().is_cash("CAD"));
    }

    #[test]
    fn test_serde_string_form() {
        let unit = UnitId::cash("USD").unwrap();
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(json, "\"cash:USD\"");

        let back: UnitId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, unit);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        assert!(serde_json::from_str::<UnitId>("\"USD\"").is_err());
        assert!(serde_json::from_str::<UnitId>("\"cash:\"").is_err());
        assert!(serde_json::from_str::<UnitId>("\"cash:USD:x\"").is_err());
    }

    #[test]
    fn test_unit_value_accessors() {
        let value = UnitValue::new(dec!(100.50), UnitId::cash("USD").unwrap());
        assert_eq!(value.amount(), dec!(100.50));
        assert_eq!(value.unit().symbol(), "USD");
    }

    #[test]
    fn test_unit_value_wire_form() {
        let value = UnitValue::new(dec!(100), UnitId::cash("USD").unwrap());
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!(["100", "cash:USD"]));

        // Amounts deserialize from plain JSON numbers as well.
        let back: UnitValue =
            serde_json::from_value(serde_json::json!([100, "cash:USD"])).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_unit_value_display() {
        let value = UnitValue::new(dec!(100), UnitId::cash("USD").unwrap());
        assert_eq!(value.to_string(), "100 USD");

        let value = UnitValue::new(dec!(10.5), UnitId::equity("AAPL").unwrap());
        assert_eq!(value.to_string(), "10.5 AAPL");
    }
}
