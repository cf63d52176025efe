//! Transaction amounts.
//!
//! Amounts travel through the adapter as integer minor units (cents) and are
//! rendered as a two-decimal string on the wire (`100` becomes `"1.00"`).

use std::fmt;

use rust_decimal::Decimal;

/// Number of decimal places used on the wire.
pub const WIRE_SCALE: u32 = 2;

/// An amount in minor units with an optional ISO 4217 currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    minor_units: i64,
    currency: Option<String>,
}

impl Money {
    /// Creates an amount without an explicit currency.
    #[must_use]
    pub const fn new(minor_units: i64) -> Self {
        Self {
            minor_units,
            currency: None,
        }
    }

    /// Sets the currency of this amount.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// Returns the currency carried by this amount, if any.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Returns the decimal representation of this amount.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.minor_units, WIRE_SCALE)
    }

    /// Formats the amount as sent in the `<amount>` element.
    #[must_use]
    pub fn to_wire_string(&self) -> String {
        self.to_decimal().to_string()
    }
}

impl From<i64> for Money {
    fn from(minor_units: i64) -> Self {
        Self::new(minor_units)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.currency {
            Some(currency) => write!(f, "{} {currency}", self.to_decimal()),
            None => write!(f, "{}", self.to_decimal()),
        }
    }
}
