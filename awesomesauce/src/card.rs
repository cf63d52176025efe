//! Card payment instrument.
//!
//! The adapter does not validate card data; it forwards whatever the caller
//! collected and lets the gateway reject it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Card brands known to the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    /// Visa.
    Visa,
    /// Mastercard.
    Master,
    /// American Express.
    AmericanExpress,
}

impl CardBrand {
    /// Returns the `snake_case` brand name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Master => "master",
            Self::AmericanExpress => "american_express",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A credit card as forwarded to the gateway.
#[derive(Clone, PartialEq, Eq)]
pub struct CreditCard {
    /// Primary account number.
    pub number: String,
    /// Card verification value.
    pub verification_value: String,
    /// Expiry month, `1..=12`.
    pub month: u8,
    /// Four-digit expiry year.
    pub year: u16,
    /// Cardholder first name.
    pub first_name: Option<String>,
    /// Cardholder last name.
    pub last_name: Option<String>,
}

impl CreditCard {
    /// Creates a card without a cardholder name.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        verification_value: impl Into<String>,
        month: u8,
        year: u16,
    ) -> Self {
        Self {
            number: number.into(),
            verification_value: verification_value.into(),
            month,
            year,
            first_name: None,
            last_name: None,
        }
    }

    /// Sets the cardholder name.
    #[must_use]
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    /// Returns the expiry date as `MMYYYY`.
    #[must_use]
    pub fn expiry(&self) -> String {
        format!("{:02}{:04}", self.month, self.year)
    }

    /// Returns the full cardholder name, or `None` when no part is set.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        (!name.is_empty()).then_some(name)
    }

    /// Returns the last four digits of the card number.
    #[must_use]
    pub fn last_digits(&self) -> &str {
        let start = self.number.len().saturating_sub(4);
        self.number.get(start..).unwrap_or_default()
    }
}

impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("number", &format_args!("XXXX{}", self.last_digits()))
            .field("verification_value", &"[FILTERED]")
            .field("month", &self.month)
            .field("year", &self.year)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}
