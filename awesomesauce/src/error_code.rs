//! Gateway error vocabulary and the caller-facing error taxonomy.
//!
//! The gateway reports failures as a coarse numeric status plus a free-text
//! reason. [`ErrorCode::from_raw`] trusts only a whitelisted subset of those
//! pairs; everything else degrades to [`ErrorCode::Unknown`]. Each canonical
//! code then maps to a [`StandardErrorCode`] and a human-readable message.

use serde::{Deserialize, Serialize};

use crate::proto::response::{NormalizedResponse, Outcome};

/// Caller-facing error codes shared across gateway integrations.
///
/// This is a closed set: the adapter never emits anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardErrorCode {
    /// Merchant credentials were rejected.
    ConfigError,
    /// Generic or unclassified processing failure.
    ProcessingError,
    /// Card number failed the Luhn check.
    IncorrectNumber,
    /// Card number is not valid.
    InvalidNumber,
    /// Card verification value is not valid.
    InvalidCvc,
    /// Expiry date is not valid.
    InvalidExpiryDate,
    /// Issuer asked for the card to be retained.
    PickupCard,
    /// Card has expired.
    ExpiredCard,
}

impl StandardErrorCode {
    /// Returns the `snake_case` string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigError => "config_error",
            Self::ProcessingError => "processing_error",
            Self::IncorrectNumber => "incorrect_number",
            Self::InvalidNumber => "invalid_number",
            Self::InvalidCvc => "invalid_cvc",
            Self::InvalidExpiryDate => "invalid_expiry_date",
            Self::PickupCard => "pickup_card",
            Self::ExpiredCard => "expired_card",
        }
    }
}

impl core::fmt::Display for StandardErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical, gateway-specific error code resolved from a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Top-level `<error>` document; authentication failed.
    Config,
    /// Anything not explicitly recognized.
    Unknown,
    /// Status `04` with reason `luhn`.
    Luhn,
    /// Status `03` with reason `number`.
    Number,
    /// Status `03` with reason `cv2`.
    Cv2,
    /// Status `03` with reason `exp`.
    Exp,
    /// Status `03` with reason `amount`.
    Amount,
    /// Status `05`.
    PickupCard,
    /// Status `06`.
    ExpiredCard,
    /// Status `07`; the referenced transaction does not exist.
    BadReference,
}

/// Standard code and message for a canonical [`ErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMapping {
    /// Caller-facing code.
    pub code: StandardErrorCode,
    /// Message used when the response carries no text of its own.
    pub message: &'static str,
}

impl ErrorCode {
    /// Every canonical code, in mapping-table order.
    pub const ALL: [Self; 10] = [
        Self::Config,
        Self::Unknown,
        Self::Luhn,
        Self::Number,
        Self::Cv2,
        Self::Exp,
        Self::Amount,
        Self::PickupCard,
        Self::ExpiredCard,
        Self::BadReference,
    ];

    /// Returns the mapping-table key for this code.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Unknown => "unknown",
            Self::Luhn => "luhn",
            Self::Number => "number",
            Self::Cv2 => "cv2",
            Self::Exp => "exp",
            Self::Amount => "amount",
            Self::PickupCard => "05",
            Self::ExpiredCard => "06",
            Self::BadReference => "07",
        }
    }

    /// Looks up a code by its mapping-table key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.key() == key)
    }

    /// Resolves a raw `(code, err)` pair from a declined response.
    ///
    /// The reason text is only trusted for status `03` and `04`, and only for
    /// the reasons listed there. Statuses `05`, `06` and `07` ignore it.
    #[must_use]
    pub fn from_raw(raw_code: &str, raw_error: &str) -> Self {
        match (raw_code, raw_error) {
            ("03", "number") => Self::Number,
            ("03", "cv2") => Self::Cv2,
            ("03", "exp") => Self::Exp,
            ("03", "amount") => Self::Amount,
            ("04", "luhn") => Self::Luhn,
            ("05", _) => Self::PickupCard,
            ("06", _) => Self::ExpiredCard,
            ("07", _) => Self::BadReference,
            _ => Self::Unknown,
        }
    }

    /// Returns the standard code and default message for this code.
    #[must_use]
    pub const fn mapping(&self) -> ErrorMapping {
        let (code, message) = match self {
            Self::Config => (StandardErrorCode::ConfigError, "Bad credentials"),
            Self::Unknown => (StandardErrorCode::ProcessingError, "Unknown error"),
            Self::Luhn => (StandardErrorCode::IncorrectNumber, "Fails luhn check"),
            Self::Number => (StandardErrorCode::InvalidNumber, "Invalid CC number"),
            Self::Cv2 => (StandardErrorCode::InvalidCvc, "Invalid CVC"),
            Self::Exp => (StandardErrorCode::InvalidExpiryDate, "Invalid expiry"),
            Self::Amount => (StandardErrorCode::ProcessingError, "Bad amount"),
            Self::PickupCard => (StandardErrorCode::PickupCard, "Pickup Card"),
            Self::ExpiredCard => (StandardErrorCode::ExpiredCard, "Expired Card"),
            Self::BadReference => (StandardErrorCode::ProcessingError, "Bad ref id"),
        };
        ErrorMapping { code, message }
    }
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

/// Returns the mapping for a table key, falling back to the `unknown` entry.
#[must_use]
pub fn resolve_key(key: &str) -> ErrorMapping {
    ErrorCode::from_key(key)
        .unwrap_or(ErrorCode::Unknown)
        .mapping()
}

/// Caller-facing verdict for a normalized response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Whether the gateway returned a transaction id.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Standard error code; `None` on success.
    pub standard_code: Option<StandardErrorCode>,
}

/// Resolves a normalized response into success, message and standard code.
#[must_use]
pub fn resolve(response: &NormalizedResponse) -> Resolution {
    match &response.outcome {
        Outcome::Approved { response_text, .. } => Resolution {
            success: true,
            message: response_text.clone(),
            standard_code: None,
        },
        Outcome::Declined {
            error_code,
            response_text,
        } => {
            let mapping = error_code.mapping();
            Resolution {
                success: false,
                message: response_text
                    .clone()
                    .unwrap_or_else(|| mapping.message.to_owned()),
                standard_code: Some(mapping.code),
            }
        }
    }
}
