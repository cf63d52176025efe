//! Gateway operations and their wire-level routing.
//!
//! Every logical operation maps to an endpoint basename (the last path
//! segment under `/api/`) and a wire action keyword carried in the
//! `<action>` element of the request document.

use std::fmt;
use std::str::FromStr;

/// A single wire-level gateway operation.
///
/// `verify` is not listed here: it is composed from [`Operation::AuthorizeOnly`]
/// followed by [`Operation::Void`] by the [`Gateway`](crate::gateway::Gateway).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Authorize and capture in one step.
    Sale,
    /// Place a hold without capturing.
    AuthorizeOnly,
    /// Capture a previously authorized transaction.
    Capture,
    /// Cancel a previously authorized transaction.
    Void,
    /// Return funds of a previously settled transaction.
    Refund,
}

impl Operation {
    /// All operations, in table order.
    pub const ALL: [Self; 5] = [
        Self::Sale,
        Self::AuthorizeOnly,
        Self::Capture,
        Self::Void,
        Self::Refund,
    ];

    /// Returns the tag used in authorization tokens and synthesized messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::AuthorizeOnly => "authonly",
            Self::Capture => "capture",
            Self::Void => "void",
            Self::Refund => "refund",
        }
    }

    /// Returns the endpoint basename this operation is posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Sale | Self::AuthorizeOnly => "auth",
            Self::Capture | Self::Void | Self::Refund => "ref",
        }
    }

    /// Returns the keyword sent in the `<action>` element.
    ///
    /// Void and refund share the `cancel` action; the gateway decides based
    /// on the state of the referenced transaction.
    #[must_use]
    pub const fn wire_action(&self) -> &'static str {
        match self {
            Self::Sale => "purch",
            Self::AuthorizeOnly => "auth",
            Self::Capture => "capture",
            Self::Void | Self::Refund => "cancel",
        }
    }

    /// Returns `true` for operations that reference an earlier transaction.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Capture | Self::Void | Self::Refund)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown operation tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation tag: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_owned()))
    }
}
