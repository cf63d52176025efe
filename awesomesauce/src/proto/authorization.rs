//! Authorization tokens.
//!
//! A token is `"<transaction id>#<operation tag>"`. It is handed to the caller
//! after every successful call and passed back to reference the same
//! transaction in a later capture, void or refund.
//!
//! Decoding never fails. A malformed or empty token yields whatever precedes
//! the first delimiter (possibly the whole token, possibly the empty string),
//! and the remote gateway decides whether that reference exists.

use crate::operation::Operation;

/// Separator between the transaction id and the operation tag.
pub const DELIMITER: char = '#';

/// Encodes a transaction id and the operation that produced it.
#[must_use]
pub fn encode(transaction_id: &str, operation: Operation) -> String {
    format!("{transaction_id}{DELIMITER}{operation}")
}

/// Extracts the transaction id from a token.
#[must_use]
pub fn decode(token: &str) -> &str {
    AuthorizationToken::parse(token).transaction_id()
}

/// Borrowed view over the two halves of an authorization token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationToken<'a> {
    transaction_id: &'a str,
    operation_tag: Option<&'a str>,
}

impl<'a> AuthorizationToken<'a> {
    /// Splits a token on its first delimiter.
    #[must_use]
    pub fn parse(token: &'a str) -> Self {
        match token.split_once(DELIMITER) {
            Some((transaction_id, tag)) => Self {
                transaction_id,
                operation_tag: Some(tag),
            },
            None => Self {
                transaction_id: token,
                operation_tag: None,
            },
        }
    }

    /// Returns the transaction id part.
    #[must_use]
    pub const fn transaction_id(&self) -> &'a str {
        self.transaction_id
    }

    /// Returns the raw operation tag, if the token carried one.
    #[must_use]
    pub const fn operation_tag(&self) -> Option<&'a str> {
        self.operation_tag
    }

    /// Returns the operation that produced the token, if the tag is known.
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.operation_tag.and_then(|tag| tag.parse().ok())
    }
}
