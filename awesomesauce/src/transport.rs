//! Outbound transport seam.
//!
//! The [`Gateway`](crate::gateway::Gateway) never talks to the network
//! directly. It hands a serialized request document to a [`Transport`] and
//! gets the raw response body back. The reqwest implementation lives in the
//! `awesomesauce-http` crate; tests plug in a scripted transport.

use std::future::Future;
use std::pin::Pin;

/// A boxed, sendable future with a borrowed lifetime.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Errors returned by a [`Transport`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The server answered with a non-success HTTP status.
    #[error("unexpected HTTP status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// The request could not be sent or the response could not be read.
    #[error("gateway unavailable: {0}")]
    Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wraps any error as [`TransportError::Unavailable`].
    pub fn unavailable<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Unavailable(source.into())
    }

    /// Returns the response body when the gateway still produced a document
    /// worth classifying, i.e. a 4xx or 5xx status.
    #[must_use]
    pub fn into_recoverable_body(self) -> Result<String, Self> {
        match self {
            Self::Status { status, body } if (400..600).contains(&status) => Ok(body),
            other => Err(other),
        }
    }
}

/// Posts a request document and returns the raw response body.
pub trait Transport: Send + Sync {
    /// Sends `body` to `url`.
    ///
    /// Implementations return [`TransportError::Status`] for any non-2xx
    /// answer, carrying the body so the caller can still classify it.
    fn post<'a>(&'a self, url: &'a str, body: String)
    -> BoxFuture<'a, Result<String, TransportError>>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn post<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<String, TransportError>> {
        (**self).post(url, body)
    }
}
