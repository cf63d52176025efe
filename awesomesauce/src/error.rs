//! Error types returned by the gateway.
//!
//! Gateway-declared failures (declines, bad credentials, error pages) are not
//! errors: they come back as a [`Response`](crate::gateway::Response) with
//! `success == false`. [`GatewayError`] only covers calls that produced no
//! classifiable answer at all.

use crate::transport::TransportError;

/// A gateway call that could not be completed.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The transport failed without a 4xx/5xx body to classify.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
