#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Reqwest transport for the Awesomesauce payment gateway adapter.
//!
//! Provides [`HttpTransport`], an implementation of
//! [`awesomesauce::Transport`] that POSTs XML request documents over HTTP,
//! and [`gateway`] to wire it to an [`awesomesauce::Gateway`].
//!
//! # Modules
//!
//! - [`constants`] - Content types and default timeouts
//! - [`error`] - Transport construction errors
//! - [`transport`] - The reqwest-backed [`HttpTransport`]
//!
//! # Example
//!
//! ```no_run
//! use awesomesauce::{CreditCard, GatewayConfig, Money, TransactionOptions};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = awesomesauce_http::gateway(GatewayConfig::from_env()?)?;
//! let card = CreditCard::new("4111111111111111", "123", 9, 2030);
//! let response = gateway
//!     .purchase(&Money::new(100), &card, &TransactionOptions::new())
//!     .await?;
//! println!("{}: {:?}", response.message, response.authorization);
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod error;
pub mod transport;

use awesomesauce::{Gateway, GatewayConfig};

pub use error::HttpError;
pub use transport::{HttpTransport, HttpTransportConfig};

/// A gateway client backed by [`HttpTransport`].
pub type HttpGateway = Gateway<HttpTransport>;

/// Creates a gateway client with a default [`HttpTransport`].
///
/// # Errors
///
/// Returns [`HttpError`] if the HTTP client cannot be built.
pub fn gateway(config: GatewayConfig) -> Result<HttpGateway, HttpError> {
    let transport = HttpTransport::new(HttpTransportConfig::default())?;
    Ok(Gateway::new(config, transport))
}
