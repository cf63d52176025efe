#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Protocol translation layer for the Awesomesauce payment gateway.
//!
//! The gateway speaks a small XML dialect over HTTP POST. This crate turns
//! caller-level card operations (purchase, authorize, capture, refund, void,
//! verify) into request documents, and folds the gateway's loosely shaped
//! answers (XML documents, bare error roots, HTML error pages) into a uniform
//! [`Response`] with a standard error code.
//!
//! The network itself sits behind the [`Transport`] trait. The
//! `awesomesauce-http` crate provides a reqwest implementation.
//!
//! # Modules
//!
//! - [`gateway`] - Operation orchestrator and caller-facing response
//! - [`proto`] - Request documents, response parsing and authorization tokens
//! - [`error_code`] - Gateway error vocabulary and the standard error taxonomy
//! - [`operation`] - Operation names, endpoints and wire actions
//! - [`scrub`] - Transcript redaction
//! - [`config`] - Credentials, environments and settings
//! - [`transport`] - Outbound transport trait
//! - [`money`] / [`card`] - Payment inputs
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod card;
pub mod config;
pub mod error;
pub mod error_code;
pub mod gateway;
pub mod money;
pub mod operation;
pub mod proto;
pub mod scrub;
pub mod transport;

pub use card::{CardBrand, CreditCard};
pub use config::{ConfigError, Credentials, Environment, GatewayConfig};
pub use error::GatewayError;
pub use error_code::StandardErrorCode;
pub use gateway::{Gateway, Response, TransactionOptions};
pub use money::Money;
pub use operation::Operation;
pub use transport::{BoxFuture, Transport, TransportError};
