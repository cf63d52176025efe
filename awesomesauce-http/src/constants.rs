//! HTTP-specific constants for the Awesomesauce gateway.

use std::time::Duration;

/// Media type of request and response documents.
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
