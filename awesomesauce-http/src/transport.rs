//! Reqwest-backed [`Transport`].
//!
//! [`HttpTransport`] posts a request document with XML content negotiation
//! headers and hands back the raw response body. It does not follow
//! redirects: a 3xx answer surfaces as [`TransportError::Status`] and the
//! gateway treats it as unclassifiable.
//!
//! When the `telemetry` feature is enabled, request and response bodies are
//! logged at trace level after scrubbing, so card data and the merchant
//! secret never reach the logs.

use std::time::Duration;

use awesomesauce::transport::{BoxFuture, Transport, TransportError};
use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

#[cfg(feature = "telemetry")]
use awesomesauce::scrub::scrub;

use crate::constants::{DEFAULT_TIMEOUT, XML_CONTENT_TYPE};
use crate::error::HttpError;

/// Configuration for [`HttpTransport`].
pub struct HttpTransportConfig {
    /// Per-request timeout.
    pub timeout: Duration,

    /// Extra headers sent with every request.
    pub headers: HeaderMap,

    /// Optional pre-configured reqwest client. If `None`, a new client is
    /// created with the configured timeout and redirects disabled.
    pub http_client: Option<reqwest::Client>,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            headers: HeaderMap::new(),
            http_client: None,
        }
    }
}

impl HttpTransportConfig {
    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidHeader`] if the name or value is not a
    /// valid HTTP header.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, HttpError> {
        let invalid = |reason: String| HttpError::InvalidHeader {
            name: name.to_owned(),
            reason,
        };
        let header_name = HeaderName::try_from(name).map_err(|e| invalid(e.to_string()))?;
        let header_value = HeaderValue::try_from(value).map_err(|e| invalid(e.to_string()))?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Sets a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl std::fmt::Debug for HttpTransportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransportConfig")
            .field("timeout", &self.timeout)
            .field("header_count", &self.headers.len())
            .field("has_http_client", &self.http_client.is_some())
            .finish()
    }
}

/// Async HTTP transport for the Awesomesauce gateway.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    headers: HeaderMap,
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Build`] if the reqwest client cannot be built.
    pub fn new(config: HttpTransportConfig) -> Result<Self, HttpError> {
        let client = match config.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(config.timeout)
                .redirect(reqwest::redirect::Policy::none())
                .build()?,
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(XML_CONTENT_TYPE));
        headers.extend(config.headers);

        Ok(Self {
            client,
            headers,
            timeout: config.timeout,
        })
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn post_xml(&self, url: &str, body: String) -> Result<String, TransportError> {
        #[cfg(feature = "telemetry")]
        tracing::trace!(url, request = %scrub(&body), "awesomesauce.http.request");

        let response = self
            .client
            .post(url)
            .headers(self.headers.clone())
            .timeout(self.timeout)
            .body(body)
            .send()
            .await
            .map_err(TransportError::unavailable)?;

        let status = response.status();
        let text = response.text().await.map_err(TransportError::unavailable)?;

        #[cfg(feature = "telemetry")]
        tracing::trace!(
            status = status.as_u16(),
            response = %scrub(&text),
            "awesomesauce.http.response"
        );

        if status.is_success() {
            Ok(text)
        } else {
            Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}

impl Transport for HttpTransport {
    fn post<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<String, TransportError>> {
        Box::pin(self.post_xml(url, body))
    }
}
