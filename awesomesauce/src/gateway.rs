//! Operation orchestrator.
//!
//! [`Gateway`] turns caller-level operations into request documents, posts
//! them through a [`Transport`], and folds the raw answer into a caller-facing
//! [`Response`].
//!
//! ## Error Handling
//!
//! A declined card, rejected credentials or a gateway error page all resolve
//! to `Ok(Response { success: false, .. })`. A 4xx/5xx answer is still parsed,
//! since the gateway reports failures that way. Only a transport failure with
//! nothing to classify (connection refused, timeout, a redirect) surfaces as
//! [`GatewayError`].

#[cfg(feature = "telemetry")]
use tracing::instrument;

use crate::card::{CardBrand, CreditCard};
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::error_code::{self, Resolution, StandardErrorCode};
use crate::money::Money;
use crate::operation::Operation;
use crate::proto::response::{self, NormalizedResponse};
use crate::proto::{RequestParameters, authorization, request};
use crate::scrub;
use crate::transport::Transport;

/// Human-readable gateway name.
pub const DISPLAY_NAME: &str = "Awesomesauce";

/// Public homepage of the gateway.
pub const HOMEPAGE_URL: &str = "http://asgateway.com";

/// ISO 3166-1 alpha-2 codes of the countries the gateway accepts merchants from.
pub const SUPPORTED_COUNTRIES: [&str; 1] = ["US"];

/// Card brands the gateway accepts.
pub const SUPPORTED_CARD_TYPES: [CardBrand; 3] = [
    CardBrand::Visa,
    CardBrand::Master,
    CardBrand::AmericanExpress,
];

/// Amount authorized (and immediately voided) by [`Gateway::verify`], in minor units.
pub const VERIFY_AMOUNT: i64 = 100;

/// Per-call options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionOptions {
    /// Overrides the cardholder name taken from the card.
    pub customer_name: Option<String>,
    /// Overrides the currency of the amount and the configured default.
    pub currency: Option<String>,
}

impl TransactionOptions {
    /// Creates empty options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            customer_name: None,
            currency: None,
        }
    }

    /// Sets the customer name.
    #[must_use]
    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// Caller-facing result of a gateway operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Whether the gateway returned a transaction id.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Token for follow-up operations, present only on success.
    pub authorization: Option<String>,
    /// Standard error code, present only on failure.
    pub error_code: Option<StandardErrorCode>,
    /// Whether the call went to the sandbox.
    pub test: bool,
    /// The normalized response the verdict was derived from.
    pub params: NormalizedResponse,
}

/// Awesomesauce gateway client.
#[derive(Debug, Clone)]
pub struct Gateway<T> {
    config: GatewayConfig,
    transport: T,
}

impl<T: Transport> Gateway<T> {
    /// Creates a gateway client.
    #[must_use]
    pub const fn new(config: GatewayConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns [`DISPLAY_NAME`].
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        DISPLAY_NAME
    }

    /// Returns [`HOMEPAGE_URL`].
    #[must_use]
    pub const fn homepage_url(&self) -> &'static str {
        HOMEPAGE_URL
    }

    /// Returns [`SUPPORTED_COUNTRIES`].
    #[must_use]
    pub const fn supported_countries(&self) -> &'static [&'static str] {
        &SUPPORTED_COUNTRIES
    }

    /// Returns [`SUPPORTED_CARD_TYPES`].
    #[must_use]
    pub const fn supported_card_types(&self) -> &'static [CardBrand] {
        &SUPPORTED_CARD_TYPES
    }

    /// Returns `true` if the gateway accepts cards of `brand`.
    #[must_use]
    pub fn supports_card_type(&self, brand: CardBrand) -> bool {
        SUPPORTED_CARD_TYPES.contains(&brand)
    }

    /// Returns `true`; transcripts of this gateway can be scrubbed.
    #[must_use]
    pub const fn supports_scrubbing(&self) -> bool {
        true
    }

    /// Redacts card data and merchant secret from a transcript.
    #[must_use]
    pub fn scrub(&self, transcript: &str) -> String {
        scrub::scrub(transcript)
    }

    /// Authorizes and captures `money` in one step.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the transport fails without a response body.
    pub async fn purchase(
        &self,
        money: &Money,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let params = self.card_parameters(money, card, options);
        self.commit(Operation::Sale, params).await
    }

    /// Places a hold of `money` on the card.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the transport fails without a response body.
    pub async fn authorize(
        &self,
        money: &Money,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let params = self.card_parameters(money, card, options);
        self.commit(Operation::AuthorizeOnly, params).await
    }

    /// Captures a previous authorization.
    ///
    /// The gateway captures the full authorized amount; `money` is accepted
    /// for interface parity and not sent.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the transport fails without a response body.
    pub async fn capture(
        &self,
        _money: &Money,
        authorization: &str,
        _options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        self.commit(Operation::Capture, reference_parameters(authorization))
            .await
    }

    /// Refunds a previous transaction.
    ///
    /// The gateway refunds the full amount; `money` is accepted for interface
    /// parity and not sent.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the transport fails without a response body.
    pub async fn refund(
        &self,
        _money: &Money,
        authorization: &str,
        _options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        self.commit(Operation::Refund, reference_parameters(authorization))
            .await
    }

    /// Cancels a previous authorization.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the transport fails without a response body.
    pub async fn void(
        &self,
        authorization: &str,
        _options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        self.commit(Operation::Void, reference_parameters(authorization))
            .await
    }

    /// Checks a card by authorizing [`VERIFY_AMOUNT`] and voiding it.
    ///
    /// Returns the authorize response. The void is only attempted after a
    /// successful authorize, and its outcome never affects the result.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the authorize call fails without a
    /// response body.
    pub async fn verify(
        &self,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let response = self
            .authorize(&Money::new(VERIFY_AMOUNT), card, options)
            .await?;
        if let Some(authorization) = response.authorization.as_deref() {
            let void = self.void(authorization, options).await;
            log_discarded_void(&void);
        }
        Ok(response)
    }

    fn card_parameters(
        &self,
        money: &Money,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> RequestParameters {
        let currency = options
            .currency
            .as_deref()
            .or_else(|| money.currency())
            .unwrap_or(&self.config.default_currency);

        let mut params = RequestParameters::new();
        params
            .insert("amount", money.to_wire_string())
            .insert("currency", currency)
            .insert("number", card.number.as_str())
            .insert("cv2", card.verification_value.as_str())
            .insert("exp", card.expiry());
        if let Some(name) = options.customer_name.clone().or_else(|| card.name()) {
            params.insert("name", name);
        }
        params
    }

    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "awesomesauce.gateway.commit",
            skip_all,
            fields(operation = %operation, endpoint = operation.endpoint()),
            err
        )
    )]
    async fn commit(
        &self,
        operation: Operation,
        params: RequestParameters,
    ) -> Result<Response, GatewayError> {
        let url = self.config.endpoint_url(operation.endpoint());
        let body = request::build(operation, &params, &self.config.credentials);

        let raw = match self.transport.post(&url, body).await {
            Ok(raw) => raw,
            Err(err) => err.into_recoverable_body()?,
        };

        Ok(self.respond(operation, response::parse(&raw, operation)))
    }

    fn respond(&self, operation: Operation, normalized: NormalizedResponse) -> Response {
        let resolution = error_code::resolve(&normalized);
        let authorization = normalized
            .transaction_id()
            .map(|id| authorization::encode(id, operation));

        log_declined(operation, &resolution, &normalized);

        Response {
            success: resolution.success,
            message: resolution.message,
            authorization,
            error_code: resolution.standard_code,
            test: self.config.is_test(),
            params: normalized,
        }
    }
}

fn reference_parameters(authorization: &str) -> RequestParameters {
    let mut params = RequestParameters::new();
    params.insert("ref", authorization::decode(authorization));
    params
}

#[cfg(feature = "telemetry")]
fn log_declined(operation: Operation, resolution: &Resolution, normalized: &NormalizedResponse) {
    if !resolution.success {
        tracing::debug!(
            operation = %operation,
            error_code = ?resolution.standard_code,
            malformed = normalized.malformed,
            message = %resolution.message,
            "gateway declined"
        );
    }
}

#[cfg(not(feature = "telemetry"))]
const fn log_declined(_: Operation, _: &Resolution, _: &NormalizedResponse) {}

#[cfg(feature = "telemetry")]
fn log_discarded_void(result: &Result<Response, GatewayError>) {
    match result {
        Ok(void) if void.success => {}
        Ok(void) => tracing::warn!(message = %void.message, "verify void declined"),
        Err(err) => tracing::warn!(error = %err, "verify void failed"),
    }
}

#[cfg(not(feature = "telemetry"))]
fn log_discarded_void(_result: &Result<Response, GatewayError>) {}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::config::{Credentials, Environment};
    use crate::error_code::ErrorCode;
    use crate::transport::{BoxFuture, TransportError};

    const SUCCESSFUL_PURCHASE: &str = "<response><success>true</success><id>40292</id></response>";
    const FAILED_PURCHASE: &str =
        "<response><success>false</success><code>04</code><err>luhn</err></response>";
    const SUCCESSFUL_CAPTURE: &str = "<response><success>true</success><id>43622</id></response>";
    const BAD_REFERENCE: &str = "<response><success>false</success><code>07</code></response>";
    const OOPS_PAGE: &str = "<h1>Oops</h1><p>We're sorry, but something went wrong.</p>";

    /// Replays scripted replies and records every request.
    #[derive(Default)]
    struct MockTransport {
        replies: Mutex<VecDeque<Result<String, TransportError>>>,
        requests: Mutex<Vec<(String, String)>>,
    }

    impl MockTransport {
        fn with(replies: Vec<Result<String, TransportError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::default(),
            }
        }

        fn ok(bodies: &[&str]) -> Self {
            Self::with(bodies.iter().map(|body| Ok((*body).to_owned())).collect())
        }

        fn requests(&self) -> Vec<(String, String)> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for MockTransport {
        fn post<'a>(
            &'a self,
            url: &'a str,
            body: String,
        ) -> BoxFuture<'a, Result<String, TransportError>> {
            self.requests.lock().unwrap().push((url.to_owned(), body));
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::unavailable("no scripted reply")));
            Box::pin(async move { reply })
        }
    }

    fn gateway(transport: MockTransport) -> Gateway<MockTransport> {
        let config = GatewayConfig::new(Credentials::new("spreedly", "56mP4zY8qQ"))
            .with_environment(Environment::Test);
        Gateway::new(config, transport)
    }

    fn card() -> CreditCard {
        CreditCard::new("4111111111111111", "123", 9, 2030).with_name("Longbob", "Longsen")
    }

    fn amount() -> Money {
        Money::new(100)
    }

    fn options() -> TransactionOptions {
        TransactionOptions::new()
    }

    #[tokio::test]
    async fn test_successful_purchase() {
        let gateway = gateway(MockTransport::ok(&[SUCCESSFUL_PURCHASE]));
        let response = gateway
            .purchase(&amount(), &card(), &options())
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.message, "sale succeeded");
        assert_eq!(response.authorization.as_deref(), Some("40292#sale"));
        assert_eq!(response.error_code, None);
        assert!(response.test);

        let requests = gateway.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "http://sandbox.asgateway.com/api/auth");
        assert_eq!(
            requests[0].1,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><request>\
             <action>purch</action><merchant>spreedly</merchant><secret>56mP4zY8qQ</secret>\
             <amount>1.00</amount><currency>USD</currency><number>4111111111111111</number>\
             <cv2>123</cv2><exp>092030</exp><name>Longbob Longsen</name></request>"
        );
    }

    #[tokio::test]
    async fn test_failed_purchase() {
        let gateway = gateway(MockTransport::ok(&[FAILED_PURCHASE]));
        let response = gateway
            .purchase(&amount(), &card(), &options())
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "Fails luhn check");
        assert_eq!(response.error_code, Some(StandardErrorCode::IncorrectNumber));
        assert_eq!(response.authorization, None);
        assert_eq!(response.params.error_code(), Some(ErrorCode::Luhn));
    }

    #[tokio::test]
    async fn test_pickup_card_ignores_reason() {
        let gateway = gateway(MockTransport::ok(&[
            "<response><success>false</success><code>05</code><err>anything</err></response>",
        ]));
        let response = gateway
            .purchase(&amount(), &card(), &options())
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "Pickup Card");
        assert_eq!(response.error_code, Some(StandardErrorCode::PickupCard));
        assert_eq!(response.authorization, None);
    }

    #[tokio::test]
    async fn test_successful_authorize() {
        let gateway = gateway(MockTransport::ok(&[SUCCESSFUL_PURCHASE]));
        let response = gateway
            .authorize(&amount(), &card(), &options())
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.message, "authonly succeeded");
        assert_eq!(response.authorization.as_deref(), Some("40292#authonly"));
        let requests = gateway.transport().requests();
        assert!(requests[0].1.contains("<action>auth</action>"));
        assert!(requests[0].0.ends_with("/api/auth"));
    }

    #[tokio::test]
    async fn test_successful_capture() {
        let gateway = gateway(MockTransport::ok(&[SUCCESSFUL_CAPTURE]));
        let response = gateway
            .capture(&amount(), "40292#authonly", &options())
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.message, "capture succeeded");
        assert_eq!(response.authorization.as_deref(), Some("43622#capture"));

        let requests = gateway.transport().requests();
        assert_eq!(requests[0].0, "http://sandbox.asgateway.com/api/ref");
        assert!(requests[0].1.ends_with(
            "<action>capture</action><merchant>spreedly</merchant>\
             <secret>56mP4zY8qQ</secret><ref>40292</ref></request>"
        ));
        assert!(!requests[0].1.contains("<amount>"));
    }

    #[tokio::test]
    async fn test_failed_capture_with_bad_reference() {
        let gateway = gateway(MockTransport::ok(&[BAD_REFERENCE]));
        let response = gateway
            .capture(&amount(), "", &options())
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "Bad ref id");
        assert_eq!(response.error_code, Some(StandardErrorCode::ProcessingError));
        assert!(gateway.transport().requests()[0].1.contains("<ref></ref>"));
    }

    #[tokio::test]
    async fn test_refund_sends_reference_only() {
        let gateway = gateway(MockTransport::ok(&[SUCCESSFUL_CAPTURE]));
        let response = gateway
            .refund(&amount(), "2214269051#XXXX1234", &options())
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.message, "refund succeeded");
        assert_eq!(response.authorization.as_deref(), Some("43622#refund"));
        let body = &gateway.transport().requests()[0].1;
        assert!(body.contains("<action>cancel</action>"));
        assert!(body.contains("<ref>2214269051</ref>"));
    }

    #[tokio::test]
    async fn test_failed_refund_with_error_page() {
        let gateway = gateway(MockTransport::ok(&[OOPS_PAGE]));
        let response = gateway
            .refund(&amount(), "40292#sale", &options())
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "refund failed");
        assert_eq!(response.error_code, Some(StandardErrorCode::ProcessingError));
    }

    #[tokio::test]
    async fn test_void() {
        let gateway = gateway(MockTransport::ok(&[SUCCESSFUL_CAPTURE]));
        let response = gateway.void("40292#authonly", &options()).await.unwrap();

        assert!(response.success);
        assert_eq!(response.message, "void succeeded");
        assert_eq!(response.authorization.as_deref(), Some("43622#void"));
        assert!(gateway.transport().requests()[0]
            .1
            .contains("<action>cancel</action>"));
    }

    #[tokio::test]
    async fn test_bad_credentials() {
        let gateway = gateway(MockTransport::ok(&["<error>Invalid merchant</error>"]));
        let response = gateway
            .purchase(&amount(), &card(), &options())
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "Invalid merchant");
        assert_eq!(response.error_code, Some(StandardErrorCode::ConfigError));
    }

    #[tokio::test]
    async fn test_server_error_body_is_classified() {
        let gateway = gateway(MockTransport::with(vec![Err(TransportError::Status {
            status: 500,
            body: OOPS_PAGE.to_owned(),
        })]));
        let response = gateway
            .purchase(&amount(), &card(), &options())
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "sale failed");
    }

    #[tokio::test]
    async fn test_redirect_propagates() {
        let gateway = gateway(MockTransport::with(vec![Err(TransportError::Status {
            status: 302,
            body: String::new(),
        })]));
        let err = gateway
            .purchase(&amount(), &card(), &options())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Transport(TransportError::Status { status: 302, .. })
        ));
    }

    #[tokio::test]
    async fn test_unavailable_transport_propagates() {
        let gateway = gateway(MockTransport::with(vec![Err(TransportError::unavailable(
            "connection refused",
        ))]));
        let err = gateway
            .void("40292#authonly", &options())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Transport(TransportError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_verify_authorizes_then_voids() {
        let gateway = gateway(MockTransport::ok(&[SUCCESSFUL_PURCHASE, SUCCESSFUL_CAPTURE]));
        let response = gateway.verify(&card(), &options()).await.unwrap();

        assert!(response.success);
        assert_eq!(response.message, "authonly succeeded");
        assert_eq!(response.authorization.as_deref(), Some("40292#authonly"));

        let requests = gateway.transport().requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].1.contains("<action>auth</action>"));
        assert!(requests[0].1.contains("<amount>1.00</amount>"));
        assert!(requests[1].0.ends_with("/api/ref"));
        assert!(requests[1].1.contains("<action>cancel</action><merchant>"));
        assert!(requests[1].1.contains("<ref>40292</ref>"));
    }

    #[tokio::test]
    async fn test_verify_ignores_void_failure() {
        let declined = MockTransport::ok(&[SUCCESSFUL_PURCHASE, BAD_REFERENCE]);
        let response = gateway(declined)
            .verify(&card(), &options())
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.authorization.as_deref(), Some("40292#authonly"));

        let unavailable = MockTransport::with(vec![
            Ok(SUCCESSFUL_PURCHASE.to_owned()),
            Err(TransportError::unavailable("connection reset")),
        ]);
        let response = gateway(unavailable)
            .verify(&card(), &options())
            .await
            .unwrap();
        assert!(response.success);
    }

    #[tokio::test]
    async fn test_failed_verify_skips_void() {
        let gateway = gateway(MockTransport::ok(&[FAILED_PURCHASE]));
        let response = gateway.verify(&card(), &options()).await.unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "Fails luhn check");
        assert_eq!(gateway.transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_name_is_omitted_without_cardholder() {
        let gateway = gateway(MockTransport::ok(&[SUCCESSFUL_PURCHASE]));
        let card = CreditCard::new("4111111111111111", "123", 9, 2030);
        gateway
            .purchase(&amount(), &card, &options())
            .await
            .unwrap();
        let body = &gateway.transport().requests()[0].1;
        assert!(!body.contains("<name>"));
        assert!(body.ends_with("<exp>092030</exp></request>"));
    }

    #[tokio::test]
    async fn test_options_override_name_and_currency() {
        let gateway = gateway(MockTransport::ok(&[
            SUCCESSFUL_PURCHASE,
            SUCCESSFUL_PURCHASE,
            SUCCESSFUL_PURCHASE,
        ]));
        let options = TransactionOptions::new()
            .with_customer_name("Jim Smith")
            .with_currency("GBP");
        let money = Money::new(1000).with_currency("EUR");

        gateway.purchase(&money, &card(), &options).await.unwrap();
        gateway.purchase(&money, &card(), &TransactionOptions::new()).await.unwrap();
        gateway.purchase(&amount(), &card(), &TransactionOptions::new()).await.unwrap();

        let requests = gateway.transport().requests();
        assert!(requests[0].1.contains("<currency>GBP</currency>"));
        assert!(requests[0].1.contains("<name>Jim Smith</name>"));
        assert!(requests[0].1.contains("<amount>10.00</amount>"));
        assert!(requests[1].1.contains("<currency>EUR</currency>"));
        assert!(requests[1].1.contains("<name>Longbob Longsen</name>"));
        assert!(requests[2].1.contains("<currency>USD</currency>"));
    }

    #[tokio::test]
    async fn test_live_environment_is_not_test() {
        let config = GatewayConfig::new(Credentials::new("login", "password"));
        let gateway = Gateway::new(config, MockTransport::ok(&[SUCCESSFUL_PURCHASE]));
        let response = gateway
            .purchase(&amount(), &card(), &options())
            .await
            .unwrap();
        assert!(!response.test);
        assert_eq!(
            gateway.transport().requests()[0].0,
            "https://prod.awesomesauce.example.com/api/auth"
        );
    }

    #[test]
    fn test_capabilities() {
        let gateway = gateway(MockTransport::default());
        assert_eq!(gateway.display_name(), "Awesomesauce");
        assert_eq!(gateway.homepage_url(), "http://asgateway.com");
        assert_eq!(gateway.supported_countries(), ["US"]);
        assert_eq!(
            gateway.supported_card_types(),
            [
                CardBrand::Visa,
                CardBrand::Master,
                CardBrand::AmericanExpress
            ]
        );
        assert!(gateway.supports_card_type(CardBrand::Master));
    }

    #[test]
    fn test_scrubbing() {
        let gateway = gateway(MockTransport::default());
        assert!(gateway.supports_scrubbing());
        assert_eq!(
            gateway.scrub("<number>4111111111111111</number><cv2>123</cv2><secret>s</secret>"),
            "<number>[FILTERED]</number><cv2>[FILTERED]</cv2><secret>[FILTERED]</secret>"
        );
    }
}
