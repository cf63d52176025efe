//! Gateway configuration.
//!
//! A [`GatewayConfig`] carries the merchant credentials, the target
//! environment and the default currency. It deserializes from any serde
//! format with sensible defaults, or loads from the process environment:
//!
//! - `AWESOMESAUCE_LOGIN` - Merchant login (required)
//! - `AWESOMESAUCE_PASSWORD` - Merchant secret (required)
//! - `AWESOMESAUCE_ENVIRONMENT` - `test` or `live` (default: `live`)
//! - `AWESOMESAUCE_BASE_URL` - Override the environment's base URL
//! - `AWESOMESAUCE_CURRENCY` - Default currency (default: `USD`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sandbox base URL.
pub const TEST_URL: &str = "http://sandbox.asgateway.com";

/// Production base URL.
pub const LIVE_URL: &str = "https://prod.awesomesauce.example.com";

/// Currency used when neither the call nor the amount names one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Path segment between the base URL and the endpoint basename.
pub const ENDPOINT_PATH: &str = "api";

/// Environment variable names read by [`GatewayConfig::from_env`].
pub mod env {
    /// Merchant login.
    pub const LOGIN: &str = "AWESOMESAUCE_LOGIN";
    /// Merchant secret.
    pub const PASSWORD: &str = "AWESOMESAUCE_PASSWORD";
    /// `test` or `live`.
    pub const ENVIRONMENT: &str = "AWESOMESAUCE_ENVIRONMENT";
    /// Base URL override.
    pub const BASE_URL: &str = "AWESOMESAUCE_BASE_URL";
    /// Default currency.
    pub const CURRENCY: &str = "AWESOMESAUCE_CURRENCY";
}

/// Errors raised while loading a [`GatewayConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required setting {0}")]
    Missing(&'static str),
    /// The environment name is neither `test` nor `live`.
    #[error("invalid environment {0:?}: expected \"test\" or \"live\"")]
    InvalidEnvironment(String),
}

/// Merchant credentials sent in every request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from a merchant login and secret.
    #[must_use]
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    /// Returns the merchant login.
    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Returns the merchant secret.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"[FILTERED]")
            .finish()
    }
}

/// Target gateway environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Sandbox; responses are flagged as test transactions.
    Test,
    /// Production.
    #[default]
    Live,
}

impl Environment {
    /// Returns the base URL of this environment.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Test => TEST_URL,
            Self::Live => LIVE_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" => Ok(Self::Test),
            "live" => Ok(Self::Live),
            _ => Err(ConfigError::InvalidEnvironment(s.to_owned())),
        }
    }
}

/// Gateway settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Merchant credentials.
    pub credentials: Credentials,

    /// Target environment (default: live).
    #[serde(default)]
    pub environment: Environment,

    /// Overrides the environment's base URL, e.g. for a local mock server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Currency used when neither the call nor the amount names one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}

impl GatewayConfig {
    /// Creates a live configuration for the given credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            environment: Environment::default(),
            base_url: None,
            default_currency: default_currency(),
        }
    }

    /// Sets the target environment.
    #[must_use]
    pub const fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the default currency.
    #[must_use]
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    /// Returns `true` when targeting the sandbox.
    #[must_use]
    pub fn is_test(&self) -> bool {
        self.environment == Environment::Test
    }

    /// Returns the effective base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
    }

    /// Returns the full URL for an endpoint basename.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{ENDPOINT_PATH}/{endpoint}", self.base_url())
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if credentials are missing or the environment
    /// name is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if credentials are missing or the environment
    /// name is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let login = get(env::LOGIN).ok_or(ConfigError::Missing(env::LOGIN))?;
        let password = get(env::PASSWORD).ok_or(ConfigError::Missing(env::PASSWORD))?;

        let mut config = Self::new(Credentials::new(login, password));
        if let Some(environment) = get(env::ENVIRONMENT) {
            config.environment = environment.parse()?;
        }
        config.base_url = get(env::BASE_URL);
        if let Some(currency) = get(env::CURRENCY) {
            config.default_currency = currency;
        }
        Ok(config)
    }
}
