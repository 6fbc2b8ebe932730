use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::exchanges::bitso::{connector::BitsoConnector, BASE_URL};

/// Builder for creating Bitso connectors
#[derive(Debug, Clone)]
pub struct BitsoBuilder {
    config: Option<ExchangeConfig>,
    base_url: Option<String>,
    rest_timeout: u64,
    user_agent: Option<String>,
}

impl Default for BitsoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BitsoBuilder {
    /// Create a builder for an anonymous connector with default settings
    pub fn new() -> Self {
        Self {
            config: None,
            base_url: None,
            rest_timeout: 30,
            user_agent: None,
        }
    }

    /// Builder with credentials read from `{prefix}_KEY`, `{prefix}_SECRET`
    /// and `{prefix}_CLIENT_ID`
    pub fn from_env(prefix: &str) -> Result<Self, ExchangeError> {
        Ok(Self::new().with_config(ExchangeConfig::from_env(prefix)?))
    }

    /// Set the credentials; without them the connector is anonymous
    pub fn with_config(mut self, config: ExchangeConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the base URL. Takes precedence over the configuration's.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Set REST client timeout in seconds
    pub fn with_rest_timeout(mut self, timeout: u64) -> Self {
        self.rest_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    fn resolve_base_url(&self) -> String {
        self.base_url
            .clone()
            .or_else(|| self.config.as_ref().and_then(|c| c.base_url.clone()))
            .unwrap_or_else(|| BASE_URL.to_string())
    }

    /// Build a connector over the reqwest transport
    pub fn build(self) -> Result<BitsoConnector<ReqwestRest>, ExchangeError> {
        let mut rest_config = RestClientConfig::new(self.resolve_base_url(), "bitso".to_string())
            .with_timeout(self.rest_timeout);
        if let Some(user_agent) = self.user_agent {
            rest_config = rest_config.with_user_agent(user_agent);
        }

        let rest = RestClientBuilder::new(rest_config).build()?;
        Ok(BitsoConnector::new(rest, self.config))
    }
}

/// Create a Bitso connector, anonymous when `config` is `None`
pub fn create_bitso_connector(
    config: Option<ExchangeConfig>,
) -> Result<BitsoConnector<ReqwestRest>, ExchangeError> {
    let builder = BitsoBuilder::new();
    match config {
        Some(config) => builder.with_config(config).build(),
        None => builder.build(),
    }
}
