use crate::core::errors::ExchangeError;
use crate::core::traits::{AccountInfo, ExchangeConnector, MarketDataSource};
use crate::core::types::{OrderBook, Ticker, Transaction};
use crate::core::{config::ExchangeConfig, kernel::RestClient};
use crate::exchanges::bitso::rest::BitsoRest;
use crate::exchanges::bitso::signer::BitsoSigner;
use crate::exchanges::bitso::types::{Balance, Order};
use async_trait::async_trait;
use std::sync::Arc;

pub mod account;
pub mod market_data;

pub use account::Account;
pub use market_data::MarketData;

/// Bitso connector that composes the public and signed halves of the API
pub struct BitsoConnector<R: RestClient> {
    pub market: MarketData<R>,
    pub account: Account<R>,
    config: Option<ExchangeConfig>,
}

impl<R: RestClient + Clone> BitsoConnector<R> {
    /// Create a connector over `rest`.
    ///
    /// With `None` the connector is anonymous: public endpoints work and any
    /// signed call panics.
    pub fn new(rest: R, config: Option<ExchangeConfig>) -> Self {
        let signer = config
            .as_ref()
            .map(|config| Arc::new(BitsoSigner::from_config(config)));
        let rest = BitsoRest::new(rest, signer);

        Self {
            market: MarketData::new(&rest),
            account: Account::new(&rest),
            config,
        }
    }
}

impl<R: RestClient> BitsoConnector<R> {
    /// Sandbox flag of the configuration, false when anonymous
    pub fn is_sandbox(&self) -> bool {
        self.config.as_ref().is_some_and(|config| config.sandbox)
    }

    /// Whether signed endpoints can be called without panicking
    pub fn can_authenticate(&self) -> bool {
        self.account.can_sign()
    }

    pub fn config(&self) -> Option<&ExchangeConfig> {
        self.config.as_ref()
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for BitsoConnector<R> {
    async fn ticker(&self, book: &str) -> Result<Ticker, ExchangeError> {
        self.market.ticker(book).await
    }

    async fn order_book(&self, book: &str) -> Result<OrderBook, ExchangeError> {
        self.market.order_book(book).await
    }

    async fn transactions(
        &self,
        book: &str,
        time: &str,
    ) -> Result<Vec<Transaction>, ExchangeError> {
        self.market.transactions(book, time).await
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for BitsoConnector<R> {
    type Balance = Balance;
    type Order = Order;

    async fn balance(&self) -> Result<Balance, ExchangeError> {
        self.account.balance().await
    }

    async fn open_orders(&self, book: Option<&str>) -> Result<Vec<Order>, ExchangeError> {
        self.account.open_orders(book).await
    }
}

impl<R: RestClient> ExchangeConnector for BitsoConnector<R> {}
