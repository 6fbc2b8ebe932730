use crate::core::{
    errors::ExchangeError,
    types::{OrderBook, Ticker, Transaction},
};
use async_trait::async_trait;

#[async_trait]
pub trait MarketDataSource {
    /// Trading statistics for a book
    async fn ticker(&self, book: &str) -> Result<Ticker, ExchangeError>;

    /// Open bids and asks for a book
    async fn order_book(&self, book: &str) -> Result<OrderBook, ExchangeError>;

    /// Recent trades for a book within a time frame (`"hour"`, `"minute"`,
    /// or blank for the exchange default)
    async fn transactions(&self, book: &str, time: &str)
        -> Result<Vec<Transaction>, ExchangeError>;
}

#[async_trait]
pub trait AccountInfo {
    type Balance;
    type Order;

    /// Account balances. Panics if the connector holds no configuration.
    async fn balance(&self) -> Result<Self::Balance, ExchangeError>;

    /// Open orders, optionally restricted to one book. Panics if the
    /// connector holds no configuration.
    async fn open_orders(&self, book: Option<&str>) -> Result<Vec<Self::Order>, ExchangeError>;
}

// Optional: Keep a composite trait for convenience when you need all functionality
pub trait ExchangeConnector: MarketDataSource + AccountInfo {}
