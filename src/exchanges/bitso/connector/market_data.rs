use crate::core::{
    errors::ExchangeError,
    kernel::RestClient,
    traits::MarketDataSource,
    types::{OrderBook, Ticker, Transaction},
};
use crate::exchanges::bitso::{rest::BitsoRest, validate_book};
use async_trait::async_trait;
use tracing::instrument;

/// Public market data: no signing, book validated before any request
pub struct MarketData<R: RestClient> {
    rest: BitsoRest<R>,
}

impl<R: RestClient + Clone> MarketData<R> {
    pub fn new(rest: &BitsoRest<R>) -> Self {
        Self { rest: rest.clone() }
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for MarketData<R> {
    #[instrument(skip(self), fields(exchange = "bitso"))]
    async fn ticker(&self, book: &str) -> Result<Ticker, ExchangeError> {
        let book = validate_book(book)?;
        self.rest.ticker(book).await
    }

    #[instrument(skip(self), fields(exchange = "bitso"))]
    async fn order_book(&self, book: &str) -> Result<OrderBook, ExchangeError> {
        let book = validate_book(book)?;
        self.rest.order_book(book).await
    }

    #[instrument(skip(self), fields(exchange = "bitso"))]
    async fn transactions(
        &self,
        book: &str,
        time: &str,
    ) -> Result<Vec<Transaction>, ExchangeError> {
        let book = validate_book(book)?;
        self.rest.transactions(book, time).await
    }
}
