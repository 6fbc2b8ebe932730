use crate::core::{errors::ExchangeError, kernel::RestClient, traits::AccountInfo};
use crate::exchanges::bitso::{
    rest::BitsoRest,
    types::{Balance, Order},
    validate_book,
};
use async_trait::async_trait;
use tracing::instrument;

/// Signed account endpoints
pub struct Account<R: RestClient> {
    rest: BitsoRest<R>,
}

impl<R: RestClient + Clone> Account<R> {
    pub fn new(rest: &BitsoRest<R>) -> Self {
        Self { rest: rest.clone() }
    }
}

impl<R: RestClient> Account<R> {
    pub fn can_sign(&self) -> bool {
        self.rest.can_sign()
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for Account<R> {
    type Balance = Balance;
    type Order = Order;

    #[instrument(skip(self), fields(exchange = "bitso"))]
    async fn balance(&self) -> Result<Balance, ExchangeError> {
        self.rest.balance().await
    }

    #[instrument(skip(self), fields(exchange = "bitso"))]
    async fn open_orders(&self, book: Option<&str>) -> Result<Vec<Order>, ExchangeError> {
        let book = book.map(validate_book).transpose()?;
        self.rest.open_orders(book).await
    }
}
