pub mod builder;
pub mod connector;
pub mod envelope;
pub mod rest;
pub mod signer;
pub mod types;

use crate::core::errors::ExchangeError;
use crate::core::types::Book;

pub use builder::{create_bitso_connector, BitsoBuilder};
pub use connector::{Account, BitsoConnector, MarketData};
pub use envelope::{ApiErrorBody, AuthFields, Decoded, ResponseSchema, WithAuth};
pub use signer::BitsoSigner;
pub use types::{Balance, OpenOrdersRequest, Order};

/// Origin every endpoint path is appended to
pub const BASE_URL: &str = "https://api.bitso.com/v2/";

pub const TICKER_PATH: &str = "ticker";
pub const ORDER_BOOK_PATH: &str = "order_book";
pub const TRANSACTIONS_PATH: &str = "transactions";
pub const BALANCE_PATH: &str = "balance";
pub const OPEN_ORDERS_PATH: &str = "open_orders";

/// Check `book` against the supported trading pairs
pub fn validate_book(book: &str) -> Result<Book, ExchangeError> {
    book.parse()
}
