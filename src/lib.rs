//! Client for the Bitso cryptocurrency exchange REST API.
//!
//! Public market data (ticker, order book, recent trades) needs no
//! credentials. Account endpoints (balance, open orders) are signed with an
//! HMAC-SHA256 over `nonce || key || client_id` and sent as a JSON envelope;
//! an error embedded in an HTTP 200 response is surfaced as
//! [`ExchangeError::ApiError`].
//!
//! ```rust,no_run
//! use bitso::{create_bitso_connector, AccountInfo, ExchangeConfig, MarketDataSource};
//!
//! # async fn example() -> Result<(), bitso::ExchangeError> {
//! let config = ExchangeConfig::new("key".into(), "secret".into(), "client_id".into());
//! let bitso = create_bitso_connector(Some(config))?;
//!
//! let ticker = bitso.ticker("btc_mxn").await?;
//! let balance = bitso.balance().await?;
//! # let _ = (ticker, balance);
//! # Ok(())
//! # }
//! ```
pub mod core;
pub mod exchanges;

pub use crate::core::{
    config::ExchangeConfig,
    errors::ExchangeError,
    traits::{AccountInfo, ExchangeConnector, MarketDataSource},
    types::*,
};
pub use exchanges::bitso::{create_bitso_connector, BitsoBuilder, BitsoConnector};
