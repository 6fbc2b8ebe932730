use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trading pair ("book") identifier.
///
/// The set is closed: every operation that accepts a book validates it
/// against [`BOOKS`] before touching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Book {
    #[serde(rename = "btc_mxn")]
    BtcMxn,
    #[serde(rename = "eth_mxn")]
    EthMxn,
}

/// Every supported book, in wire order
pub const BOOKS: [Book; 2] = [Book::BtcMxn, Book::EthMxn];

impl Book {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BtcMxn => "btc_mxn",
            Self::EthMxn => "eth_mxn",
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Book {
    type Err = crate::core::errors::ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BOOKS
            .iter()
            .copied()
            .find(|book| book.as_str() == s)
            .ok_or_else(|| crate::core::errors::ExchangeError::InvalidBook(s.to_string()))
    }
}

/// Trading statistics for a book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    pub high: String,
    pub last: String,
    pub timestamp: String,
    pub volume: String,
    pub vwap: String,
    pub low: String,
    pub ask: String,
    pub bid: String,
}

/// One side entry of the order book: `[price, amount]`
pub type PriceLevel = [String; 2];

/// Open bids and asks of a book
///
/// Both sides must be present on the wire; `null` decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    #[serde(deserialize_with = "null_as_empty")]
    pub asks: Vec<PriceLevel>,
    #[serde(deserialize_with = "null_as_empty")]
    pub bids: Vec<PriceLevel>,
}

impl OrderBook {
    /// Highest bid as `[price, amount]`
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    /// Lowest ask as `[price, amount]`
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }
}

/// A recent trade
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: String,
    pub date: String,
    pub price: String,
    pub tid: u64,
    pub side: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
