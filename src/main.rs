use anyhow::Context;
use bitso::core::config::{ConfigError, ExchangeConfig};
use bitso::{create_bitso_connector, AccountInfo, MarketDataSource};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn load_config() -> anyhow::Result<Option<ExchangeConfig>> {
    #[cfg(feature = "env-file")]
    let loaded = ExchangeConfig::from_env_file("BITSO");
    #[cfg(not(feature = "env-file"))]
    let loaded = ExchangeConfig::from_env("BITSO");

    match loaded {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::MissingEnvironmentVariable(var)) => {
            warn!("{} not set, running without credentials", var);
            Ok(None)
        }
        Err(e) => Err(e).context("failed to load Bitso configuration"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let authenticated = config.is_some();
    let client = create_bitso_connector(config)?;
    let book = "btc_mxn";

    match client.ticker(book).await {
        Ok(ticker) => println!("{:#?}", ticker),
        Err(e) => println!("Error fetching ticker: {}", e),
    }

    match client.order_book(book).await {
        Ok(order_book) => println!(
            "Order book: {} bids, {} asks",
            order_book.bids.len(),
            order_book.asks.len()
        ),
        Err(e) => println!("Error fetching order book: {}", e),
    }

    match client.transactions(book, "hour").await {
        Ok(transactions) => println!("{} transactions in the last hour", transactions.len()),
        Err(e) => println!("Error fetching transactions: {}", e),
    }

    if !authenticated {
        info!("Skipping balance and open orders: no credentials configured");
        return Ok(());
    }

    match client.balance().await {
        Ok(balance) => println!("{:#?}", balance),
        Err(e) => println!("Error fetching balance: {}", e),
    }

    match client.open_orders(None).await {
        Ok(orders) => println!("{} open orders", orders.len()),
        Err(e) => println!("Error fetching open orders: {}", e),
    }

    Ok(())
}
