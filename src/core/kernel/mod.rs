/// Transport layer shared by exchange connectors
///
/// The kernel contains no exchange-specific logic. It provides:
///
/// - `RestClient`: the HTTP interface connectors are generic over, with
///   `ReqwestRest` as the production implementation
/// - `hmac_sha256_hex`: lowercase hex HMAC-SHA256 used by signers
/// - `NonceGenerator`: strictly increasing, thread-safe nonce source
///
/// # Example
/// ```rust,no_run
/// use bitso::core::kernel::*;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let rest_config = RestClientConfig::new(
///     "https://api.bitso.com/v2/".to_string(),
///     "bitso".to_string(),
/// )
/// .with_timeout(10);
/// let rest = RestClientBuilder::new(rest_config).build()?;
///
/// let ticker: serde_json::Value = rest.get("ticker", &[("book", "btc_mxn")]).await?;
/// let signature = hmac_sha256_hex(&format!("{}keyclient", next_nonce()), "secret");
/// # let _ = (ticker, signature);
/// # Ok(())
/// # }
/// ```
pub mod rest;
pub mod signer;

pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{hmac_sha256_hex, next_nonce, NonceGenerator};
