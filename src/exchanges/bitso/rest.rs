use crate::core::errors::ExchangeError;
use crate::core::kernel::{next_nonce, RestClient};
use crate::core::types::{Book, OrderBook, Ticker, Transaction};
use crate::exchanges::bitso::envelope::{AuthFields, Decoded, ResponseSchema, WithAuth};
use crate::exchanges::bitso::signer::BitsoSigner;
use crate::exchanges::bitso::types::{Balance, OpenOrdersRequest, Order};
use crate::exchanges::bitso::{
    BALANCE_PATH, OPEN_ORDERS_PATH, ORDER_BOOK_PATH, TICKER_PATH, TRANSACTIONS_PATH,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Panic message for signing on a connector built without configuration
pub const MISSING_CONFIGURATION: &str = "can't generate a signature without configuration";

/// Thin typed wrapper around `RestClient` for the Bitso API
#[derive(Clone)]
pub struct BitsoRest<R: RestClient> {
    client: R,
    signer: Option<Arc<BitsoSigner>>,
}

impl<R: RestClient> BitsoRest<R> {
    pub fn new(client: R, signer: Option<Arc<BitsoSigner>>) -> Self {
        Self { client, signer }
    }

    pub fn can_sign(&self) -> bool {
        self.signer.is_some()
    }

    /// The signer, or a panic: signing without configuration is a
    /// programming error, not a runtime failure.
    fn signer(&self) -> &BitsoSigner {
        match self.signer.as_deref() {
            Some(signer) => signer,
            None => panic!("{}", MISSING_CONFIGURATION),
        }
    }

    async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ExchangeError> {
        let decoded = match self.client.get(path, params).await {
            Ok(value) => Decoded::<T>::decode(value)?,
            Err(error) => Decoded::from_failure(error)?,
        };
        match decoded {
            Decoded::Success(payload) => Ok(payload),
            Decoded::ExchangeError(error) => {
                warn!(code = error.code, path, "Exchange rejected public request");
                Err(error.to_error())
            }
        }
    }

    #[instrument(skip(self), fields(exchange = "bitso"))]
    pub async fn ticker(&self, book: Book) -> Result<Ticker, ExchangeError> {
        self.get_public(TICKER_PATH, &[("book", book.as_str())])
            .await
    }

    #[instrument(skip(self), fields(exchange = "bitso"))]
    pub async fn order_book(&self, book: Book) -> Result<OrderBook, ExchangeError> {
        self.get_public(ORDER_BOOK_PATH, &[("book", book.as_str())])
            .await
    }

    /// `time` is forwarded as given; a blank value is still sent.
    #[instrument(skip(self), fields(exchange = "bitso"))]
    pub async fn transactions(
        &self,
        book: Book,
        time: &str,
    ) -> Result<Vec<Transaction>, ExchangeError> {
        self.get_public(TRANSACTIONS_PATH, &[("book", book.as_str()), ("time", time)])
            .await
    }

    /// Sign `request`, POST it to `path` and decode the response.
    ///
    /// A fresh nonce is drawn for every call. The response is decoded as
    /// `Resp`, falling back to the bare envelope, and an embedded error in
    /// either shape is returned as `ExchangeError::ApiError`. A non-2xx reply
    /// without an embedded error is `ExchangeError::HttpStatus`.
    ///
    /// # Panics
    /// If the client was built without configuration.
    #[instrument(skip(self, request), fields(exchange = "bitso"))]
    pub async fn post_signed<Req, Resp>(
        &self,
        path: &str,
        mut request: Req,
    ) -> Result<Decoded<Resp>, ExchangeError>
    where
        Req: WithAuth + Serialize + Send,
        Resp: ResponseSchema,
    {
        let signer = self.signer();
        signer.sign(&mut request, next_nonce());

        let body = serde_json::to_value(&request).map_err(|e| {
            ExchangeError::SerializationError(format!("Failed to serialize envelope: {}", e))
        })?;

        let decoded = match self.client.post(path, &body).await {
            Ok(value) => Decoded::<Resp>::decode_signed(value)?,
            Err(error) => Decoded::from_failure(error)?,
        };

        if let Decoded::ExchangeError(error) = &decoded {
            warn!(code = error.code, status = error.status, "Exchange rejected signed request");
        }

        Ok(decoded)
    }

    pub async fn balance(&self) -> Result<Balance, ExchangeError> {
        self.post_signed::<_, Balance>(BALANCE_PATH, AuthFields::default())
            .await?
            .into_result()
    }

    pub async fn open_orders(&self, book: Option<Book>) -> Result<Vec<Order>, ExchangeError> {
        let request = OpenOrdersRequest {
            book: book.map(|book| book.as_str().to_string()),
            ..Default::default()
        };
        self.post_signed::<_, Vec<Order>>(OPEN_ORDERS_PATH, request)
            .await?
            .into_result()
    }
}
