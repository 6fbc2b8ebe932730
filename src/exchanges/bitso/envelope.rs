//! Authentication envelope carried by every private-endpoint payload, and
//! the decode policy applied to responses.
//!
//! Requests and responses of the private endpoints share one set of wire
//! fields: `key`, `nonce`, `signature` and an optional embedded `error`.
//! A rejected request still comes back as HTTP 200 with the error embedded
//! in the body, so a response is only a success once that field has been
//! checked.

use crate::core::errors::ExchangeError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Error object embedded in a response body.
///
/// The numeric code travels under the JSON key `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    #[serde(rename = "error", alias = "code", skip_serializing_if = "is_zero")]
    pub code: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub status: i64,
}

impl ApiErrorBody {
    /// An error object with neither a message nor a code carries no failure
    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.code == 0
    }

    pub fn to_error(&self) -> ExchangeError {
        ExchangeError::ApiError {
            code: self.code,
            message: self.message.clone(),
            status: self.status,
        }
    }
}

/// Wire fields shared by all private-endpoint payloads.
///
/// Empty fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthFields {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub nonce: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

/// Capability of a payload that carries the authentication envelope
pub trait WithAuth {
    fn auth(&self) -> &AuthFields;

    fn auth_mut(&mut self) -> &mut AuthFields;

    /// Fill the authentication fields of an outgoing request
    fn set_auth(&mut self, key: &str, nonce: u64, signature: String) {
        let auth = self.auth_mut();
        auth.key = key.to_string();
        auth.nonce = nonce;
        auth.signature = signature;
    }

    /// The embedded error, if the exchange reported one
    fn embedded_error(&self) -> Option<&ApiErrorBody> {
        self.auth().error.as_ref().filter(|error| !error.is_empty())
    }

    /// The embedded error as an `ExchangeError`
    fn extract_error(&self) -> Option<ExchangeError> {
        self.embedded_error().map(ApiErrorBody::to_error)
    }
}

impl WithAuth for AuthFields {
    fn auth(&self) -> &AuthFields {
        self
    }

    fn auth_mut(&mut self) -> &mut AuthFields {
        self
    }
}

/// A decodable response of a signed endpoint that may embed an error
pub trait ResponseSchema: DeserializeOwned {
    fn embedded_error(&self) -> Option<&ApiErrorBody>;
}

impl ResponseSchema for AuthFields {
    fn embedded_error(&self) -> Option<&ApiErrorBody> {
        WithAuth::embedded_error(self)
    }
}

impl<T: WithAuth + DeserializeOwned> ResponseSchema for Vec<T> {
    fn embedded_error(&self) -> Option<&ApiErrorBody> {
        self.iter().find_map(WithAuth::embedded_error)
    }
}

/// Outcome of decoding a response body.
///
/// Transport and decode failures are the `Err` side of the surrounding
/// `Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<T> {
    Success(T),
    ExchangeError(ApiErrorBody),
}

impl<T: DeserializeOwned> Decoded<T> {
    /// Decode `value` as `T`; if that fails, decode it as the bare
    /// error-only envelope.
    ///
    /// The fallback exists because the exchange answers some failures with a
    /// body shaped differently from the success schema while still using
    /// HTTP 200. If the fallback fails its error is returned; if it succeeds
    /// without an embedded error the primary decode error is returned.
    pub fn decode(value: Value) -> Result<Self, ExchangeError> {
        let primary = match T::deserialize(&value) {
            Ok(payload) => return Ok(Self::Success(payload)),
            Err(e) => e,
        };

        debug!(error = %primary, "Success schema did not match, trying error schema");

        let fields = AuthFields::deserialize(&value).map_err(|e| {
            ExchangeError::DeserializationError(format!(
                "Response matches neither the success nor the error schema: {}",
                e
            ))
        })?;

        match WithAuth::embedded_error(&fields) {
            Some(error) => Ok(Self::ExchangeError(error.clone())),
            None => Err(ExchangeError::DeserializationError(primary.to_string())),
        }
    }

    /// Recover an embedded error from a failed request.
    ///
    /// A non-2xx reply is only an exchange error when its body decodes to the
    /// envelope with an embedded error; anything else stays the transport
    /// error it was.
    pub fn from_failure(error: ExchangeError) -> Result<Self, ExchangeError> {
        let (status, body) = match error {
            ExchangeError::HttpStatus { status, body } => (status, body),
            other => return Err(other),
        };

        let embedded = serde_json::from_str::<AuthFields>(&body)
            .ok()
            .and_then(|fields| WithAuth::embedded_error(&fields).cloned());

        match embedded {
            Some(error) => {
                debug!(status, code = error.code, "Non-success status carried an embedded error");
                Ok(Self::ExchangeError(error))
            }
            None => Err(ExchangeError::HttpStatus { status, body }),
        }
    }

    pub fn into_result(self) -> Result<T, ExchangeError> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::ExchangeError(error) => Err(error.to_error()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<T: ResponseSchema> Decoded<T> {
    /// Two-path decode followed by embedded-error extraction
    pub fn decode_signed(value: Value) -> Result<Self, ExchangeError> {
        Ok(match Self::decode(value)? {
            Self::Success(payload) => match payload.embedded_error() {
                Some(error) => Self::ExchangeError(error.clone()),
                None => Self::Success(payload),
            },
            exchange_error @ Self::ExchangeError(_) => exchange_error,
        })
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &i64) -> bool {
    *value == 0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}
