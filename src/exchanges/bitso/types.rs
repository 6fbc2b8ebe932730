use crate::exchanges::bitso::envelope::{ApiErrorBody, AuthFields, ResponseSchema, WithAuth};
use serde::{Deserialize, Serialize};

/// Account balance, returned by the `balance` endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(flatten)]
    pub auth: AuthFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mxn_balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub btc_balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mxn_reserved: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub btc_reserved: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mxn_available: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub btc_available: Option<String>,
}

/// Body of the `open_orders` request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOrdersRequest {
    #[serde(flatten)]
    pub auth: AuthFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<String>,
}

/// An open order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub auth: AuthFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<String>,
}

macro_rules! impl_with_auth {
    ($($ty:ty),+) => {
        $(
            impl WithAuth for $ty {
                fn auth(&self) -> &AuthFields {
                    &self.auth
                }

                fn auth_mut(&mut self) -> &mut AuthFields {
                    &mut self.auth
                }
            }
        )+
    };
}

impl_with_auth!(Balance, OpenOrdersRequest, Order);

impl ResponseSchema for Balance {
    fn embedded_error(&self) -> Option<&ApiErrorBody> {
        WithAuth::embedded_error(self)
    }
}
