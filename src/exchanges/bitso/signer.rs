use crate::core::config::ExchangeConfig;
use crate::core::kernel::hmac_sha256_hex;
use crate::exchanges::bitso::envelope::{AuthFields, WithAuth};

/// Signs private-endpoint payloads with the account credentials.
///
/// The signed message is `nonce || key || client_id`, keyed by the secret.
#[derive(Clone)]
pub struct BitsoSigner {
    api_key: String,
    secret_key: String,
    client_id: String,
}

impl std::fmt::Debug for BitsoSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitsoSigner")
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl BitsoSigner {
    pub fn new(api_key: String, secret_key: String, client_id: String) -> Self {
        Self {
            api_key,
            secret_key,
            client_id,
        }
    }

    pub fn from_config(config: &ExchangeConfig) -> Self {
        Self::new(
            config.api_key().to_string(),
            config.secret_key().to_string(),
            config.client_id().to_string(),
        )
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    fn message(&self, nonce: u64) -> String {
        format!("{}{}{}", nonce, self.api_key, self.client_id)
    }

    /// Signature for a request carrying `nonce`
    pub fn signature(&self, nonce: u64) -> String {
        hmac_sha256_hex(&self.message(nonce), &self.secret_key)
    }

    /// Envelope fields for a request carrying `nonce`
    pub fn authenticate(&self, nonce: u64) -> AuthFields {
        let mut fields = AuthFields::default();
        self.sign(&mut fields, nonce);
        fields
    }

    /// Write the envelope fields into `payload`
    pub fn sign<T: WithAuth>(&self, payload: &mut T, nonce: u64) {
        payload.set_auth(&self.api_key, nonce, self.signature(nonce));
    }
}
