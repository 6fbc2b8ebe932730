use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

/// Process-wide nonce source shared by every signer
static NONCE: NonceGenerator = NonceGenerator::new();

/// Compute the lowercase hex HMAC-SHA256 of `message` keyed by `secret`
pub fn hmac_sha256_hex(message: &str, secret: &str) -> String {
    // HMAC accepts keys of any length, including empty ones.
    let mut mac = <HmacSha256 as Mac>::new_from_slice(secret.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC-SHA256 accepts keys of any length"));
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Next value from the process-wide nonce generator
pub fn next_nonce() -> u64 {
    NONCE.generate()
}

/// Strictly increasing nonce source backed by the wall clock.
///
/// Each call returns `max(last + 1, now_ns)`. The compare-and-swap loop makes
/// the sequence strictly increasing across threads, and the `last + 1` floor
/// keeps it increasing when two calls land on the same clock tick or the
/// clock steps backwards.
#[derive(Debug)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    pub fn generate(&self) -> u64 {
        let now = Self::now_nanos();
        let mut last = self.last.load(Ordering::Acquire);
        loop {
            let candidate = now.max(last.saturating_add(1));
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return candidate,
                Err(observed) => last = observed,
            }
        }
    }

    /// Most recently issued nonce, zero if none has been issued
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::Acquire)
    }

    fn now_nanos() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64)
    }
}

impl Default for NonceGenerator {
    fn default() -> Self {
        Self::new()
    }
}
