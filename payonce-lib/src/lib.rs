//! PayOnce unlock-link SDK.
//!
//! Builds payment-unlock URLs for the hosted PayOnce unlock page: a small
//! invoice payload is serialized to compact JSON, optionally signed with
//! HMAC-SHA256, base64-encoded, and appended as the `id` query parameter of
//! the unlock endpoint.
//!
//! The whole crate is a pure, synchronous transformation. There is no
//! network surface, no storage, and no shared state; the only external input
//! is the system clock.
//!
//! # Example
//!
//! ```
//! use payonce_lib::{create_invoice, InvoiceRequest};
//!
//! let request = InvoiceRequest::new("abc123", 5u64).with_product("Sticker Pack");
//! let invoice = create_invoice(&request)?;
//!
//! assert!(invoice.url.starts_with("https://payonce-cash.vercel.app/unlock?id="));
//! assert_eq!(invoice.payload.p, "5");
//! assert!(invoice.signature.is_none());
//! # Ok::<(), payonce_lib::PayonceError>(())
//! ```

use std::fmt;
use std::str::FromStr;

pub mod errors;
pub mod invoice;
pub mod signing;
pub mod url;

pub use errors::PayonceError;
pub use invoice::{
    create_invoice, create_invoice_at, CreatedInvoice, InvoicePayload, InvoiceRequest,
    DEFAULT_PRODUCT, INVOICE_KIND,
};
pub use signing::{sign_payload, signing_input, verify_payload};
pub use url::{parse_unlock_url, unlock_url, unlock_url_for, UNLOCK_BASE_URL};

/// Common result alias for PayOnce operations.
pub type Result<T> = std::result::Result<T, PayonceError>;

/// Price carried by an invoice request.
///
/// The unlock service accepts either a JSON number or a pre-formatted
/// string, so the request preserves whichever form the caller supplied. The
/// payload always carries the *string* form (via [`Display`](fmt::Display)):
/// numbers render with their canonical JSON formatting, strings pass through
/// unchanged.
///
/// # Example
///
/// ```
/// use payonce_lib::Price;
///
/// let numeric: Price = 5u64.into();
/// assert_eq!(numeric.to_string(), "5");
///
/// let text: Price = "5.00 USD".into();
/// assert_eq!(text.to_string(), "5.00 USD");
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// A JSON number.
    Amount(serde_json::Number),
    /// A pre-formatted string.
    Text(String),
}

impl Price {
    /// Create a numeric price from a float.
    ///
    /// Returns `None` for NaN and infinities, which are not representable as
    /// JSON numbers.
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(Price::Amount)
    }

    /// Whether this price counts as missing for request validation.
    ///
    /// A numeric zero and the empty string are both missing, so a zero price
    /// is rejected. The non-empty string `"0"` is accepted.
    pub fn is_missing(&self) -> bool {
        match self {
            Price::Amount(n) => n.as_f64().map_or(true, |v| v == 0.0),
            Price::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(n) => write!(f, "{}", n),
            Price::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for Price {
    type Err = std::convert::Infallible;

    /// Numeric-looking input becomes [`Price::Amount`]; anything else passes
    /// through as [`Price::Text`].
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match serde_json::from_str::<serde_json::Number>(s) {
            Ok(n) => Ok(Price::Amount(n)),
            Err(_) => Ok(Price::Text(s.to_string())),
        }
    }
}

impl From<serde_json::Number> for Price {
    fn from(n: serde_json::Number) -> Self {
        Price::Amount(n)
    }
}

impl From<u64> for Price {
    fn from(v: u64) -> Self {
        Price::Amount(serde_json::Number::from(v))
    }
}

impl From<i64> for Price {
    fn from(v: i64) -> Self {
        Price::Amount(serde_json::Number::from(v))
    }
}

impl From<u32> for Price {
    fn from(v: u32) -> Self {
        Price::Amount(serde_json::Number::from(v))
    }
}

impl From<&str> for Price {
    fn from(s: &str) -> Self {
        Price::Text(s.to_string())
    }
}

impl From<String> for Price {
    fn from(s: String) -> Self {
        Price::Text(s)
    }
}
