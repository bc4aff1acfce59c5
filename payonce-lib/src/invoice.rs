//! Invoice construction.
//!
//! [`create_invoice`] validates a request, assembles the fixed-shape payload,
//! signs it when a secret key is supplied, and wraps it into an unlock URL.
//! The field order of [`InvoicePayload`] is part of the wire contract: the
//! signature covers the compact JSON of `{w, p, n, dt, ts}` exactly as
//! serialized here, and `sec` is always appended last.

use serde::{Deserialize, Serialize};

use crate::{signing, url, PayonceError, Price, Result};

/// Discriminant tag identifying the payload kind to the unlock service.
pub const INVOICE_KIND: &str = "invoice";

/// Display name used when a request does not name a product.
pub const DEFAULT_PRODUCT: &str = "Digital Item";

/// Input to [`create_invoice`].
///
/// # Example
///
/// ```
/// use payonce_lib::InvoiceRequest;
///
/// let request = InvoiceRequest::new("wallet-1", 5u64)
///     .with_product("Sticker Pack")
///     .with_secret_key("shh");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    /// Wallet identifier of the payee. Required, must be non-empty.
    pub wallet: String,
    /// Requested amount. Required; a numeric zero or an empty string counts
    /// as missing.
    pub price: Price,
    /// Optional product display name; `None` or empty resolves to
    /// [`DEFAULT_PRODUCT`].
    pub product: Option<String>,
    /// Optional signing key; `None` or empty produces an unsigned invoice.
    /// Never transmitted except as the derived signature.
    pub secret_key: Option<String>,
}

impl InvoiceRequest {
    /// Create a request for `wallet` and `price`.
    pub fn new(wallet: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            wallet: wallet.into(),
            price: price.into(),
            product: None,
            secret_key: None,
        }
    }

    /// Set the product display name.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    /// Set the signing key.
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }
}

/// The record embedded, as base64 of compact JSON, in an unlock URL.
///
/// Serialization order is the declaration order below and is load-bearing:
/// the unlock service and the signature both consume these exact bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoicePayload {
    /// Wallet identifier.
    pub w: String,
    /// String form of the requested price.
    pub p: String,
    /// Product display name.
    pub n: String,
    /// Payload kind; always [`INVOICE_KIND`].
    pub dt: String,
    /// Creation time, Unix epoch milliseconds.
    pub ts: i64,
    /// Lowercase hex HMAC-SHA256 signature; omitted entirely when unsigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sec: Option<String>,
}

impl InvoicePayload {
    /// Whether this payload carries a signature.
    pub fn is_signed(&self) -> bool {
        self.sec.is_some()
    }
}

/// Result of [`create_invoice`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedInvoice {
    /// The full unlock URL, ready to share.
    pub url: String,
    /// The payload embedded in the URL, for logging or inspection.
    pub payload: InvoicePayload,
    /// The value of `payload.sec`, or `None` for unsigned invoices.
    pub signature: Option<String>,
}

/// Build a payment-unlock invoice for `request`.
///
/// Validates the required fields, stamps the payload with the current time
/// in milliseconds, signs it when the request carries a secret key, and
/// encodes it into an unlock URL against [`crate::UNLOCK_BASE_URL`].
///
/// # Errors
///
/// [`PayonceError::InvalidRequest`] when `wallet` or `price` is missing. No
/// partial payload is constructed in that case.
///
/// # Example
///
/// ```
/// use payonce_lib::{create_invoice, InvoiceRequest};
///
/// let invoice = create_invoice(&InvoiceRequest::new("abc123", 5u64))?;
/// assert_eq!(invoice.payload.n, "Digital Item");
/// # Ok::<(), payonce_lib::PayonceError>(())
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(request), fields(wallet = %request.wallet))
)]
pub fn create_invoice(request: &InvoiceRequest) -> Result<CreatedInvoice> {
    create_invoice_at(request, chrono::Utc::now().timestamp_millis())
}

/// Build an invoice with a caller-pinned timestamp.
///
/// [`create_invoice`] delegates here with the current time. Pinning
/// `issued_at_ms` makes the output fully deterministic: identical requests
/// with identical timestamps produce identical URLs and signatures.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(request), fields(wallet = %request.wallet, ts = issued_at_ms))
)]
pub fn create_invoice_at(request: &InvoiceRequest, issued_at_ms: i64) -> Result<CreatedInvoice> {
    if request.wallet.is_empty() || request.price.is_missing() {
        return Err(PayonceError::InvalidRequest(
            "'wallet' and 'price' are required".to_string(),
        ));
    }

    let product = match request.product.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_PRODUCT.to_string(),
    };

    let mut payload = InvoicePayload {
        w: request.wallet.clone(),
        p: request.price.to_string(),
        n: product,
        dt: INVOICE_KIND.to_string(),
        ts: issued_at_ms,
        sec: None,
    };

    // The signature covers the payload as it stands here, before `sec` is set.
    if let Some(key) = request.secret_key.as_deref().filter(|key| !key.is_empty()) {
        payload.sec = Some(signing::sign_payload(key, &payload)?);
    }

    let url = url::unlock_url(&payload)?;
    let signature = payload.sec.clone();

    Ok(CreatedInvoice {
        url,
        payload,
        signature,
    })
}
