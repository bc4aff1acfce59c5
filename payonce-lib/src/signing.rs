//! Keyed-hash signatures over invoice payloads.
//!
//! A signature is HMAC-SHA256 over the compact JSON serialization of the
//! payload *without* its `sec` field, hex-encoded lowercase. The serialized
//! field order (`w, p, n, dt, ts`) therefore fixes the exact bytes signed;
//! see [`crate::InvoicePayload`].

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{InvoicePayload, PayonceError, Result};

type HmacSha256 = Hmac<Sha256>;

/// The exact bytes covered by a payload signature.
///
/// This is the compact JSON of the payload with `sec` stripped, whether or
/// not the payload is currently signed.
pub fn signing_input(payload: &InvoicePayload) -> Result<String> {
    let mut unsigned = payload.clone();
    unsigned.sec = None;
    Ok(serde_json::to_string(&unsigned)?)
}

/// Sign `payload` with `secret_key`, returning the lowercase hex digest.
///
/// Any `sec` already present on the payload is ignored; the signature always
/// covers the five unsigned fields.
pub fn sign_payload(secret_key: &str, payload: &InvoicePayload) -> Result<String> {
    let input = signing_input(payload)?;
    Ok(hmac_hex(secret_key.as_bytes(), input.as_bytes()))
}

/// Verify the signature embedded in `payload` against `secret_key`.
///
/// Returns `Ok(false)` for unsigned payloads and for signatures that do not
/// match; comparison is constant-time. Errors only when the embedded
/// signature is not valid hex.
pub fn verify_payload(secret_key: &str, payload: &InvoicePayload) -> Result<bool> {
    let sec = match payload.sec.as_deref() {
        Some(sec) => sec,
        None => return Ok(false),
    };
    let expected = hex::decode(sec)
        .map_err(|err| PayonceError::Crypto(format!("invalid signature hex: {err}")))?;

    let input = signing_input(payload)?;
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(input.as_bytes());
    Ok(mac.verify_slice(&expected).is_ok())
}

fn hmac_hex(key: &[u8], message: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}
