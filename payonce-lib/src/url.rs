//! Unlock URL construction and parsing.
//!
//! An unlock URL is the hosted endpoint with the payload appended as
//! `?id=<base64>`, where the base64 is the standard padded alphabet over the
//! payload's compact JSON. The id is deliberately not percent-encoded: the
//! unlock service expects `+`, `/` and `=` literally.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::{InvoicePayload, PayonceError, Result};

/// Hosted unlock endpoint consuming generated invoice links.
pub const UNLOCK_BASE_URL: &str = "https://payonce-cash.vercel.app/unlock";

/// Build the unlock URL for `payload` against [`UNLOCK_BASE_URL`].
pub fn unlock_url(payload: &InvoicePayload) -> Result<String> {
    unlock_url_for(UNLOCK_BASE_URL, payload)
}

/// Build an unlock URL against an explicit base endpoint.
///
/// [`unlock_url`] uses [`UNLOCK_BASE_URL`]; hosting the unlock page
/// elsewhere only changes the prefix, never the id encoding.
pub fn unlock_url_for(base_url: &str, payload: &InvoicePayload) -> Result<String> {
    let encoded = STANDARD.encode(serde_json::to_string(payload)?);
    Ok(format!("{base_url}?id={encoded}"))
}

/// Decode an unlock URL, or a bare encoded id, back into its payload.
///
/// Accepts the full `...?id=<base64>` form against any base endpoint, or the
/// `<base64>` id on its own.
///
/// # Errors
///
/// [`PayonceError::InvalidUrl`] when the `id` query parameter is missing or
/// empty, the base64 does not decode, or the decoded bytes are not an
/// invoice payload.
pub fn parse_unlock_url(input: &str) -> Result<InvoicePayload> {
    let input = input.trim();

    let encoded = match input.split_once("?id=") {
        Some((_, id)) => id,
        None if input.contains("://") => {
            return Err(PayonceError::InvalidUrl(
                "missing 'id' query parameter".to_string(),
            ))
        }
        None => input,
    };
    if encoded.is_empty() {
        return Err(PayonceError::InvalidUrl(
            "empty 'id' query parameter".to_string(),
        ));
    }

    let bytes = STANDARD
        .decode(encoded)
        .map_err(|err| PayonceError::InvalidUrl(format!("id is not valid base64: {err}")))?;

    serde_json::from_slice(&bytes).map_err(|err| {
        PayonceError::InvalidUrl(format!("id does not decode to an invoice payload: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_payload() -> InvoicePayload {
        InvoicePayload {
            w: "abc123".to_string(),
            p: "5".to_string(),
            n: "Sticker Pack".to_string(),
            dt: "invoice".to_string(),
            ts: 1_735_689_600_000,
            sec: None,
        }
    }

    #[test]
    fn test_url_embeds_base64_of_compact_json() {
        let payload = test_payload();
        let url = unlock_url(&payload).unwrap();

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            url,
            format!("{UNLOCK_BASE_URL}?id={}", STANDARD.encode(json))
        );
    }

    #[test]
    fn test_id_is_not_percent_encoded() {
        let url = unlock_url(&test_payload()).unwrap();
        assert!(!url.contains('%'));
    }

    #[test]
    fn test_custom_base_url_changes_prefix_only() {
        let payload = test_payload();
        let default_url = unlock_url(&payload).unwrap();
        let custom_url = unlock_url_for("https://unlock.example.com/open", &payload).unwrap();

        let id = default_url.split_once("?id=").unwrap().1;
        assert_eq!(custom_url, format!("https://unlock.example.com/open?id={id}"));
    }

    #[test]
    fn test_parse_round_trips_full_url() {
        let payload = test_payload();
        let url = unlock_url(&payload).unwrap();
        assert_eq!(parse_unlock_url(&url).unwrap(), payload);
    }

    #[test]
    fn test_parse_accepts_bare_id() {
        let payload = test_payload();
        let url = unlock_url(&payload).unwrap();
        let id = url.split_once("?id=").unwrap().1;

        assert_eq!(parse_unlock_url(id).unwrap(), payload);
    }

    #[test]
    fn test_parse_rejects_url_without_id() {
        assert!(matches!(
            parse_unlock_url("https://payonce-cash.vercel.app/unlock"),
            Err(PayonceError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_base64() {
        let err = parse_unlock_url(&format!("{UNLOCK_BASE_URL}?id=!!!not-base64!!!")).unwrap_err();
        assert!(err.to_string().contains("base64"));
    }

    #[test]
    fn test_parse_rejects_non_payload_json() {
        let id = STANDARD.encode("[1,2,3]");
        assert!(matches!(
            parse_unlock_url(&format!("{UNLOCK_BASE_URL}?id={id}")),
            Err(PayonceError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_parse_preserves_signature_field() {
        let mut payload = test_payload();
        payload.sec = Some("ab".repeat(32));

        let url = unlock_url(&payload).unwrap();
        let parsed = parse_unlock_url(&url).unwrap();
        assert_eq!(parsed.sec, payload.sec);
    }
}
