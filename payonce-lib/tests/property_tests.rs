//! Property-based tests for invoice construction.

use payonce_lib::{
    create_invoice_at, parse_unlock_url, verify_payload, InvoiceRequest, DEFAULT_PRODUCT,
};
use proptest::prelude::*;

proptest! {
    /// Any valid request survives the encode/decode round trip intact.
    #[test]
    fn roundtrip_recovers_payload(
        wallet in "\\w{1,32}",
        price in 1u64..1_000_000,
        product in "[A-Za-z0-9 ]{0,24}",
        ts in 0i64..4_102_444_800_000,
    ) {
        let request = InvoiceRequest::new(wallet, price).with_product(product);
        let invoice = create_invoice_at(&request, ts).unwrap();

        let parsed = parse_unlock_url(&invoice.url).unwrap();
        prop_assert_eq!(parsed, invoice.payload);
    }

    /// Unsigned invoices never carry a signature field.
    #[test]
    fn unsigned_invoices_have_no_sec(
        wallet in "\\w{1,32}",
        price in 1u64..1_000_000,
        ts in 0i64..4_102_444_800_000,
    ) {
        let invoice = create_invoice_at(&InvoiceRequest::new(wallet, price), ts).unwrap();

        prop_assert!(invoice.signature.is_none());
        let json = serde_json::to_string(&invoice.payload).unwrap();
        prop_assert!(!json.contains("\"sec\""));
    }

    /// Signed invoices verify with their key and fail with any other key.
    #[test]
    fn signed_invoices_verify_with_their_key(
        wallet in "\\w{1,32}",
        price in 1u64..1_000_000,
        secret in "\\w{1,16}",
        ts in 0i64..4_102_444_800_000,
    ) {
        let request = InvoiceRequest::new(wallet, price).with_secret_key(secret.clone());
        let invoice = create_invoice_at(&request, ts).unwrap();

        let wrong_secret = format!("{}x", secret);
        prop_assert!(verify_payload(&secret, &invoice.payload).unwrap());
        prop_assert!(!verify_payload(&wrong_secret, &invoice.payload).unwrap());
    }

    /// An empty product name always resolves to the placeholder.
    #[test]
    fn empty_product_resolves_to_placeholder(
        wallet in "\\w{1,32}",
        price in 1u64..1_000_000,
        ts in 0i64..4_102_444_800_000,
    ) {
        let bare = create_invoice_at(&InvoiceRequest::new(wallet.clone(), price), ts).unwrap();
        let empty = create_invoice_at(
            &InvoiceRequest::new(wallet, price).with_product(""),
            ts,
        ).unwrap();

        prop_assert_eq!(&bare.payload.n, DEFAULT_PRODUCT);
        prop_assert_eq!(&empty.payload.n, DEFAULT_PRODUCT);
    }

    /// A missing wallet is rejected no matter what else the request holds.
    #[test]
    fn empty_wallet_is_always_rejected(
        price in 1u64..1_000_000,
        secret in "\\w{0,16}",
        ts in 0i64..4_102_444_800_000,
    ) {
        let request = InvoiceRequest::new("", price).with_secret_key(secret);
        prop_assert!(create_invoice_at(&request, ts).is_err());
    }
}
