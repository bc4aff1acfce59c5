//! Build and display a payment unlock link.

use anyhow::Result;
use payonce_lib::{create_invoice, unlock_url_for, InvoiceRequest, Price, UNLOCK_BASE_URL};
use tracing::debug;

use crate::ui;

pub fn run(
    wallet: &str,
    price: &str,
    product: Option<&str>,
    secret: Option<&str>,
    base_url: &str,
    qr: bool,
) -> Result<()> {
    ui::header("Create Unlock Link");

    let price: Price = price.parse()?;
    let mut request = InvoiceRequest::new(wallet, price);
    if let Some(product) = product {
        request = request.with_product(product);
    }
    if let Some(secret) = secret {
        request = request.with_secret_key(secret);
    }

    let invoice = create_invoice(&request)?;

    // Rebuild against the custom endpoint when one was given; the id bytes
    // are identical either way.
    let url = if base_url == UNLOCK_BASE_URL {
        invoice.url.clone()
    } else {
        unlock_url_for(base_url, &invoice.payload)?
    };
    debug!(url_len = url.len(), signed = invoice.signature.is_some(), "invoice created");

    ui::key_value("Wallet", &invoice.payload.w);
    ui::key_value("Price", &invoice.payload.p);
    ui::key_value("Product", &invoice.payload.n);
    match invoice.signature.as_deref() {
        Some(signature) => ui::key_value("Signature", signature),
        None => ui::info("Unsigned invoice (no secret key supplied)"),
    }

    ui::separator();
    ui::key_value("URL", &url);
    println!();
    ui::json(&invoice.payload);

    if qr {
        println!();
        ui::qr_code(&url)?;
    }

    ui::success("Unlock link ready");
    Ok(())
}
