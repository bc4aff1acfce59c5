//! Decode and verify unlock links.

use anyhow::Result;
use payonce_lib::{parse_unlock_url, verify_payload};

use crate::ui;

pub fn run(input: &str, secret: Option<&str>) -> Result<()> {
    ui::header("Inspect Unlock Link");

    let payload = parse_unlock_url(input)?;

    ui::key_value("Wallet", &payload.w);
    ui::key_value("Price", &payload.p);
    ui::key_value("Product", &payload.n);
    ui::key_value("Kind", &payload.dt);
    ui::key_value("Created", &format_timestamp(payload.ts));
    match payload.sec.as_deref() {
        Some(sec) => ui::key_value("Signature", sec),
        None => ui::info("Payload is unsigned"),
    }

    if let Some(secret) = secret {
        ui::separator();
        if verify_payload(secret, &payload)? {
            ui::success("Signature verifies with the supplied key");
        } else {
            ui::error("Signature does NOT verify with the supplied key");
        }
    }

    println!();
    ui::json(&payload);

    Ok(())
}

fn format_timestamp(ts_millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ts_millis)
        .map(|dt| format!("{} ({})", ts_millis, dt.format("%Y-%m-%d %H:%M:%S UTC")))
        .unwrap_or_else(|| ts_millis.to_string())
}
