//! QR code rendering for unlock links.

use anyhow::Result;

use crate::ui;

pub fn run(url: &str) -> Result<()> {
    ui::header("Unlock Link QR Code");

    ui::key_value("URL", url);
    println!();
    ui::qr_code(url)?;

    ui::separator();
    ui::info("Scan this QR code to open the unlock page");

    Ok(())
}
