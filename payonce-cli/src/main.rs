//! PayOnce demo CLI
//!
//! Command-line interface for building and inspecting PayOnce unlock links.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "payonce")]
#[command(about = "PayOnce demo CLI - build and inspect payment unlock links", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a payment unlock link
    Create {
        /// Wallet identifier of the payee
        wallet: String,

        /// Price (number or free-form string)
        price: String,

        /// Product display name
        #[arg(short, long)]
        product: Option<String>,

        /// Secret key for signing the invoice
        #[arg(short, long)]
        secret: Option<String>,

        /// Base unlock endpoint
        #[arg(long, default_value = payonce_lib::UNLOCK_BASE_URL)]
        base_url: String,

        /// Render the link as a terminal QR code
        #[arg(long)]
        qr: bool,
    },

    /// Decode an unlock link (or bare id) and show its payload
    Inspect {
        /// Unlock URL or base64 id
        input: String,

        /// Secret key to verify the embedded signature against
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Display a QR code for an unlock link
    Qr {
        /// Unlock URL
        url: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("payonce_cli=debug,payonce_lib=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("payonce_cli=info,payonce_lib=warn")
            .init();
    }

    match cli.command {
        Commands::Create {
            wallet,
            price,
            product,
            secret,
            base_url,
            qr,
        } => {
            commands::create::run(
                &wallet,
                &price,
                product.as_deref(),
                secret.as_deref(),
                &base_url,
                qr,
            )?;
        }
        Commands::Inspect { input, secret } => {
            commands::inspect::run(&input, secret.as_deref())?;
        }
        Commands::Qr { url } => {
            commands::qr::run(&url)?;
        }
    }

    Ok(())
}
