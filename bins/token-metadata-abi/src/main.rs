//! Token Metadata ABI Encoder
//!
//! Test-fixture helper for fully on-chain NFTs: takes the string returned by
//! `tokenURI(id)` and prints the metadata as ABI-encoded hex, ready to be
//! `abi.decode`d into a `Metadata` struct in a Solidity test.
//!
//! # Usage
//!
//! ```bash
//! token-metadata-abi "data:application/json;base64,eyJuYW1lIjoi..."
//!
//! # Debug decoding steps (logs go to stderr)
//! RUST_LOG=token_metadata=trace token-metadata-abi "data:application/json;base64,..."
//! ```

mod config;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse CLI arguments
    let config = Config::parse();

    // Initialize logging. stdout carries only the encoded result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        target: "token_metadata_abi",
        uri_len = config.token_uri.len(),
        "Encoding token URI"
    );

    let encoded = token_metadata::encode_token_uri(&config.token_uri)
        .context("Failed to encode tokenURI metadata")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(encoded.as_bytes())
        .context("Failed to write encoded metadata to stdout")?;
    stdout.flush()?;

    Ok(())
}
