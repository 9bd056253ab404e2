//! Configuration for the token metadata encoder

use clap::Parser;

/// Token Metadata ABI Encoder
///
/// Decodes the base64 JSON returned by an NFT's `tokenURI`, decodes its
/// base64 SVG image, and prints the ABI encoding of
/// `(name, description, image, external_url)` without a function selector.
#[derive(Parser, Debug)]
#[command(name = "token-metadata-abi")]
#[command(version, about = "Encode tokenURI metadata for Solidity test assertions", long_about = None)]
pub struct Config {
    /// Token URI in the form `data:application/json;base64,<payload>`
    pub token_uri: String,
}
