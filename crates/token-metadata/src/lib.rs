//! Token URI metadata decoding and ABI fixture encoding.
//!
//! Turns the `data:application/json;base64,...` string returned by a fully
//! on-chain NFT's `tokenURI` into the ABI encoding of its
//! `(name, description, image, external_url)` tuple, with the SVG image
//! decoded, so Solidity tests can compare against a struct directly.
//!
//! # Example
//!
//! ```rust
//! use token_metadata::{encode_token_uri, TokenMetadata};
//!
//! let metadata = TokenMetadata {
//!     name: "N".to_string(),
//!     description: "D".to_string(),
//!     image: "<svg/>".to_string(),
//!     external_url: "U".to_string(),
//! };
//! let hex = encode_token_uri(&metadata.to_token_uri())?;
//! assert!(hex.starts_with("0x0000000000000000000000000000000000000000000000000000000000000020"));
//! # Ok::<(), token_metadata::MetadataError>(())
//! ```

pub mod abi;
pub mod data_uri;
pub mod error;
pub mod metadata;

pub use abi::{decode_metadata, decode_metadata_hex, encode_metadata, encode_metadata_hex};
pub use error::{MetadataError, Result, Stage};
pub use metadata::TokenMetadata;

/// Decode a token URI and return the selector-less ABI encoding of its
/// metadata as `0x`-prefixed hex.
pub fn encode_token_uri(uri: &str) -> Result<String> {
    let metadata = TokenMetadata::from_token_uri(uri)?;
    Ok(encode_metadata_hex(&metadata))
}
