//! ABI encoding of token metadata for Solidity test assertions.
//!
//! Tests compare a contract's `tokenURI` output against a `Metadata` struct
//! they declare themselves. The fixture is produced by encoding the struct as
//! the sole argument of a dummy function and dropping the 4-byte selector,
//! which leaves exactly what `abi.decode(data, (Metadata))` expects.

use alloy_sol_types::{sol, SolCall, SolType};

use crate::error::Result;
use crate::metadata::TokenMetadata;

sol! {
    /// Mirror of the `Metadata` struct declared by the Solidity tests.
    #[derive(Debug, PartialEq, Eq)]
    struct Metadata {
        string name;
        string description;
        string image;
        string external_url;
    }

    function encodeMetadata(Metadata metadata);
}

/// Length of the function selector prepended to ABI call data.
pub const SELECTOR_LEN: usize = 4;

impl From<&TokenMetadata> for Metadata {
    fn from(value: &TokenMetadata) -> Self {
        Self {
            name: value.name.clone(),
            description: value.description.clone(),
            image: value.image.clone(),
            external_url: value.external_url.clone(),
        }
    }
}

impl From<Metadata> for TokenMetadata {
    fn from(value: Metadata) -> Self {
        Self {
            name: value.name,
            description: value.description,
            image: value.image,
            external_url: value.external_url,
        }
    }
}

/// ABI-encode `metadata` as a `(string,string,string,string)` tuple argument,
/// without the function selector.
pub fn encode_metadata(metadata: &TokenMetadata) -> Vec<u8> {
    let call = encodeMetadataCall {
        metadata: metadata.into(),
    };
    let mut encoded = call.abi_encode();
    encoded.drain(..SELECTOR_LEN);

    tracing::trace!(
        target: "token_metadata::abi",
        len = encoded.len(),
        "Encoded metadata tuple"
    );

    encoded
}

/// [`encode_metadata`] rendered as `0x`-prefixed lowercase hex.
pub fn encode_metadata_hex(metadata: &TokenMetadata) -> String {
    format!("0x{}", hex::encode(encode_metadata(metadata)))
}

/// Decode a selector-less encoding produced by [`encode_metadata`].
pub fn decode_metadata(data: &[u8]) -> Result<TokenMetadata> {
    let metadata = <Metadata as SolType>::abi_decode(data, true)?;
    Ok(metadata.into())
}

/// Decode hex produced by [`encode_metadata_hex`]. The `0x` prefix is optional.
pub fn decode_metadata_hex(data: &str) -> Result<TokenMetadata> {
    let bytes = hex::decode(data.strip_prefix("0x").unwrap_or(data))?;
    decode_metadata(&bytes)
}
