//! The metadata record carried by a token URI.

use serde::{Deserialize, Serialize};

use crate::data_uri;
use crate::error::{MetadataError, Result};

/// Token metadata as returned by an on-chain `tokenURI` call.
///
/// Field order matches the positional ABI tuple
/// `(name, description, image, external_url)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    /// SVG data URI while embedded in JSON, decoded SVG text after
    /// [`TokenMetadata::from_token_uri`].
    pub image: String,
    pub external_url: String,
}

impl TokenMetadata {
    /// Parse metadata JSON.
    ///
    /// Malformed JSON is a [`MetadataError::Json`]; well-formed JSON that is
    /// not an object with the four string fields is a [`MetadataError::Shape`].
    /// Unknown keys such as `attributes` are ignored.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text).map_err(MetadataError::Json)?;

        // Derived structs also deserialize from arrays; metadata is keyed.
        if !value.is_object() {
            return Err(MetadataError::Shape(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        }

        serde_json::from_value(value).map_err(|e| MetadataError::Shape(e.to_string()))
    }

    /// Decode a `data:application/json;base64,` token URI and its nested
    /// SVG image.
    pub fn from_token_uri(uri: &str) -> Result<Self> {
        let json = data_uri::decode_json_uri(uri)?;
        let mut metadata = Self::from_json(&json)?;
        metadata.image = data_uri::decode_svg_uri(&metadata.image)?;

        tracing::debug!(
            target: "token_metadata::metadata",
            name = %metadata.name,
            svg_len = metadata.image.len(),
            "Decoded token metadata"
        );

        Ok(metadata)
    }

    /// Build the token URI a contract would return for this metadata.
    ///
    /// `image` is treated as SVG text and re-wrapped as a data URI.
    pub fn to_token_uri(&self) -> String {
        let json = serde_json::json!({
            "name": self.name,
            "description": self.description,
            "image": data_uri::encode_svg_uri(&self.image),
            "external_url": self.external_url,
        });
        data_uri::encode_json_uri(&json.to_string())
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
