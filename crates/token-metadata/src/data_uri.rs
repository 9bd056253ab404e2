//! `data:` URI handling for on-chain token metadata.
//!
//! Fully on-chain NFTs return their metadata from `tokenURI` as
//! `data:application/json;base64,<payload>`, and the JSON's `image` field is
//! usually another data URI, `data:image/svg+xml;base64,<payload>`.
//!
//! Only these two exact prefixes are accepted. Anything else (plain JSON,
//! URL-encoded payloads, `ipfs://` links) is reported as an
//! [`MetadataError::UnexpectedPrefix`] instead of being passed through.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::{MetadataError, Result, Stage};

pub const JSON_BASE64_PREFIX: &str = "data:application/json;base64,";
pub const SVG_BASE64_PREFIX: &str = "data:image/svg+xml;base64,";

// Contracts differ on whether they pad their base64 output.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// How much of an unrecognised URI to echo back in error messages.
const PREVIEW_CHARS: usize = 32;

/// Strip `prefix` from `uri` only if it is an exact leading match.
pub fn strip_prefix<'a>(uri: &'a str, prefix: &str) -> Option<&'a str> {
    uri.strip_prefix(prefix)
}

/// Base64-decode `payload` and interpret the bytes as UTF-8 text.
pub fn decode_base64_text(payload: &str, stage: Stage) -> Result<String> {
    let bytes = BASE64
        .decode(payload)
        .map_err(|source| MetadataError::Base64 { stage, source })?;

    tracing::trace!(
        target: "token_metadata::data_uri",
        %stage,
        encoded_len = payload.len(),
        decoded_len = bytes.len(),
        "Decoded base64 payload"
    );

    String::from_utf8(bytes).map_err(|source| MetadataError::Utf8 { stage, source })
}

/// Decode a `data:application/json;base64,` token URI to its JSON text.
pub fn decode_json_uri(uri: &str) -> Result<String> {
    decode_prefixed(uri, JSON_BASE64_PREFIX, Stage::TokenUri)
}

/// Decode a `data:image/svg+xml;base64,` image URI to its SVG text.
pub fn decode_svg_uri(uri: &str) -> Result<String> {
    decode_prefixed(uri, SVG_BASE64_PREFIX, Stage::Image)
}

/// Wrap JSON text as a `data:application/json;base64,` URI.
pub fn encode_json_uri(json: &str) -> String {
    format!("{JSON_BASE64_PREFIX}{}", BASE64.encode(json))
}

/// Wrap SVG text as a `data:image/svg+xml;base64,` URI.
pub fn encode_svg_uri(svg: &str) -> String {
    format!("{SVG_BASE64_PREFIX}{}", BASE64.encode(svg))
}

fn decode_prefixed(uri: &str, prefix: &'static str, stage: Stage) -> Result<String> {
    let Some(payload) = strip_prefix(uri, prefix) else {
        tracing::debug!(
            target: "token_metadata::data_uri",
            %stage,
            "Missing expected data URI prefix"
        );
        return Err(MetadataError::UnexpectedPrefix {
            stage,
            expected: prefix,
            found: uri.chars().take(PREVIEW_CHARS).collect(),
        });
    };

    decode_base64_text(payload, stage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_uri_base64() {
        let uri = "data:application/json;base64,eyJuYW1lIjoidGVzdCJ9";
        assert_eq!(decode_json_uri(uri).unwrap(), r#"{"name":"test"}"#);
    }

    #[test]
    fn test_decode_json_uri_without_padding() {
        // "{}" is "e30=" when padded
        let uri = "data:application/json;base64,e30";
        assert_eq!(decode_json_uri(uri).unwrap(), "{}");
    }

    #[test]
    fn test_decode_svg_uri() {
        let uri = "data:image/svg+xml;base64,PHN2Zy8+";
        assert_eq!(decode_svg_uri(uri).unwrap(), "<svg/>");
    }

    #[test]
    fn test_strip_prefix_requires_leading_match() {
        assert_eq!(strip_prefix("data:x,abc", "data:x,"), Some("abc"));
        assert_eq!(strip_prefix(" data:x,abc", "data:x,"), None);
        assert_eq!(strip_prefix("abc data:x,", "data:x,"), None);
    }

    #[test]
    fn test_url_encoded_json_is_rejected() {
        let uri = "data:application/json,%7B%22name%22%3A%22test%22%7D";
        let err = decode_json_uri(uri).unwrap_err();
        assert!(matches!(
            err,
            MetadataError::UnexpectedPrefix {
                stage: Stage::TokenUri,
                ..
            }
        ));
    }

    #[test]
    fn test_plain_svg_image_is_rejected() {
        let err = decode_svg_uri("<svg/>").unwrap_err();
        match err {
            MetadataError::UnexpectedPrefix {
                stage,
                expected,
                found,
            } => {
                assert_eq!(stage, Stage::Image);
                assert_eq!(expected, SVG_BASE64_PREFIX);
                assert_eq!(found, "<svg/>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_base64() {
        let err = decode_json_uri("data:application/json;base64,not*base64").unwrap_err();
        assert!(matches!(
            err,
            MetadataError::Base64 {
                stage: Stage::TokenUri,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        // 0xff 0xfe
        let err = decode_svg_uri("data:image/svg+xml;base64,//4=").unwrap_err();
        assert!(matches!(
            err,
            MetadataError::Utf8 {
                stage: Stage::Image,
                ..
            }
        ));
    }

    #[test]
    fn test_error_preview_is_truncated() {
        let long = "x".repeat(100);
        let err = decode_json_uri(&long).unwrap_err();
        let MetadataError::UnexpectedPrefix { found, .. } = err else {
            panic!("expected prefix error");
        };
        assert_eq!(found.len(), PREVIEW_CHARS);
    }

    #[test]
    fn test_encode_helpers_are_padded() {
        assert_eq!(encode_json_uri("{}"), "data:application/json;base64,e30=");
        assert_eq!(encode_svg_uri("<svg/>"), "data:image/svg+xml;base64,PHN2Zy8+");
    }
}
