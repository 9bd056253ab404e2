use std::fmt;

/// Which layer of the token URI was being decoded when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The outer `data:application/json;base64,` token URI
    TokenUri,
    /// The nested `data:image/svg+xml;base64,` image field
    Image,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenUri => f.write_str("token URI"),
            Self::Image => f.write_str("image"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("{stage} does not start with `{expected}` (found {found:?})")]
    UnexpectedPrefix {
        stage: Stage,
        expected: &'static str,
        found: String,
    },
    #[error("invalid base64 in {stage}: {source}")]
    Base64 {
        stage: Stage,
        source: base64::DecodeError,
    },
    #[error("decoded {stage} is not valid UTF-8: {source}")]
    Utf8 {
        stage: Stage,
        source: std::string::FromUtf8Error,
    },
    #[error("metadata is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("metadata has an unexpected shape: {0}")]
    Shape(String),
    #[error("invalid ABI hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("invalid ABI encoding: {0}")]
    Abi(#[from] alloy_sol_types::Error),
}

pub type Result<T> = std::result::Result<T, MetadataError>;
