//! Error types for the TronCodec decode pipeline.

use thiserror::Error;

/// Errors raised while building an `AbiCatalog` from a contract's ABI document.
#[derive(Debug, Error)]
pub enum AbiError {
    /// The contract metadata carried no ABI — e.g. the contract was deployed
    /// without publishing one. Retry/backoff belongs to the fetch layer, not here.
    #[error("contract has no ABI")]
    Missing,

    #[error("unsupported ABI type tag '{tag}'")]
    UnsupportedType { tag: String },

    #[error("ABI parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while decoding a single log or calldata blob.
///
/// All of these are local failures returned to the immediate caller —
/// nothing in the core aborts the process.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No function entry's signature hash matches the calldata's 4-byte prefix.
    /// Unmatched *logs* are not an error; they decode to `None`.
    #[error("no function entry matches selector {selector}")]
    UnknownSelector { selector: String },

    /// The matched event consumed every input but left bytes in the log data.
    /// Signals an ABI/log mismatch and must be surfaced, never truncated away.
    #[error("log data has {remaining} unconsumed hex chars after decoding")]
    TrailingData { remaining: usize },

    /// Input too short (or not valid hex-string structure) to satisfy a slot read.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error(transparent)]
    Abi(#[from] AbiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = DecodeError::UnknownSelector {
            selector: "a9059cbb".into(),
        };
        assert_eq!(err.to_string(), "no function entry matches selector a9059cbb");

        let err = DecodeError::TrailingData { remaining: 64 };
        assert!(err.to_string().contains("64 unconsumed"));
    }

    #[test]
    fn abi_error_wraps_into_decode_error() {
        let err: DecodeError = AbiError::Missing.into();
        assert!(matches!(err, DecodeError::Abi(AbiError::Missing)));
    }
}
