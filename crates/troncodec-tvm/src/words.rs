//! Fixed-width word arithmetic over hex-string payloads.
//!
//! The TVM encodes every scalar slot as one 32-byte word — 64 lowercase hex
//! characters. All cursor positions in this crate are counted in hex
//! characters over the raw payload string.

use troncodec_core::DecodeError;

/// Hex characters per 32-byte word slot.
pub const WORD_HEX: usize = 64;

/// Hex characters in a 4-byte function selector.
pub const SELECTOR_HEX: usize = 8;

/// Read one word slot starting at `pos`.
///
/// # Errors
/// `MalformedInput` if the payload is too short to hold a full word there.
pub fn read_word(payload: &str, pos: usize) -> Result<&str, DecodeError> {
    payload
        .get(pos..pos + WORD_HEX)
        .ok_or_else(|| DecodeError::MalformedInput {
            reason: format!(
                "payload too short: need word at hex offset {pos}, have {} chars",
                payload.len()
            ),
        })
}

/// Interpret a word as an element count.
///
/// # Errors
/// `MalformedInput` if the word is not hex or the count does not fit a `usize`.
pub fn parse_length(word: &str) -> Result<usize, DecodeError> {
    let trimmed = word.trim_start_matches('0');
    if trimmed.is_empty() {
        return Ok(0);
    }
    usize::from_str_radix(trimmed, 16).map_err(|_| DecodeError::MalformedInput {
        reason: format!("invalid array length word '{word}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_word_in_bounds() {
        let payload = format!("{}{}", "a".repeat(64), "b".repeat(64));
        assert_eq!(read_word(&payload, 0).unwrap(), "a".repeat(64));
        assert_eq!(read_word(&payload, 64).unwrap(), "b".repeat(64));
    }

    #[test]
    fn read_word_truncated() {
        let payload = "ab".repeat(16); // half a word
        assert!(matches!(
            read_word(&payload, 0),
            Err(DecodeError::MalformedInput { .. })
        ));
    }

    #[test]
    fn parse_length_zero_and_small() {
        assert_eq!(parse_length(&"0".repeat(64)).unwrap(), 0);
        let two = format!("{}2", "0".repeat(63));
        assert_eq!(parse_length(&two).unwrap(), 2);
    }

    #[test]
    fn parse_length_garbage() {
        let word = format!("{}zz", "0".repeat(62));
        assert!(parse_length(&word).is_err());
    }
}
