//! TVM calldata decoder.
//!
//! Matches the calldata's 4-byte selector prefix against the function
//! entries of an `AbiCatalog` and decodes positional arguments.
//!
//! # Wire layout
//! The payload uses a simplified inline array encoding, not the canonical
//! head/tail dynamic-offset ABI layout:
//!
//! ```text
//! [8-hex selector][count-table: one reserved word per array param][slots...]
//! ```
//!
//! The decode cursor starts after the reserved count table. An array
//! parameter then reads one word at the cursor as its element count N,
//! followed by N element words inline; a scalar parameter reads a single
//! word. This layout must be kept as-is for wire compatibility with the
//! contracts it was built against.
//!
//! Unlike log decoding, no trailing-data check is performed after the last
//! parameter — a longer-than-needed payload decodes successfully. Kept
//! asymmetric on purpose; see DESIGN.md.

use tracing::{debug, trace};
use troncodec_core::{
    AbiCatalog, AbiEntry, AbiKind, DecodeError, DecodedCall, DecodedParam, ParamValue,
};

use crate::signature::{canonical_signature, function_selector};
use crate::words::{parse_length, read_word, SELECTOR_HEX, WORD_HEX};

/// Decodes raw calldata against a contract's ABI catalog.
/// Stateless; safe to share across threads.
#[derive(Debug, Default, Clone)]
pub struct CallDecoder;

impl CallDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode a calldata hex string (selector prefix included, no `0x`).
    ///
    /// The first function entry (declaration order) whose selector prefixes
    /// the calldata wins.
    ///
    /// # Errors
    /// - `UnknownSelector` if no function entry matches the 4-byte prefix
    /// - `MalformedInput` if the payload is too short for the declared slots
    pub fn decode(&self, catalog: &AbiCatalog, call_data: &str) -> Result<DecodedCall, DecodeError> {
        if call_data.len() < SELECTOR_HEX {
            return Err(DecodeError::MalformedInput {
                reason: format!(
                    "calldata too short: {} hex chars, need at least {SELECTOR_HEX} for the selector",
                    call_data.len()
                ),
            });
        }
        let selector = &call_data[..SELECTOR_HEX];

        let Some((entry, signature)) = self.find_function(catalog, selector) else {
            debug!(%selector, "no function entry matches selector");
            return Err(DecodeError::UnknownSelector {
                selector: selector.to_string(),
            });
        };
        trace!(function = %entry.name, %signature, "matched selector");

        // Reserve one leading word per array parameter (the count table);
        // positional slots start after it.
        let array_count = entry.inputs.iter().filter(|i| i.ty.is_array()).count();
        let mut cursor = SELECTOR_HEX + WORD_HEX * array_count;

        let mut params = Vec::with_capacity(entry.inputs.len());
        for input in &entry.inputs {
            let value = if input.ty.is_array() {
                let count = parse_length(read_word(call_data, cursor)?)?;
                cursor += WORD_HEX;
                let mut elements = Vec::with_capacity(count);
                for _ in 0..count {
                    elements.push(read_word(call_data, cursor)?.to_string());
                    cursor += WORD_HEX;
                }
                ParamValue::Words(elements)
            } else {
                let word = read_word(call_data, cursor)?.to_string();
                cursor += WORD_HEX;
                ParamValue::Word(word)
            };
            params.push(DecodedParam {
                name: input.name.clone(),
                ty: input.ty.clone(),
                value,
            });
        }

        Ok(DecodedCall {
            signature,
            function: entry.name.clone(),
            params,
        })
    }

    fn find_function<'a>(
        &self,
        catalog: &'a AbiCatalog,
        selector: &str,
    ) -> Option<(&'a AbiEntry, String)> {
        catalog.entries_of_kind(AbiKind::Function).find_map(|entry| {
            let signature = canonical_signature(entry);
            (function_selector(&signature) == selector).then_some((entry, signature))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use troncodec_core::{AbiParam, ParamType};

    fn word(fill: &str) -> String {
        assert_eq!(64 % fill.len(), 0);
        fill.repeat(64 / fill.len())
    }

    fn length_word(n: usize) -> String {
        format!("{n:064x}")
    }

    fn param(name: &str, ty: ParamType) -> AbiParam {
        AbiParam {
            name: name.into(),
            ty,
            indexed: false,
        }
    }

    fn function(name: &str, inputs: Vec<AbiParam>) -> AbiEntry {
        AbiEntry {
            kind: AbiKind::Function,
            name: name.into(),
            inputs,
        }
    }

    fn transfer_catalog() -> AbiCatalog {
        AbiCatalog::new(vec![function(
            "transfer",
            vec![
                param("to", ParamType::Address),
                param("value", ParamType::Uint(256)),
            ],
        )])
    }

    #[test]
    fn decodes_scalar_call() {
        // transfer(address,uint256) → selector a9059cbb
        let call_data = format!("a9059cbb{}{}", word("aa"), word("0f"));
        let decoded = CallDecoder::new()
            .decode(&transfer_catalog(), &call_data)
            .unwrap();

        assert_eq!(decoded.function, "transfer");
        assert_eq!(decoded.signature, "transfer(address,uint256)");
        assert_eq!(decoded.param("to").unwrap().as_word(), Some(word("aa").as_str()));
        assert_eq!(decoded.param("value").unwrap().as_word(), Some(word("0f").as_str()));
    }

    #[test]
    fn decodes_array_then_scalar() {
        // f(uint256[],address): one count-table word is reserved up front,
        // then [count=2][elem][elem][address] inline.
        let entry = function(
            "f",
            vec![
                param("amounts", ParamType::Array(Box::new(ParamType::Uint(256)))),
                param("recipient", ParamType::Address),
            ],
        );
        let selector = function_selector(&canonical_signature(&entry));
        let catalog = AbiCatalog::new(vec![entry]);

        let call_data = format!(
            "{selector}{}{}{}{}{}",
            word("00"), // reserved count-table slot
            length_word(2),
            word("a1"),
            word("a2"),
            word("cc"),
        );
        let decoded = CallDecoder::new().decode(&catalog, &call_data).unwrap();

        assert_eq!(
            decoded.param("amounts").unwrap().as_words(),
            Some(&[word("a1"), word("a2")][..])
        );
        assert_eq!(decoded.param("recipient").unwrap().as_word(), Some(word("cc").as_str()));
    }

    #[test]
    fn two_array_params_reserve_two_table_words() {
        let entry = function(
            "g",
            vec![
                param("xs", ParamType::Array(Box::new(ParamType::Uint(256)))),
                param("ys", ParamType::Array(Box::new(ParamType::Address))),
            ],
        );
        let selector = function_selector(&canonical_signature(&entry));
        let catalog = AbiCatalog::new(vec![entry]);

        let call_data = format!(
            "{selector}{}{}{}{}{}{}",
            word("00"), // table slot for xs
            word("00"), // table slot for ys
            length_word(1),
            word("1a"),
            length_word(1),
            word("2b"),
        );
        let decoded = CallDecoder::new().decode(&catalog, &call_data).unwrap();
        assert_eq!(decoded.param("xs").unwrap().as_words(), Some(&[word("1a")][..]));
        assert_eq!(decoded.param("ys").unwrap().as_words(), Some(&[word("2b")][..]));
    }

    #[test]
    fn empty_array_decodes() {
        let entry = function(
            "h",
            vec![param("xs", ParamType::Array(Box::new(ParamType::Uint(256))))],
        );
        let selector = function_selector(&canonical_signature(&entry));
        let catalog = AbiCatalog::new(vec![entry]);

        let call_data = format!("{selector}{}{}", word("00"), length_word(0));
        let decoded = CallDecoder::new().decode(&catalog, &call_data).unwrap();
        assert_eq!(decoded.param("xs").unwrap().as_words(), Some(&[] as &[String]));
    }

    #[test]
    fn unknown_selector_is_explicit_error() {
        let call_data = format!("deadbeef{}", word("00"));
        let err = CallDecoder::new()
            .decode(&transfer_catalog(), &call_data)
            .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownSelector { ref selector } if selector == "deadbeef"
        ));
    }

    #[test]
    fn calldata_shorter_than_selector_is_malformed() {
        let err = CallDecoder::new()
            .decode(&transfer_catalog(), "a905")
            .unwrap_err();
        assert!(matches!(err, DecodeError::MalformedInput { .. }));
    }

    #[test]
    fn truncated_payload_is_malformed() {
        // Selector matches but only one of the two argument words is present.
        let call_data = format!("a9059cbb{}", word("aa"));
        let err = CallDecoder::new()
            .decode(&transfer_catalog(), &call_data)
            .unwrap_err();
        assert!(matches!(err, DecodeError::MalformedInput { .. }));
    }

    #[test]
    fn trailing_payload_is_accepted() {
        // Calls deliberately skip the trailing-data check that logs perform.
        let call_data = format!("a9059cbb{}{}{}", word("aa"), word("0f"), word("ee"));
        assert!(CallDecoder::new()
            .decode(&transfer_catalog(), &call_data)
            .is_ok());
    }

    #[test]
    fn first_declared_function_wins_on_duplicate_signature() {
        let first = function("transfer", vec![param("to", ParamType::Address), param("value", ParamType::Uint(256))]);
        let mut second = first.clone();
        second.inputs[1].name = "amount".into();
        let catalog = AbiCatalog::new(vec![first, second]);

        let call_data = format!("a9059cbb{}{}", word("aa"), word("0f"));
        let decoded = CallDecoder::new().decode(&catalog, &call_data).unwrap();
        assert!(decoded.param("value").is_some());
        assert!(decoded.param("amount").is_none());
    }

    #[test]
    fn non_function_entries_are_skipped() {
        let mut entries = transfer_catalog().entries().to_vec();
        entries.insert(
            0,
            AbiEntry {
                kind: AbiKind::Event,
                name: "transfer".into(),
                inputs: vec![
                    param("to", ParamType::Address),
                    param("value", ParamType::Uint(256)),
                ],
            },
        );
        let catalog = AbiCatalog::new(entries);
        let call_data = format!("a9059cbb{}{}", word("aa"), word("0f"));
        let decoded = CallDecoder::new().decode(&catalog, &call_data).unwrap();
        assert_eq!(decoded.function, "transfer");
    }
}
