//! TVM event-log decoder.
//!
//! Matches a raw log against the event entries of an `AbiCatalog` by its
//! topics[0] signature hash and routes each input to either a topic slot
//! (indexed) or a data-payload word (non-indexed).

use tracing::{debug, trace};
use troncodec_core::{
    AbiCatalog, AbiEntry, AbiKind, DecodeError, DecodedEvent, DecodedParam, ParamValue, RawLog,
};

use crate::signature::{canonical_signature, signature_hash};
use crate::words::{read_word, WORD_HEX};

/// Tron prefixes hex addresses with its mainnet address-version byte.
const TRON_ADDRESS_PREFIX: &str = "41";

/// Decodes raw event logs against a contract's ABI catalog.
///
/// Stateless apart from the configured address prefix; safe to share across
/// threads and reuse for any number of logs.
#[derive(Debug, Clone)]
pub struct LogDecoder {
    /// Version-byte prefix prepended to the log address in decoded output.
    /// "41" for Tron; other ABI-compatible chains can override it.
    address_prefix: String,
}

impl Default for LogDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogDecoder {
    /// Decoder targeting Tron's address encoding.
    pub fn new() -> Self {
        Self {
            address_prefix: TRON_ADDRESS_PREFIX.to_string(),
        }
    }

    /// Decoder with a custom address-version prefix (may be empty).
    pub fn with_address_prefix(prefix: impl Into<String>) -> Self {
        Self {
            address_prefix: prefix.into(),
        }
    }

    /// Decode a raw log against the catalog's event entries.
    ///
    /// The first entry (declaration order) whose full signature hash equals
    /// `topics[0]` wins. `Ok(None)` means no entry matched — expected for
    /// logs from inherited or foreign events, not an error.
    ///
    /// # Errors
    /// - `TrailingData` if the matched entry leaves unconsumed bytes in `data`
    /// - `MalformedInput` if a topic or data slot the entry requires is missing
    pub fn decode(
        &self,
        catalog: &AbiCatalog,
        log: &RawLog,
    ) -> Result<Option<DecodedEvent>, DecodeError> {
        let Some(topic0) = log.topics.first() else {
            trace!(address = %log.address, "log has no topics, nothing to match");
            return Ok(None);
        };

        for entry in catalog.entries_of_kind(AbiKind::Event) {
            let signature = canonical_signature(entry);
            if signature_hash(&signature) != *topic0 {
                continue;
            }
            trace!(event = %entry.name, %signature, "matched topics[0]");
            return self.decode_matched(entry, signature, log).map(Some);
        }

        debug!(%topic0, "no event entry matches topics[0]");
        Ok(None)
    }

    fn decode_matched(
        &self,
        entry: &AbiEntry,
        signature: String,
        log: &RawLog,
    ) -> Result<DecodedEvent, DecodeError> {
        let mut params = Vec::with_capacity(entry.inputs.len());
        // topics[0] is the signature hash; indexed params start at topics[1].
        let mut indexed_cursor = 1usize;
        let mut data_cursor = 0usize;

        for input in &entry.inputs {
            let word = if input.indexed {
                let word = log.topics.get(indexed_cursor).cloned().ok_or_else(|| {
                    DecodeError::MalformedInput {
                        reason: format!(
                            "missing topic {indexed_cursor} for indexed param '{}'",
                            input.name
                        ),
                    }
                })?;
                indexed_cursor += 1;
                word
            } else {
                let word = read_word(&log.data, data_cursor)?.to_string();
                data_cursor += WORD_HEX;
                word
            };
            params.push(DecodedParam {
                name: input.name.clone(),
                ty: input.ty.clone(),
                value: ParamValue::Word(word),
            });
        }

        // Leftover data means the entry does not actually describe this log.
        if data_cursor < log.data.len() {
            return Err(DecodeError::TrailingData {
                remaining: log.data.len() - data_cursor,
            });
        }

        let values: Vec<String> = params.iter().map(|p| p.value.to_string()).collect();
        let call = format!("{}({})", entry.name, values.join(","));

        Ok(DecodedEvent {
            address: format!("{}{}", self.address_prefix, log.address),
            signature,
            call,
            event: entry.name.clone(),
            params,
        })
    }
}
