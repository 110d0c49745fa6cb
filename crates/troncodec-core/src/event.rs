//! Raw and decoded event-log types.

use crate::types::{ParamType, ParamValue};
use serde::{Deserialize, Serialize};

/// A raw, undecoded TVM event log as received from a node or event service.
///
/// All hex is lowercase with no `0x` prefix: `topics` are 64-hex-char words
/// (`topics[0]` is the event signature hash, the rest are indexed
/// parameters), `data` is the concatenation of the non-indexed parameter
/// words, and `address` is the emitting contract's 20-byte hex address
/// without its version-byte prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLog {
    pub address: String,
    pub topics: Vec<String>,
    #[serde(default)]
    pub data: String,
}

/// One decoded parameter, positionally matched against the ABI entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedParam {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ParamType,
    pub value: ParamValue,
}

/// A fully decoded event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedEvent {
    /// Emitting contract address, prefixed with the chain's address-version
    /// byte ("41" on Tron)
    pub address: String,
    /// Canonical signature that matched, e.g. "Transfer(address,address,uint256)"
    pub signature: String,
    /// Human-readable reconstruction with the raw word values inlined,
    /// e.g. "Transfer(000...045,000...9cb,000...f4240)"
    pub call: String,
    /// Event name
    pub event: String,
    /// Decoded parameters in declaration order
    pub params: Vec<DecodedParam>,
}

impl DecodedEvent {
    /// Look up a decoded parameter value by name.
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.iter().find(|p| p.name == name).map(|p| &p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_lookup() {
        let event = DecodedEvent {
            address: "41a614f803b6fd780986a42c78ec9c7f77e6ded13c".into(),
            signature: "Transfer(address,address,uint256)".into(),
            call: "Transfer(aa,bb,cc)".into(),
            event: "Transfer".into(),
            params: vec![DecodedParam {
                name: "value".into(),
                ty: ParamType::Uint(256),
                value: ParamValue::Word("cc".into()),
            }],
        };
        assert_eq!(event.param("value").unwrap().as_word(), Some("cc"));
        assert!(event.param("nonexistent").is_none());
    }

    #[test]
    fn raw_log_data_defaults_empty() {
        let log: RawLog = serde_json::from_str(
            r#"{"address": "a614f803b6fd780986a42c78ec9c7f77e6ded13c", "topics": []}"#,
        )
        .unwrap();
        assert!(log.data.is_empty());
    }
}
