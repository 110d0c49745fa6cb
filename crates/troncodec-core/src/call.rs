//! Decoded function-call types.
//!
//! These are the output when decoding transaction calldata (as opposed to
//! event logs, which produce `DecodedEvent`).

use crate::event::DecodedParam;
use crate::types::ParamValue;
use serde::{Deserialize, Serialize};

/// Result of decoding a function call's calldata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedCall {
    /// Canonical signature that matched, e.g. "transfer(address,uint256)"
    pub signature: String,
    /// Function name
    pub function: String,
    /// Decoded parameters in declaration order
    pub params: Vec<DecodedParam>,
}

impl DecodedCall {
    /// Look up a decoded parameter value by name.
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.iter().find(|p| p.name == name).map(|p| &p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamType;

    #[test]
    fn param_lookup() {
        let call = DecodedCall {
            signature: "transfer(address,uint256)".into(),
            function: "transfer".into(),
            params: vec![
                DecodedParam {
                    name: "to".into(),
                    ty: ParamType::Address,
                    value: ParamValue::Word("aa".into()),
                },
                DecodedParam {
                    name: "value".into(),
                    ty: ParamType::Uint(256),
                    value: ParamValue::Word("bb".into()),
                },
            ],
        };
        assert_eq!(call.param("to").unwrap().as_word(), Some("aa"));
        assert!(call.param("nonexistent").is_none());
    }

    #[test]
    fn serializes_as_plain_mapping() {
        let call = DecodedCall {
            signature: "transfer(address,uint256)".into(),
            function: "transfer".into(),
            params: vec![],
        };
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["function"], "transfer");
        assert_eq!(json["signature"], "transfer(address,uint256)");
    }
}
