//! The closed TVM parameter type system.
//!
//! Tron ABIs declare parameter types as free-form strings ("address",
//! "uint256", "bytes32[]", ...). TronCodec parses them into a closed
//! variant so the decode loops can match exhaustively instead of doing
//! string comparisons on every slot.

use crate::error::AbiError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A parsed TVM ABI type tag.
///
/// Covers the scalar types plus one level of dynamic arrays — the full
/// head/tail ABI encoding (nested arrays, tuples) is out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Unsigned integer (uint8 .. uint256). Width in bits.
    Uint(u16),
    /// Signed integer (int8 .. int256). Width in bits.
    Int(u16),
    /// Boolean
    Bool,
    /// Fixed-size byte array (bytes1 .. bytes32). Length in bytes.
    Bytes(u8),
    /// Variable-length byte array
    BytesVec,
    /// UTF-8 string
    Str,
    /// 20-byte TVM address
    Address,
    /// Tron TRC-10 token id (a uint256 alias in the TVM)
    TrcToken,
    /// One-dimensional dynamic array of a scalar type
    Array(Box<ParamType>),
}

impl ParamType {
    /// Returns `true` for the dynamic-array variant.
    pub fn is_array(&self) -> bool {
        matches!(self, ParamType::Array(_))
    }
}

impl FromStr for ParamType {
    type Err = AbiError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let unsupported = || AbiError::UnsupportedType { tag: tag.to_string() };

        if let Some(elem) = tag.strip_suffix("[]") {
            let inner: ParamType = elem.parse()?;
            // Only one array dimension — no arrays of arrays.
            if inner.is_array() {
                return Err(unsupported());
            }
            return Ok(ParamType::Array(Box::new(inner)));
        }

        match tag {
            "address" => Ok(ParamType::Address),
            "bool" => Ok(ParamType::Bool),
            "string" => Ok(ParamType::Str),
            "bytes" => Ok(ParamType::BytesVec),
            "trcToken" => Ok(ParamType::TrcToken),
            // Widthless "uint"/"int" are canonicalized to 256 bits.
            "uint" => Ok(ParamType::Uint(256)),
            "int" => Ok(ParamType::Int(256)),
            _ => {
                if let Some(bits) = tag.strip_prefix("uint") {
                    let bits: u16 = bits.parse().map_err(|_| unsupported())?;
                    if bits == 0 || bits > 256 || bits % 8 != 0 {
                        return Err(unsupported());
                    }
                    return Ok(ParamType::Uint(bits));
                }
                if let Some(bits) = tag.strip_prefix("int") {
                    let bits: u16 = bits.parse().map_err(|_| unsupported())?;
                    if bits == 0 || bits > 256 || bits % 8 != 0 {
                        return Err(unsupported());
                    }
                    return Ok(ParamType::Int(bits));
                }
                if let Some(len) = tag.strip_prefix("bytes") {
                    let len: u8 = len.parse().map_err(|_| unsupported())?;
                    if len == 0 || len > 32 {
                        return Err(unsupported());
                    }
                    return Ok(ParamType::Bytes(len));
                }
                Err(unsupported())
            }
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Uint(bits) => write!(f, "uint{bits}"),
            ParamType::Int(bits) => write!(f, "int{bits}"),
            ParamType::Bool => write!(f, "bool"),
            ParamType::Bytes(n) => write!(f, "bytes{n}"),
            ParamType::BytesVec => write!(f, "bytes"),
            ParamType::Str => write!(f, "string"),
            ParamType::Address => write!(f, "address"),
            ParamType::TrcToken => write!(f, "trcToken"),
            ParamType::Array(elem) => write!(f, "{elem}[]"),
        }
    }
}

impl Serialize for ParamType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ParamType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(de::Error::custom)
    }
}

/// A decoded slot value — raw hex words, no further coercion.
/// Interpreting words as integers/addresses is the presentation layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A single 64-hex-char word (scalar parameter)
    Word(String),
    /// An ordered sequence of words (array parameter)
    Words(Vec<String>),
}

impl ParamValue {
    /// Returns the inner word if this is a scalar value.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            ParamValue::Word(w) => Some(w.as_str()),
            ParamValue::Words(_) => None,
        }
    }

    /// Returns the inner word list if this is an array value.
    pub fn as_words(&self) -> Option<&[String]> {
        match self {
            ParamValue::Word(_) => None,
            ParamValue::Words(w) => Some(w.as_slice()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Word(w) => write!(f, "{w}"),
            ParamValue::Words(words) => write!(f, "[{}]", words.join(",")),
        }
    }
}
