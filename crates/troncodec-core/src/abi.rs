//! The ABI catalog — an immutable, queryable view over one contract's ABI.
//!
//! The catalog is built from the ABI document an external metadata service
//! returns for a contract address (Tron's `getContract` envelope or a bare
//! entry array). It lives for one decoding session and may be shared
//! read-only across threads; nothing mutates it after construction.

use crate::error::AbiError;
use crate::types::ParamType;
use serde::{Deserialize, Serialize};

/// The kind of an ABI entry.
///
/// Real Tron ABIs also carry constructors, fallbacks and error entries;
/// they must parse cleanly but are never matched by the decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbiKind {
    Function,
    Event,
    Constructor,
    Fallback,
    #[serde(other)]
    Other,
}

/// A single declared function/event parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParam {
    /// Parameter name — may be empty for unnamed parameters
    #[serde(default)]
    pub name: String,
    /// Declared type tag
    #[serde(rename = "type")]
    pub ty: ParamType,
    /// EVM/TVM events: is this parameter stored in a topic slot?
    #[serde(default)]
    pub indexed: bool,
}

/// One entry of a contract ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiEntry {
    #[serde(rename = "type")]
    pub kind: AbiKind,
    /// Entry name — empty for constructors/fallbacks
    #[serde(default)]
    pub name: String,
    /// Ordered inputs; order is positional and determines decode order
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
}

/// Immutable, declaration-ordered view over one contract's ABI entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiCatalog {
    entries: Vec<AbiEntry>,
}

impl AbiCatalog {
    pub fn new(entries: Vec<AbiEntry>) -> Self {
        Self { entries }
    }

    /// Build a catalog from an ABI JSON document.
    ///
    /// Accepts either a bare entry array or the full Tron `getContract`
    /// envelope (`{"abi": {"entrys": [...]}}` — "entrys" is how the node
    /// spells it).
    ///
    /// # Errors
    /// `AbiError::Missing` if the envelope carries no ABI entries,
    /// `AbiError::Parse` / `AbiError::UnsupportedType` on malformed documents.
    pub fn from_json(json: &str) -> Result<Self, AbiError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let entries = match &value {
            serde_json::Value::Array(_) => value,
            serde_json::Value::Object(obj) => match obj.get("abi").and_then(|a| a.get("entrys")) {
                Some(entries @ serde_json::Value::Array(_)) => entries.clone(),
                _ => return Err(AbiError::Missing),
            },
            _ => return Err(AbiError::Missing),
        };
        // Two-stage parse: raw type tags first, so an exotic tag surfaces as
        // UnsupportedType instead of a generic parse error.
        let raw: Vec<RawEntry> = serde_json::from_value(entries)?;
        let entries = raw
            .into_iter()
            .map(AbiEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(entries))
    }

    /// All entries, in declaration order.
    pub fn entries(&self) -> &[AbiEntry] {
        &self.entries
    }

    /// Entries of one kind, lazily, preserving declaration order.
    pub fn entries_of_kind(&self, kind: AbiKind) -> impl Iterator<Item = &AbiEntry> + '_ {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loosely-typed mirror of `AbiEntry` used during `from_json` so bad type
/// tags can be reported precisely.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "type")]
    kind: AbiKind,
    #[serde(default)]
    name: String,
    #[serde(default)]
    inputs: Vec<RawParam>,
}

#[derive(Debug, Deserialize)]
struct RawParam {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    indexed: bool,
}

impl TryFrom<RawEntry> for AbiEntry {
    type Error = AbiError;

    fn try_from(raw: RawEntry) -> Result<Self, AbiError> {
        let inputs = raw
            .inputs
            .into_iter()
            .map(|p| {
                Ok(AbiParam {
                    name: p.name,
                    ty: p.ty.parse()?,
                    indexed: p.indexed,
                })
            })
            .collect::<Result<Vec<_>, AbiError>>()?;
        Ok(AbiEntry {
            kind: raw.kind,
            name: raw.name,
            inputs,
        })
    }
}
