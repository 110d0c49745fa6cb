//! Canonical signature strings and their Keccak-256 selectors.
//!
//! The signature of an entry is `name(type1,type2,...)` — comma-joined
//! canonical type tags, no spaces, declaration order. Its keccak256 digest
//! identifies the entry on the wire:
//!   keccak256("Transfer(address,address,uint256)")
//!   → ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef
//! Events compare the full digest against topics[0]; function calls use
//! only the first 4 bytes as the calldata selector. Tron hex carries no
//! `0x` prefix.

use tiny_keccak::{Hasher, Keccak};
use troncodec_core::AbiEntry;

use crate::words::SELECTOR_HEX;

/// Build the canonical signature string for an ABI entry.
/// Deterministic and order-preserving: reordering inputs changes the result.
pub fn canonical_signature(entry: &AbiEntry) -> String {
    let types: Vec<String> = entry.inputs.iter().map(|i| i.ty.to_string()).collect();
    format!("{}({})", entry.name, types.join(","))
}

/// Keccak-256 of the UTF-8 signature bytes, as 64 lowercase hex chars.
/// This is what an emitted log carries in topics[0].
pub fn signature_hash(signature: &str) -> String {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(signature.as_bytes());
    hasher.finalize(&mut output);
    hex::encode(output)
}

/// First 4 bytes (8 hex chars) of the signature hash — the calldata selector.
pub fn function_selector(signature: &str) -> String {
    let mut hash = signature_hash(signature);
    hash.truncate(SELECTOR_HEX);
    hash
}
