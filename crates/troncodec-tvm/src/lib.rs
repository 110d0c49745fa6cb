//! # troncodec-tvm
//!
//! TVM (Tron Virtual Machine) ABI decoders for event logs and calldata.
//!
//! ## Implementation notes
//! - Topics[0] → full keccak256 of the canonical event signature
//! - Topics[1..] → indexed parameters, one 64-hex-char word each
//! - `data` → non-indexed parameters, concatenated words
//! - Calldata → 8-hex-char selector, then a simplified inline array layout
//!   (see `call_decoder` for the wire format)
//!
//! Decoding is pure and synchronous; fetching ABIs and raw data over the
//! network is the surrounding application's concern.

pub mod call_decoder;
pub mod log_decoder;
pub mod signature;
pub mod words;

pub use call_decoder::CallDecoder;
pub use log_decoder::LogDecoder;
pub use signature::{canonical_signature, function_selector, signature_hash};
