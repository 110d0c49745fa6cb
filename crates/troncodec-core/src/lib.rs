//! # troncodec-core
//!
//! Data model, ABI catalog, and shared error types for TronCodec.
//! The TVM decoders in `troncodec-tvm` are built on top of the types
//! defined here.

pub mod abi;
pub mod call;
pub mod error;
pub mod event;
pub mod types;

pub use abi::{AbiCatalog, AbiEntry, AbiKind, AbiParam};
pub use call::DecodedCall;
pub use error::{AbiError, DecodeError};
pub use event::{DecodedEvent, DecodedParam, RawLog};
pub use types::{ParamType, ParamValue};
