//! Decode errors for textual event records.

use thiserror::Error;

/// Why a record line could not be decoded.
///
/// Decoding is for the offline consumer only; nothing on the emission path
/// ever returns one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The leading marker tag names no known event kind
    #[error("unknown marker tag: {0}")]
    UnknownTag(String),

    /// A required field is absent
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The address field is not a hex pointer
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// A size field is not a decimal byte count
    #[error("invalid size: {0}")]
    InvalidSize(String),

    /// The trailing line number is not decimal
    #[error("invalid line number: {0}")]
    InvalidLine(String),
}
