use thiserror::Error;

/// Error type for cipher operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The key has zero bytes. The cyclic schedule `key[i % keylength]`
    /// is undefined for a zero keylength, so construction rejects this
    /// before any input byte is processed.
    #[error("empty key: at least one key byte is required")]
    EmptyKey,

    /// A token in an "N/M/O" shift list did not parse as an integer in 0–255.
    #[error("bad shift {token:?}: {reason}")]
    BadShift { token: String, reason: String },
}
