//! Error types for huffzip.
//!
//! Every failure surfaces to the caller as one of three kinds: an I/O
//! failure, a malformed container, or a corrupt tree/payload detected during
//! decoding. Zero-byte input is a valid state and has no error variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HuffError {
    /// The source or destination file could not be opened, read or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The container metadata is not what the format promises: bad magic,
    /// truncated header, invalid tree tag stream.
    #[error("format error: {0}")]
    Format(String),

    /// The tree and payload disagree: a bit walk stepped to a missing child,
    /// or the payload ran out before the expected byte count was decoded.
    #[error("corrupt data: {0}")]
    Corrupt(String),
}

pub type Result<T> = std::result::Result<T, HuffError>;
