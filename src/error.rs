//! Error types for SEF decoding.

use thiserror::Error;

/// Fatal decode failures.
///
/// Everything here aborts the whole file with no partial output. All other
/// irregularities (unterminated trailing RTF document, node/document count
/// mismatch, encoding fallback) degrade gracefully and are recorded in
/// [`Fidelity`](crate::Fidelity) instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file too short: {0} bytes, need at least 16")]
    TooShort(usize),

    #[error("invalid magic number: {found:#06x}")]
    BadMagic { found: u16 },

    #[error("no zlib stream after header")]
    NoCompressedStream,

    #[error("zlib decompression failed: {0}")]
    Decompression(String),

    #[error("decompressed payload exceeds {limit} byte limit")]
    DecompressedTooLarge { limit: usize },

    #[error("payload could not be decoded with any configured encoding")]
    UnrecoverableDecode,
}

pub type Result<T> = std::result::Result<T, Error>;
