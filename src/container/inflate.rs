//! Bounded zlib payload inflation.

use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::error::{Error, Result};
use crate::container::header::HEADER_LEN;

/// Read chunk size while inflating.
const CHUNK: usize = 64 * 1024;

/// Check for a zlib stream header (RFC 1950).
///
/// The CMF byte is `0x78` (deflate, 32K window) in every stream the
/// authoring tool produces; the FLG byte is one of `01`, `5E`, `9C`, `DA`
/// depending on compression level.
fn is_zlib_signature(cmf: u8, flg: u8) -> bool {
    cmf == 0x78 && (u16::from(cmf) << 8 | u16::from(flg)) % 31 == 0
}

/// Inflate the zlib stream that follows the fixed header.
///
/// The stream is expected at byte 16, immediately after the header; the
/// signature is verified rather than assumed. Inflation aborts with
/// [`Error::DecompressedTooLarge`] as soon as output would exceed `limit`,
/// without retaining output beyond the limit.
///
/// `size_hint` comes from the header and is only used to preallocate; it
/// is capped at `limit` and never trusted.
pub fn inflate_payload(data: &[u8], size_hint: usize, limit: usize) -> Result<Vec<u8>> {
    let payload = &data[HEADER_LEN.min(data.len())..];
    if payload.len() < 2 || !is_zlib_signature(payload[0], payload[1]) {
        return Err(Error::NoCompressedStream);
    }

    let mut decoder = ZlibDecoder::new(payload);
    let mut out = Vec::with_capacity(size_hint.min(limit));
    let mut buf = [0u8; CHUNK];

    loop {
        let n = decoder
            .read(&mut buf)
            .map_err(|e| Error::Decompression(e.to_string()))?;
        if n == 0 {
            break;
        }
        if out.len() + n > limit {
            return Err(Error::DecompressedTooLarge { limit });
        }
        out.extend_from_slice(&buf[..n]);
    }

    Ok(out)
}
