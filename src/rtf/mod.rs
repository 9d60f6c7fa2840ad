//! RTF document segmentation and plain-text reduction.
//!
//! The format concatenates one brace-balanced RTF document per chapter.
//! Segmentation only needs document *boundaries*, so it counts brace
//! balance instead of parsing RTF grammar and ignores control words it
//! never interprets. Reduction is a fixed sequence of lossy text passes
//! producing approximate readable text.

mod reduce;
mod segment;

pub use reduce::{reduce, reduce_with};
pub use segment::segment_documents;

use memchr::memchr2;

/// Find the end (exclusive byte index) of the balanced-brace group
/// starting at `start`, which must point at a `{`.
///
/// Braces are ASCII, so scanning UTF-8 bytes is equivalent to scanning
/// characters: multibyte sequences never contain `0x7B`/`0x7D`.
pub(crate) fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0i64;
    let mut pos = start;

    while let Some(rel) = memchr2(b'{', b'}', &bytes[pos..]) {
        let at = pos + rel;
        if bytes[at] == b'{' {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                return Some(at + 1);
            }
        }
        pos = at + 1;
    }
    None
}
