//! Balanced-brace RTF document segmentation.

use memchr::memmem;

use crate::container::text::RTF_MARKER;

use super::balanced_end;

/// Split the RTF block into individual documents.
///
/// Scans left to right: each `{\rtf` occurrence opens a candidate
/// document that ends where its brace depth returns to zero. After a
/// successful match the scan resumes just past the start *marker*, not
/// past the whole document, so nested or overlapping starts are not
/// skipped. A candidate whose braces never balance is discarded and ends
/// the scan; position tracking beyond a broken document is unreliable.
///
/// Returns the documents in discovery order plus the number of discarded
/// unterminated candidates (0 or 1).
pub fn segment_documents(block: &str) -> (Vec<&str>, usize) {
    let finder = memmem::Finder::new(RTF_MARKER.as_bytes());
    let mut documents = Vec::new();
    let mut pos = 0;

    while let Some(rel) = finder.find(&block.as_bytes()[pos..]) {
        let start = pos + rel;
        match balanced_end(block, start) {
            Some(end) => {
                documents.push(&block[start..end]);
                pos = start + RTF_MARKER.len();
            }
            None => {
                log::warn!(
                    "discarding unterminated RTF document at offset {}",
                    start
                );
                return (documents, 1);
            }
        }
    }

    (documents, 0)
}
