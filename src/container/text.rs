//! Payload text decoding and section splitting.

use std::borrow::Cow;

use encoding_rs::Encoding;
use memchr::memmem;

use crate::error::{Error, Result};

/// Literal start marker of an RTF document.
pub const RTF_MARKER: &str = "{\\rtf";

/// Decoded payload text plus how it was obtained.
#[derive(Debug)]
pub struct DecodedText {
    pub text: String,
    /// Name of the encoding that produced the text.
    pub encoding: &'static str,
    /// True if no candidate decoded cleanly and the first one was re-run
    /// with replacement characters.
    pub lossy: bool,
}

/// Decode the inflated payload using an ordered encoding chain.
///
/// Each candidate is attempted strictly (no replacement); the first clean
/// decode wins. If every candidate has errors, the first candidate is
/// re-run with replacement characters instead of refusing the file.
///
/// NUL bytes are stripped first; the authoring tool pads the payload with
/// them and they are never meaningful text.
pub fn decode_payload(bytes: &[u8], encodings: &[&'static Encoding]) -> Result<DecodedText> {
    let cleaned: Cow<[u8]> = if memchr::memchr(0, bytes).is_some() {
        Cow::Owned(bytes.iter().copied().filter(|&b| b != 0).collect())
    } else {
        Cow::Borrowed(bytes)
    };

    for encoding in encodings {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(&cleaned)
        {
            return Ok(DecodedText {
                text: text.into_owned(),
                encoding: encoding.name(),
                lossy: false,
            });
        }
    }

    let first = encodings.first().ok_or(Error::UnrecoverableDecode)?;
    log::warn!(
        "no candidate encoding decoded cleanly, falling back to lossy {}",
        first.name()
    );
    let (text, _, _) = first.decode(&cleaned);
    Ok(DecodedText {
        text: text.into_owned(),
        encoding: first.name(),
        lossy: true,
    })
}

/// Split the decoded text at the first `{\rtf` occurrence.
///
/// Everything before the marker is the outline block, everything from it
/// onward is the RTF block. A missing marker is not an error: the whole
/// text is outline and the RTF block is empty.
pub fn split_sections(text: &str) -> (&str, &str) {
    match memmem::find(text.as_bytes(), RTF_MARKER.as_bytes()) {
        Some(pos) => text.split_at(pos),
        None => (text, ""),
    }
}
