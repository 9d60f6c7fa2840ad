//! Decode configuration.

use encoding_rs::Encoding;

/// Default decompression ceiling: 256 MiB.
///
/// Generous for any real SEF file (chapter text rarely exceeds a few
/// megabytes inflated) while still bounding decompression-bomb inputs.
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 256 * 1024 * 1024;

/// What to emit when the outline and the RTF block disagree about how many
/// chapters exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySectionPolicy {
    /// Pair nodes and documents positionally and drop everything beyond the
    /// shorter sequence. An empty outline or an empty RTF block therefore
    /// yields zero chapters.
    #[default]
    ZeroChapters,
    /// Pad the shorter sequence: outline nodes without a matching document
    /// get empty content, documents without a matching node get an empty
    /// title.
    PlaceholderChapters,
}

/// Options controlling a single decode.
///
/// ```
/// use sef::DecodeOptions;
///
/// let options = DecodeOptions::default()
///     .with_max_decompressed_size(16 * 1024 * 1024)
///     .with_metadata_marker('*');
/// ```
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Maximum allowed inflated payload size in bytes. Exceeding it aborts
    /// the decode with [`Error::DecompressedTooLarge`](crate::Error).
    pub max_decompressed_size: usize,
    /// Candidate encodings, tried in order. The first strict (lossless)
    /// success wins; if all fail, the first candidate is re-run with
    /// replacement so a mostly-readable result is still produced.
    ///
    /// `encoding_rs`'s Shift-JIS implementation is the Windows code page
    /// 932 superset, so the default two-entry chain already covers files
    /// written as Shift-JIS, CP932, or UTF-8.
    pub encodings: Vec<&'static Encoding>,
    /// Outline lines whose trimmed title starts with this character are
    /// treated as document metadata (the document title) rather than
    /// chapter nodes.
    pub metadata_marker: char,
    /// Policy for outline/RTF count mismatches.
    pub empty_section_policy: EmptySectionPolicy,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
            encodings: vec![encoding_rs::SHIFT_JIS, encoding_rs::UTF_8],
            metadata_marker: '#',
            empty_section_policy: EmptySectionPolicy::default(),
        }
    }
}

impl DecodeOptions {
    pub fn with_max_decompressed_size(mut self, bytes: usize) -> Self {
        self.max_decompressed_size = bytes;
        self
    }

    pub fn with_encodings(mut self, encodings: Vec<&'static Encoding>) -> Self {
        self.encodings = encodings;
        self
    }

    pub fn with_metadata_marker(mut self, marker: char) -> Self {
        self.metadata_marker = marker;
        self
    }

    pub fn with_empty_section_policy(mut self, policy: EmptySectionPolicy) -> Self {
        self.empty_section_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_encoding_chain() {
        let options = DecodeOptions::default();
        assert_eq!(options.encodings[0], encoding_rs::SHIFT_JIS);
        assert_eq!(*options.encodings.last().unwrap(), encoding_rs::UTF_8);
    }

    #[test]
    fn test_builder() {
        let options = DecodeOptions::default()
            .with_max_decompressed_size(1024)
            .with_metadata_marker('*')
            .with_empty_section_policy(EmptySectionPolicy::PlaceholderChapters);
        assert_eq!(options.max_decompressed_size, 1024);
        assert_eq!(options.metadata_marker, '*');
        assert_eq!(
            options.empty_section_policy,
            EmptySectionPolicy::PlaceholderChapters
        );
    }
}
