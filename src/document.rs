//! Output value types.
//!
//! Everything here is append-only during the decode and read-only
//! afterwards. Presentation layers must treat records as immutable and
//! must not assume chapter titles are unique; `rtf_index` and vector
//! position are the stable disambiguation keys.

/// One decoded chapter: an outline node paired with its reduced RTF text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Chapter {
    /// Title from the outline block, leading indentation stripped.
    pub title: String,
    /// Indentation level (tab = 1 level, 4 spaces = 1 level).
    pub depth: usize,
    /// Best-effort plain text reduced from the paired RTF document.
    pub content: String,
    /// Discovery index of the originating RTF document, `None` for
    /// placeholder chapters emitted under
    /// [`EmptySectionPolicy::PlaceholderChapters`](crate::EmptySectionPolicy).
    pub rtf_index: Option<usize>,
}

/// Non-fatal quality degradation observed during a decode.
///
/// The decode still completed; these flags let callers warn the user that
/// output fidelity is reduced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Fidelity {
    /// Name of the encoding that produced the text.
    pub encoding: String,
    /// True if every candidate encoding had errors and the first one was
    /// re-run with replacement characters.
    pub lossy_decode: bool,
    /// The decoded payload contained no `{\rtf` marker at all.
    pub missing_rtf_block: bool,
    /// Trailing RTF documents discarded because their braces never
    /// balanced before end of stream.
    pub unterminated_documents: usize,
    /// Outline nodes dropped because no RTF document was left to pair.
    pub dropped_nodes: usize,
    /// RTF documents dropped because no outline node was left to pair.
    pub dropped_documents: usize,
}

impl Fidelity {
    /// True if anything degraded the output quality.
    pub fn is_degraded(&self) -> bool {
        self.lossy_decode
            || self.missing_rtf_block
            || self.unterminated_documents > 0
            || self.dropped_nodes > 0
            || self.dropped_documents > 0
    }
}

/// A fully decoded SEF file.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct SefDocument {
    /// Document-level title captured from the outline's metadata-marker
    /// line, if present.
    pub title: Option<String>,
    /// Chapters in document order.
    pub chapters: Vec<Chapter>,
    /// Quality indicators for this decode.
    pub fidelity: Fidelity,
}
