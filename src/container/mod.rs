//! SEF container decoding pipeline.
//!
//! Stages run strictly in order over in-memory data: header, bounded
//! zlib inflation, encoding-chain text decode, outline/RTF section split,
//! outline extraction, RTF segmentation, per-document reduction, and
//! positional chapter assembly. Only the first three stages can fail;
//! everything after degrades gracefully and records what it dropped.

pub mod header;
pub mod inflate;
pub mod outline;
pub mod text;

use std::path::Path;

use crate::document::{Chapter, Fidelity, SefDocument};
use crate::error::Result;
use crate::options::{DecodeOptions, EmptySectionPolicy};
use crate::rtf;

use header::FileHeader;
use outline::Outline;

/// Read and decode a SEF file with default options.
pub fn read_sef(path: impl AsRef<Path>) -> Result<SefDocument> {
    let data = std::fs::read(path)?;
    decode_sef(&data)
}

/// Decode a SEF byte sequence with default options.
pub fn decode_sef(bytes: &[u8]) -> Result<SefDocument> {
    decode_sef_with(bytes, &DecodeOptions::default())
}

/// Decode a SEF byte sequence.
pub fn decode_sef_with(bytes: &[u8], options: &DecodeOptions) -> Result<SefDocument> {
    let file_header = FileHeader::parse(bytes)?;
    let payload = inflate::inflate_payload(
        bytes,
        file_header.size_hint(),
        options.max_decompressed_size,
    )?;
    let decoded = text::decode_payload(&payload, &options.encodings)?;

    let (outline_block, rtf_block) = text::split_sections(&decoded.text);
    let Outline { nodes, title } = outline::parse_outline(outline_block, options.metadata_marker);
    let (documents, unterminated) = rtf::segment_documents(rtf_block);

    let escape_encoding = options
        .encodings
        .first()
        .copied()
        .unwrap_or(encoding_rs::SHIFT_JIS);
    let contents: Vec<String> = documents
        .iter()
        .map(|doc| rtf::reduce_with(doc, escape_encoding))
        .collect();

    let mut fidelity = Fidelity {
        encoding: decoded.encoding.to_string(),
        lossy_decode: decoded.lossy,
        missing_rtf_block: rtf_block.is_empty(),
        unterminated_documents: unterminated,
        ..Fidelity::default()
    };
    let chapters = assemble(nodes, contents, options.empty_section_policy, &mut fidelity);

    Ok(SefDocument {
        title,
        chapters,
        fidelity,
    })
}

/// Pair outline nodes and reduced documents by position.
///
/// Under [`EmptySectionPolicy::ZeroChapters`] the pairing is a bounded
/// zip: everything beyond the shorter sequence is dropped and counted.
/// Under [`EmptySectionPolicy::PlaceholderChapters`] the shorter side is
/// padded instead, so no unit disappears silently.
fn assemble(
    nodes: Vec<outline::OutlineNode>,
    contents: Vec<String>,
    policy: EmptySectionPolicy,
    fidelity: &mut Fidelity,
) -> Vec<Chapter> {
    let paired = nodes.len().min(contents.len());

    match policy {
        EmptySectionPolicy::ZeroChapters => {
            fidelity.dropped_nodes = nodes.len() - paired;
            fidelity.dropped_documents = contents.len() - paired;
            if fidelity.dropped_nodes > 0 {
                log::warn!(
                    "{} outline node(s) have no RTF document and were dropped",
                    fidelity.dropped_nodes
                );
            }
            if fidelity.dropped_documents > 0 {
                log::warn!(
                    "{} RTF document(s) have no outline node and were dropped",
                    fidelity.dropped_documents
                );
            }
            nodes
                .into_iter()
                .zip(contents)
                .enumerate()
                .map(|(i, (node, content))| Chapter {
                    title: node.title,
                    depth: node.depth,
                    content,
                    rtf_index: Some(i),
                })
                .collect()
        }
        EmptySectionPolicy::PlaceholderChapters => {
            let total = nodes.len().max(contents.len());
            let mut node_iter = nodes.into_iter();
            let mut content_iter = contents.into_iter();
            (0..total)
                .map(|i| {
                    let node = node_iter.next();
                    let content = content_iter.next();
                    let has_content = content.is_some();
                    let (title, depth) = node.map_or((String::new(), 0), |n| (n.title, n.depth));
                    Chapter {
                        title,
                        depth,
                        content: content.unwrap_or_default(),
                        rtf_index: has_content.then_some(i),
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::outline::OutlineNode;

    fn outline_of(titles: &[&str]) -> Vec<OutlineNode> {
        titles
            .iter()
            .map(|t| OutlineNode {
                title: t.to_string(),
                depth: 0,
            })
            .collect()
    }

    fn contents_of(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_assemble_truncates_to_shorter() {
        let mut fidelity = Fidelity::default();
        let chapters = assemble(
            outline_of(&["a", "b", "c", "d", "e"]),
            contents_of(&["1", "2", "3"]),
            EmptySectionPolicy::ZeroChapters,
            &mut fidelity,
        );
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[2].title, "c");
        assert_eq!(chapters[2].content, "3");
        assert_eq!(chapters[2].rtf_index, Some(2));
        assert_eq!(fidelity.dropped_nodes, 2);
        assert_eq!(fidelity.dropped_documents, 0);
    }

    #[test]
    fn test_assemble_excess_documents_dropped() {
        let mut fidelity = Fidelity::default();
        let chapters = assemble(
            outline_of(&["only"]),
            contents_of(&["1", "2", "3"]),
            EmptySectionPolicy::ZeroChapters,
            &mut fidelity,
        );
        assert_eq!(chapters.len(), 1);
        assert_eq!(fidelity.dropped_documents, 2);
    }

    #[test]
    fn test_assemble_placeholders_pad_nodes() {
        let mut fidelity = Fidelity::default();
        let chapters = assemble(
            outline_of(&["a", "b", "c"]),
            contents_of(&["1"]),
            EmptySectionPolicy::PlaceholderChapters,
            &mut fidelity,
        );
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[1].content, "");
        assert_eq!(chapters[1].rtf_index, None);
        assert_eq!(chapters[0].rtf_index, Some(0));
    }

    #[test]
    fn test_assemble_placeholders_pad_documents() {
        let mut fidelity = Fidelity::default();
        let chapters = assemble(
            outline_of(&[]),
            contents_of(&["orphan"]),
            EmptySectionPolicy::PlaceholderChapters,
            &mut fidelity,
        );
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "");
        assert_eq!(chapters[0].content, "orphan");
    }

    #[test]
    fn test_assemble_duplicate_titles_untouched() {
        let mut fidelity = Fidelity::default();
        let chapters = assemble(
            outline_of(&["dup", "dup"]),
            contents_of(&["1", "2"]),
            EmptySectionPolicy::ZeroChapters,
            &mut fidelity,
        );
        assert_eq!(chapters[0].title, chapters[1].title);
        assert_ne!(chapters[0].rtf_index, chapters[1].rtf_index);
    }
}
