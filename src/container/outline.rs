//! Indentation-based chapter outline extraction.

/// One outline entry: a chapter title and its indentation depth.
///
/// Positional index (the `Vec` position) is the sole join key against RTF
/// documents; there is no other cross-reference in the format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    pub title: String,
    pub depth: usize,
}

/// Parsed outline block.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    /// Chapter nodes in document order.
    pub nodes: Vec<OutlineNode>,
    /// Document title from the first metadata-marker line, if any.
    pub title: Option<String>,
}

/// Parse the plain-text outline block into ordered nodes.
///
/// Indentation follows the authoring tool's "4 spaces = 1 tab"
/// equivalence: each leading tab is one level, every full group of four
/// leading spaces is one level, and a 1-3 space remainder truncates to
/// nothing. Scanning stops at the first non-whitespace character.
///
/// Lines whose trimmed title starts with `metadata_marker` are reserved
/// for document metadata: the first one becomes the document title, later
/// ones are skipped. They never produce nodes.
pub fn parse_outline(block: &str, metadata_marker: char) -> Outline {
    let mut outline = Outline::default();

    for line in block.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let mut tabs = 0usize;
        let mut spaces = 0usize;
        let mut start = 0usize;
        for (i, c) in line.char_indices() {
            match c {
                '\t' => tabs += 1,
                ' ' => spaces += 1,
                _ => {
                    start = i;
                    break;
                }
            }
        }
        let depth = tabs + spaces / 4;
        let title = &line[start..];

        if let Some(rest) = title.strip_prefix(metadata_marker) {
            if outline.title.is_none() {
                outline.title = Some(rest.trim().to_string());
            } else {
                log::debug!("ignoring extra metadata line: {}", title);
            }
            continue;
        }

        outline.nodes.push(OutlineNode {
            title: title.to_string(),
            depth,
        });
    }

    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(block: &str) -> Outline {
        parse_outline(block, '#')
    }

    #[test]
    fn test_flat_outline() {
        let outline = parse("one\ntwo\nthree\n");
        let titles: Vec<_> = outline.nodes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["one", "two", "three"]);
        assert!(outline.nodes.iter().all(|n| n.depth == 0));
    }

    #[test]
    fn test_tab_depth() {
        let outline = parse("root\n\tchild\n\t\tgrandchild\n");
        assert_eq!(outline.nodes[0].depth, 0);
        assert_eq!(outline.nodes[1].depth, 1);
        assert_eq!(outline.nodes[2].depth, 2);
    }

    #[test]
    fn test_space_depth() {
        // 8 spaces = 2 levels; 3 spaces truncate to 0.
        let outline = parse("        deep\n   shallow\n");
        assert_eq!(outline.nodes[0], OutlineNode { title: "deep".into(), depth: 2 });
        assert_eq!(outline.nodes[1], OutlineNode { title: "shallow".into(), depth: 0 });
    }

    #[test]
    fn test_mixed_tabs_and_spaces() {
        // 1 tab + 5 spaces = 1 + 5/4 = 2 levels.
        let outline = parse("\t     mixed\n");
        assert_eq!(outline.nodes[0].depth, 2);
        assert_eq!(outline.nodes[0].title, "mixed");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let outline = parse("a\n\n   \nb\n");
        assert_eq!(outline.nodes.len(), 2);
    }

    #[test]
    fn test_metadata_title() {
        let outline = parse("# My Story\nchapter one\n# ignored\nchapter two\n");
        assert_eq!(outline.title.as_deref(), Some("My Story"));
        let titles: Vec<_> = outline.nodes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["chapter one", "chapter two"]);
    }

    #[test]
    fn test_custom_marker() {
        let outline = parse_outline("*title line\nbody\n", '*');
        assert_eq!(outline.title.as_deref(), Some("title line"));
        assert_eq!(outline.nodes.len(), 1);
    }

    #[test]
    fn test_child_depth_jump_allowed() {
        // A child may sit any number of levels below its parent; the
        // extractor records depths verbatim, no gap checking.
        let outline = parse("top\n\t\t\tdeep jump\n");
        assert_eq!(outline.nodes[1].depth, 3);
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        let outline = parse("title   \t\n");
        assert_eq!(outline.nodes[0].title, "title");
    }
}
