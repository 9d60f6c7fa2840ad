//! Lossy RTF to plain-text reduction.
//!
//! A fixed sequence of rewrite passes, each a pure `&str -> String`
//! transform applied to the whole text before the next. Unrecognized
//! control words pass through rule 3 like any other and become spaces;
//! nothing here raises on malformed input. All passes are single linear
//! scans, so hostile input costs linear time.

use encoding_rs::Encoding;
use memchr::memmem;

use super::balanced_end;

/// Reduce one RTF document to approximate plain text, decoding hex
/// escapes as Shift-JIS.
pub fn reduce(rtf: &str) -> String {
    reduce_with(rtf, encoding_rs::SHIFT_JIS)
}

/// Reduce one RTF document, decoding `\'xx` escape runs with `encoding`.
pub fn reduce_with(rtf: &str, encoding: &'static Encoding) -> String {
    let text = decode_hex_escapes(rtf, encoding);
    let text = strip_table_groups(&text);
    let text = strip_control_words(&text);
    let text = strip_braces(&text);
    let text = collapse_semicolons(&text);
    let text = strip_layout_numbers(&text);
    normalize_whitespace(&text)
}

fn hex_val(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

fn is_hex_escape(bytes: &[u8], i: usize) -> bool {
    i + 3 < bytes.len()
        && bytes[i] == b'\\'
        && bytes[i + 1] == b'\''
        && bytes[i + 2].is_ascii_hexdigit()
        && bytes[i + 3].is_ascii_hexdigit()
}

/// Pass 1: decode contiguous `\'xx` escape runs as raw bytes in the given
/// encoding. Hex escapes must be decoded before any structural brace
/// scanning so encoded bytes can never be miscounted as RTF braces. A run
/// that fails to decode is replaced with nothing.
fn decode_hex_escapes(input: &str, encoding: &'static Encoding) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < bytes.len() {
        if is_hex_escape(bytes, i) {
            let mut raw = Vec::new();
            while is_hex_escape(bytes, i) {
                raw.push(hex_val(bytes[i + 2]) << 4 | hex_val(bytes[i + 3]));
                i += 4;
            }
            if let Some(span) = encoding.decode_without_bom_handling_and_without_replacement(&raw)
            {
                out.push_str(&span);
            }
        } else if let Some(c) = input[i..].chars().next() {
            out.push(c);
            i += c.len_utf8();
        } else {
            break;
        }
    }

    out
}

const TABLE_PREFIXES: [&[u8]; 2] = [b"{\\fonttbl", b"{\\colortbl"];

/// Pass 2: delete font and color table groups wholesale. The group is the
/// balanced-brace span starting at the table's opening brace; an
/// unbalanced group is left untouched for the later passes to grind down.
fn strip_table_groups(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    loop {
        let next = TABLE_PREFIXES
            .iter()
            .filter_map(|prefix| memmem::find(&bytes[pos..], prefix).map(|rel| pos + rel))
            .min();
        let Some(start) = next else {
            out.push_str(&input[pos..]);
            break;
        };
        out.push_str(&input[pos..start]);
        match balanced_end(input, start) {
            Some(end) => pos = end,
            None => {
                out.push_str(&input[start..]);
                break;
            }
        }
    }

    out
}

/// Scan `\letters[digits]` with the backslash at `start`. Returns the end
/// index and whether a numeric parameter was present.
fn scan_control_word(bytes: &[u8], start: usize) -> (usize, bool) {
    let mut i = start + 1;
    while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    (i, i > digits_start)
}

/// Pass 3: strip control words. A run of control words with numeric
/// parameters collapses to one space, a bare control word becomes one
/// space, and an escaped non-letter character (escaped brace, backslash,
/// stray escape) is deleted outright.
fn strip_control_words(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\' {
            if i + 1 < bytes.len() && bytes[i + 1].is_ascii_alphabetic() {
                let (end, numeric) = scan_control_word(bytes, i);
                let mut run_end = end;
                if numeric {
                    loop {
                        let mut p = run_end;
                        while p < bytes.len() && bytes[p].is_ascii_whitespace() {
                            p += 1;
                        }
                        if p + 1 < bytes.len()
                            && bytes[p] == b'\\'
                            && bytes[p + 1].is_ascii_alphabetic()
                        {
                            let (next_end, next_numeric) = scan_control_word(bytes, p);
                            if next_numeric {
                                run_end = next_end;
                                continue;
                            }
                        }
                        break;
                    }
                }
                out.push(' ');
                i = run_end;
            } else if i + 1 < bytes.len() {
                let skip = input[i + 1..].chars().next().map_or(0, |c| c.len_utf8());
                i += 1 + skip;
            } else {
                i += 1;
            }
        } else if let Some(c) = input[i..].chars().next() {
            out.push(c);
            i += c.len_utf8();
        } else {
            break;
        }
    }

    out
}

/// Pass 4: drop every remaining brace.
fn strip_braces(input: &str) -> String {
    input.chars().filter(|&c| c != '{' && c != '}').collect()
}

/// Pass 5: semicolon runs become a single space. Semicolons are RTF field
/// separators with no textual meaning once the tables are gone.
fn collapse_semicolons(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for c in input.chars() {
        if c == ';' {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Calendar-unit markers that make an adjacent number meaningful text.
const CALENDAR_MARKERS: [char; 3] = ['年', '月', '日'];

/// Pass 6: remove standalone numeric tokens (layout leftovers) unless
/// immediately adjacent to a calendar-unit marker, which makes them date
/// text.
fn strip_layout_numbers(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev: Option<char> = None;
    let mut iter = input.char_indices().peekable();

    while let Some((start, c)) = iter.next() {
        if c.is_ascii_digit() {
            let mut end = start + 1;
            while let Some(&(j, next)) = iter.peek() {
                if next.is_ascii_digit() {
                    end = j + 1;
                    iter.next();
                } else {
                    break;
                }
            }
            let next = iter.peek().map(|&(_, n)| n);
            let keep = prev.is_some_and(|p| CALENDAR_MARKERS.contains(&p))
                || next.is_some_and(|n| CALENDAR_MARKERS.contains(&n));
            if keep {
                out.push_str(&input[start..end]);
            } else {
                out.push(' ');
            }
            prev = Some(c);
        } else {
            out.push(c);
            prev = Some(c);
        }
    }

    out
}

/// Pass 7: fold CR/LF pairs and every other whitespace run into single
/// spaces and trim the ends.
fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
