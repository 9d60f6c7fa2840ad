//! # sef
//!
//! A fast, lightweight decoder for Story Editor SEF container files.
//!
//! A SEF file is a 16-byte header followed by a zlib stream whose inflated
//! payload holds two sections: an indentation-delimited plain-text chapter
//! outline, then one concatenated RTF document per chapter. The Nth
//! outline node corresponds to the Nth RTF document; position is the only
//! link between them.
//!
//! ## Quick Start
//!
//! ```no_run
//! let document = sef::read_sef("story.sef").unwrap();
//! for chapter in &document.chapters {
//!     println!("{}{}", "  ".repeat(chapter.depth), chapter.title);
//! }
//! ```
//!
//! ## Configuration
//!
//! ```no_run
//! use sef::{DecodeOptions, EmptySectionPolicy};
//!
//! let bytes = std::fs::read("story.sef").unwrap();
//! let options = DecodeOptions::default()
//!     .with_max_decompressed_size(64 * 1024 * 1024)
//!     .with_empty_section_policy(EmptySectionPolicy::PlaceholderChapters);
//! let document = sef::decode_sef_with(&bytes, &options).unwrap();
//! ```
//!
//! Only a malformed header, a missing zlib stream, a failed or oversized
//! decompression, or a total decode failure abort a file. Everything else
//! (an unterminated trailing RTF document, encoding fallbacks, mismatched
//! outline/document counts) degrades gracefully and is reported in
//! [`Fidelity`] so callers can warn the user.

pub mod container;
pub mod document;
pub mod error;
pub mod options;
pub mod rtf;

pub use container::{decode_sef, decode_sef_with, read_sef};
pub use document::{Chapter, Fidelity, SefDocument};
pub use error::{Error, Result};
pub use options::{DecodeOptions, EmptySectionPolicy};
