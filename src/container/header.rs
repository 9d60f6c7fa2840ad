//! SEF fixed header.

use crate::error::{Error, Result};

/// Expected magic number in the first two bytes (little-endian).
pub const MAGIC: u16 = 0x0303;

/// Length of the fixed header preceding the zlib stream.
pub const HEADER_LEN: usize = 16;

/// The 16-byte SEF file header.
///
/// Only the magic number is validated. The remaining fields are
/// format-version dependent and treated as opaque; `field3` is used
/// downstream as a decompressed-size hint for preallocation but is never
/// trusted for buffer sizing beyond the configured ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub magic: u16,
    pub field1: u16,
    pub field2: u32,
    pub field3: u32,
    pub field4: u32,
}

impl FileHeader {
    /// Parse the header from the start of the file.
    ///
    /// Fails with [`Error::BadMagic`] before any decompression is
    /// attempted if the magic number does not match.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(Error::TooShort(data.len()));
        }

        let magic = u16::from_le_bytes([data[0], data[1]]);
        if magic != MAGIC {
            return Err(Error::BadMagic { found: magic });
        }

        Ok(Self {
            magic,
            field1: u16::from_le_bytes([data[2], data[3]]),
            field2: u32::from_le_bytes([data[4], data[5], data[6], data[7]]),
            field3: u32::from_le_bytes([data[8], data[9], data[10], data[11]]),
            field4: u32::from_le_bytes([data[12], data[13], data[14], data[15]]),
        })
    }

    /// Candidate decompressed-size hint. Optimization only; callers must
    /// cap it at their own ceiling before allocating.
    pub fn size_hint(&self) -> usize {
        self.field3 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_header() -> Vec<u8> {
        let mut data = vec![0u8; HEADER_LEN];
        data[0..2].copy_from_slice(&MAGIC.to_le_bytes());
        data[2..4].copy_from_slice(&3u16.to_le_bytes()); // field1
        data[4..8].copy_from_slice(&0x1000u32.to_le_bytes()); // field2
        data[8..12].copy_from_slice(&0x2000u32.to_le_bytes()); // field3
        data
    }

    #[test]
    fn test_parse_valid() {
        let header = FileHeader::parse(&valid_header()).unwrap();
        assert_eq!(header.magic, MAGIC);
        assert_eq!(header.field1, 3);
        assert_eq!(header.field2, 0x1000);
        assert_eq!(header.field3, 0x2000);
        assert_eq!(header.field4, 0);
        assert_eq!(header.size_hint(), 0x2000);
    }

    #[test]
    fn test_bad_magic() {
        let mut data = valid_header();
        data[0] = 0x42;
        match FileHeader::parse(&data) {
            Err(Error::BadMagic { found }) => assert_eq!(found, 0x0342),
            other => panic!("expected BadMagic, got {:?}", other),
        }
    }

    #[test]
    fn test_too_short() {
        let data = vec![0u8; 10];
        assert!(matches!(FileHeader::parse(&data), Err(Error::TooShort(10))));
    }

    #[test]
    fn test_fields_little_endian() {
        let mut data = valid_header();
        data[12..16].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        let header = FileHeader::parse(&data).unwrap();
        assert_eq!(header.field4, 0x04030201);
    }
}
