//! Entry materialization - resolve entry content into bytes plus CRC-32
//!
//! The emitters never read content themselves. They hand an
//! [`EntryContent`] to [`materialize`], which fully resolves it into a
//! complete byte sequence and the CRC-32 checksum ZIP requires. A reader
//! that errors mid-drain fails the whole entry; there is no partial or
//! resumable path.

use crate::entry::EntryContent;
use crc32fast::Hasher as Crc32;
use std::io::Read;

/// Fully resolved entry content
pub struct ResolvedEntry {
    /// Complete uncompressed content
    pub bytes: Vec<u8>,
    /// CRC-32 (ISO-HDLC) checksum over `bytes`
    pub crc32: u32,
}

/// Resolve content into a complete byte sequence and compute its CRC-32
///
/// In-memory content resolves immediately. A reader is drained to
/// completion first; its error aborts materialization.
pub fn materialize(content: EntryContent) -> std::io::Result<ResolvedEntry> {
    let bytes = match content {
        EntryContent::Bytes(bytes) => bytes,
        EntryContent::Reader(mut reader) => {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes)?;
            bytes
        }
    };
    Ok(ResolvedEntry {
        crc32: crc32(&bytes),
        bytes,
    })
}

/// CRC-32 over a complete byte sequence
pub(crate) fn crc32(bytes: &[u8]) -> u32 {
    let mut hasher = Crc32::new();
    hasher.update(bytes);
    hasher.finalize()
}
