//! Fixed ZIP record layout shared by the sync and async emitters
//!
//! All multi-byte fields are little-endian. Only the store method is
//! emitted, so compressed size always equals uncompressed size, and the
//! modification time and date fields stay zero.

/// ZIP local file header signature
pub(crate) const LOCAL_FILE_SIGNATURE: [u8; 4] = [0x50, 0x4b, 0x03, 0x04];

/// Version needed (1.0), bit flags, compression method (store), mod time
/// and date. Shared between local file headers and directory records.
pub(crate) const HEADER_PROLOGUE: [u8; 10] = [0x0a, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// Central directory record signature + version made by (2.0)
pub(crate) const DIRECTORY_SIGNATURE: [u8; 6] = [0x50, 0x4b, 0x01, 0x02, 0x14, 0x00];

/// End of central directory signature + disk fields (always a single disk)
pub(crate) const END_OF_DIRECTORY_SIGNATURE: [u8; 8] = [0x50, 0x4b, 0x05, 0x06, 0, 0, 0, 0];

/// The 16-byte crc/size/size/name-length block used by both header kinds.
/// The trailing extra field length stays zero.
fn field_block(crc32: u32, size: u32, name_len: u16) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[0..4].copy_from_slice(&crc32.to_le_bytes());
    block[4..8].copy_from_slice(&size.to_le_bytes()); // compressed size
    block[8..12].copy_from_slice(&size.to_le_bytes()); // uncompressed size
    block[12..14].copy_from_slice(&name_len.to_le_bytes());
    block
}

/// Local file header + name (30 fixed bytes + name). Content follows it
/// directly in the stream.
pub(crate) fn local_file_header(name: &[u8], crc32: u32, size: u32) -> Vec<u8> {
    let mut header = Vec::with_capacity(30 + name.len());
    header.extend_from_slice(&LOCAL_FILE_SIGNATURE);
    header.extend_from_slice(&HEADER_PROLOGUE);
    header.extend_from_slice(&field_block(crc32, size, name.len() as u16));
    header.extend_from_slice(name);
    header
}

/// Central directory record for one entry (46 fixed bytes + name)
pub(crate) fn directory_record(
    name: &[u8],
    crc32: u32,
    size: u32,
    local_header_offset: u32,
) -> Vec<u8> {
    let mut record = Vec::with_capacity(46 + name.len());
    record.extend_from_slice(&DIRECTORY_SIGNATURE);
    record.extend_from_slice(&HEADER_PROLOGUE);
    record.extend_from_slice(&field_block(crc32, size, name.len() as u16));
    // comment length, disk start, internal and external attributes all zero,
    // then the relative offset of the local header at byte 10
    let mut meta = [0u8; 14];
    meta[10..14].copy_from_slice(&local_header_offset.to_le_bytes());
    record.extend_from_slice(&meta);
    record.extend_from_slice(name);
    record
}

/// End of central directory record (22 bytes)
pub(crate) fn end_of_directory_record(
    entry_count: u16,
    directory_len: u32,
    directory_offset: u32,
) -> Vec<u8> {
    let mut record = Vec::with_capacity(22);
    record.extend_from_slice(&END_OF_DIRECTORY_SIGNATURE);
    record.extend_from_slice(&entry_count.to_le_bytes()); // entries on this disk
    record.extend_from_slice(&entry_count.to_le_bytes()); // total entries
    record.extend_from_slice(&directory_len.to_le_bytes());
    record.extend_from_slice(&directory_offset.to_le_bytes());
    record.extend_from_slice(&0u16.to_le_bytes()); // comment length
    record
}
