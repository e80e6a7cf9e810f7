//! Pull-based ZIP emitter producing store-method archives chunk by chunk
//!
//! The emitter never writes anywhere on its own. The consumer repeatedly
//! asks for the next chunk and each request performs exactly one unit of
//! work: emit the next queued entry, or flush the central directory and
//! end record once the queue is empty. Memory stays bounded by one
//! in-flight entry plus the accumulated directory.

use crate::entry::Entry;
use crate::error::{Result, StoreZipError};
use crate::header;
use crate::materialize::{materialize, ResolvedEntry};
use std::collections::VecDeque;
use std::io::Write;

/// Where the emitter is in the archive
enum State {
    /// Entries remain to be emitted
    Draining(VecDeque<Entry>),
    /// All entries emitted; central directory and end record still owed
    FlushingDirectory,
    /// End record emitted; no further bytes will be produced
    Ended,
}

/// Pull-based streaming ZIP emitter (store method, no compression)
///
/// Entries are supplied once at construction and drained front to back.
/// Each [`next_chunk`](Self::next_chunk) call emits one entry's complete
/// local file record, or the final central directory + end record chunk,
/// or signals end of stream.
pub struct ZipStoreStream {
    state: State,
    directory: Vec<u8>,
    entries_total: usize,
    local_bytes_written: u64,
}

impl ZipStoreStream {
    /// Create an emitter over an ordered sequence of entries
    pub fn new(entries: impl IntoIterator<Item = Entry>) -> Self {
        let queue: VecDeque<Entry> = entries.into_iter().collect();
        let entries_total = queue.len();
        Self {
            state: State::Draining(queue),
            directory: Vec::new(),
            entries_total,
            local_bytes_written: 0,
        }
    }

    /// Produce the next chunk of archive bytes
    ///
    /// Returns `Ok(Some(chunk))` while the archive is still being
    /// produced and `Ok(None)` once it is complete. After the first
    /// `Ok(None)` every further call returns `Ok(None)` again.
    ///
    /// A failing content source aborts the archive: the error is returned
    /// once and the emitter parks in its terminal state. Bytes already
    /// produced do not form a usable archive and must be discarded.
    pub fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        loop {
            match &mut self.state {
                State::Draining(queue) => {
                    let Some(entry) = queue.pop_front() else {
                        self.state = State::FlushingDirectory;
                        continue;
                    };
                    let Entry { name, content } = entry;
                    let resolved = match materialize(content) {
                        Ok(resolved) => resolved,
                        Err(e) => {
                            self.state = State::Ended;
                            return Err(StoreZipError::Materialize(name, e));
                        }
                    };
                    return Ok(Some(self.emit_entry(&name, resolved)));
                }
                State::FlushingDirectory => {
                    self.state = State::Ended;
                    return Ok(Some(self.flush_trailer()));
                }
                State::Ended => return Ok(None),
            }
        }
    }

    /// Drain the whole archive into `writer`, returning the total byte
    /// count
    pub fn write_into<W: Write>(mut self, writer: &mut W) -> Result<u64> {
        let mut total = 0u64;
        while let Some(chunk) = self.next_chunk()? {
            writer.write_all(&chunk)?;
            total += chunk.len() as u64;
        }
        writer.flush()?;
        Ok(total)
    }

    /// Build one local file record followed by the content, and queue the
    /// matching directory record. The directory record carries the offset
    /// at which this local record starts.
    fn emit_entry(&mut self, name: &str, resolved: ResolvedEntry) -> Vec<u8> {
        let name_bytes = name.as_bytes();
        // Sizes and offsets are written as 32-bit fields and wrap silently
        // beyond that width. Same for the 16-bit entry count. Callers are
        // responsible for staying within the classic ZIP limits.
        let size = resolved.bytes.len() as u32;
        self.directory.extend_from_slice(&header::directory_record(
            name_bytes,
            resolved.crc32,
            size,
            self.local_bytes_written as u32,
        ));

        let mut chunk = header::local_file_header(name_bytes, resolved.crc32, size);
        chunk.extend_from_slice(&resolved.bytes);
        self.local_bytes_written += chunk.len() as u64;
        chunk
    }

    /// The central directory verbatim, then the end record
    fn flush_trailer(&mut self) -> Vec<u8> {
        let mut chunk = std::mem::take(&mut self.directory);
        let directory_len = chunk.len() as u32;
        chunk.extend_from_slice(&header::end_of_directory_record(
            self.entries_total as u16,
            directory_len,
            self.local_bytes_written as u32,
        ));
        chunk
    }
}

impl Iterator for ZipStoreStream {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_chunk().transpose()
    }
}
