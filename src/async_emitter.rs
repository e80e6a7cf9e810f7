//! Async pull-based ZIP emitter, compatible with the Tokio runtime
//!
//! Async twin of the sync emitter with the same state machine and
//! bit-identical output. The only await point is materializing the
//! current entry's content; entries are never read ahead of demand, so
//! entry ordering stays strictly sequential.

use crate::error::{Result, StoreZipError};
use crate::header;
use crate::materialize::{crc32, ResolvedEntry};
use futures_util::Stream;
use std::collections::VecDeque;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Content of a single archive entry (async sources)
pub enum AsyncEntryContent {
    /// Fully materialized content
    Bytes(Vec<u8>),
    /// An async byte source drained to completion when the entry is
    /// emitted
    Reader(Box<dyn AsyncRead + Send + Unpin>),
}

impl std::fmt::Debug for AsyncEntryContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AsyncEntryContent::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            AsyncEntryContent::Reader(_) => f.debug_tuple("Reader").finish(),
        }
    }
}

/// A single file to be stored in the archive, with async content
///
/// Names are written verbatim as raw bytes, same as the sync
/// [`Entry`](crate::Entry).
#[derive(Debug)]
pub struct AsyncEntry {
    /// Path of the entry inside the archive
    pub name: String,
    /// Entry content, in-memory or reader-backed
    pub content: AsyncEntryContent,
}

impl AsyncEntry {
    /// Create an entry from in-memory content
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: AsyncEntryContent::Bytes(bytes.into()),
        }
    }

    /// Create an entry whose content is read from `reader` when the entry
    /// is emitted
    pub fn from_reader(
        name: impl Into<String>,
        reader: impl AsyncRead + Send + Unpin + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            content: AsyncEntryContent::Reader(Box::new(reader)),
        }
    }
}

/// Resolve async content into bytes plus CRC-32
async fn materialize(content: AsyncEntryContent) -> std::io::Result<ResolvedEntry> {
    let bytes = match content {
        AsyncEntryContent::Bytes(bytes) => bytes,
        AsyncEntryContent::Reader(mut reader) => {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;
            bytes
        }
    };
    Ok(ResolvedEntry {
        crc32: crc32(&bytes),
        bytes,
    })
}

/// Where the emitter is in the archive
enum State {
    /// Entries remain to be emitted
    Draining(VecDeque<AsyncEntry>),
    /// All entries emitted; central directory and end record still owed
    FlushingDirectory,
    /// End record emitted; no further bytes will be produced
    Ended,
}

/// Async pull-based streaming ZIP emitter (store method, no compression)
pub struct AsyncZipStoreStream {
    state: State,
    directory: Vec<u8>,
    entries_total: usize,
    local_bytes_written: u64,
}

impl AsyncZipStoreStream {
    /// Create an emitter over an ordered sequence of entries
    pub fn new(entries: impl IntoIterator<Item = AsyncEntry>) -> Self {
        let queue: VecDeque<AsyncEntry> = entries.into_iter().collect();
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
    /// produced and `Ok(None)` once it is complete; `Ok(None)` repeats on
    /// further calls. A failing content source aborts the archive and
    /// parks the emitter in its terminal state; bytes already produced
    /// must be discarded.
    pub async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        loop {
            match &mut self.state {
                State::Draining(queue) => {
                    let Some(entry) = queue.pop_front() else {
                        self.state = State::FlushingDirectory;
                        continue;
                    };
                    let AsyncEntry { name, content } = entry;
                    let resolved = match materialize(content).await {
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
    pub async fn write_into<W: AsyncWrite + Unpin>(mut self, writer: &mut W) -> Result<u64> {
        let mut total = 0u64;
        while let Some(chunk) = self.next_chunk().await? {
            writer.write_all(&chunk).await?;
            total += chunk.len() as u64;
        }
        writer.flush().await?;
        Ok(total)
    }

    /// Adapt the emitter into a `Stream` of archive chunks
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<u8>>> {
        futures_util::stream::unfold(self, |mut emitter| async move {
            match emitter.next_chunk().await {
                Ok(Some(chunk)) => Some((Ok(chunk), emitter)),
                Ok(None) => None,
                Err(e) => Some((Err(e), emitter)),
            }
        })
    }

    /// Build one local file record followed by the content, and queue the
    /// matching directory record. Field widths wrap silently, same as the
    /// sync emitter.
    fn emit_entry(&mut self, name: &str, resolved: ResolvedEntry) -> Vec<u8> {
        let name_bytes = name.as_bytes();
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
