//! Entry model for archives under construction
//!
//! An [`Entry`] pairs an archive path with its content. Content is either a
//! fully in-memory blob or a reader that is drained to completion when the
//! entry is reached. Entries are consumed in the order they were supplied.

use std::io::Read;

/// Content of a single archive entry
pub enum EntryContent {
    /// Fully materialized content
    Bytes(Vec<u8>),
    /// A byte source drained to completion when the entry is emitted
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for EntryContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryContent::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            EntryContent::Reader(_) => f.debug_tuple("Reader").finish(),
        }
    }
}

/// A single file to be stored in the archive
///
/// Names are written to the archive verbatim as their raw bytes. ZIP readers
/// commonly assume CP437 or ASCII, so names outside printable ASCII are not
/// rejected here but may be misread downstream.
#[derive(Debug)]
pub struct Entry {
    /// Path of the entry inside the archive
    pub name: String,
    /// Entry content, in-memory or reader-backed
    pub content: EntryContent,
}

impl Entry {
    /// Create an entry from in-memory content
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: EntryContent::Bytes(bytes.into()),
        }
    }

    /// Create an entry whose content is read from `reader` when the entry
    /// is emitted
    pub fn from_reader(name: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        Self {
            name: name.into(),
            content: EntryContent::Reader(Box::new(reader)),
        }
    }
}
