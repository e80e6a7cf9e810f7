//! # store-zip: Pull-Based Streaming ZIP Emitter
//!
//! `store-zip` produces valid, uncompressed (store-method) ZIP archives as
//! an incremental byte stream. Nothing is buffered beyond the entry
//! currently being emitted and the growing central directory, so archives
//! of any size can be streamed to a socket, an HTTP response body, or a
//! file without holding them in memory.
//!
//! ## Features
//!
//! - **Pull-based**: the consumer asks for each chunk; no entry is read
//!   before it is demanded
//! - **Store method**: content is stored raw with its CRC-32, lossless by
//!   construction
//! - **Flexible sources**: entries from in-memory bytes or any reader
//! - **Sync and async**: a blocking API, plus a Tokio API behind the
//!   `async` feature
//!
//! ## Quick Start
//!
//! ### Producing an archive chunk by chunk
//!
//! ```no_run
//! use store_zip::{Entry, ZipStoreStream};
//!
//! let mut stream = ZipStoreStream::new(vec![
//!     Entry::from_bytes("hello.txt", b"Hello, World!".to_vec()),
//!     Entry::from_bytes("data/raw.bin", vec![0u8; 1024]),
//! ]);
//!
//! while let Some(chunk) = stream.next_chunk()? {
//!     // send chunk downstream
//!     println!("{} bytes", chunk.len());
//! }
//! # Ok::<(), store_zip::StoreZipError>(())
//! ```
//!
//! ### Draining into any writer
//!
//! ```no_run
//! use store_zip::{Entry, ZipStoreStream};
//! use std::fs::File;
//!
//! let stream = ZipStoreStream::new(vec![
//!     Entry::from_reader("big.log", File::open("app.log")?),
//! ]);
//!
//! let mut out = File::create("logs.zip")?;
//! let written = stream.write_into(&mut out)?;
//! println!("wrote {} bytes", written);
//! # Ok::<(), store_zip::StoreZipError>(())
//! ```
//!
//! ### Async (requires the `async` feature)
//!
//! ```no_run
//! # #[cfg(feature = "async")]
//! # async fn run() -> store_zip::Result<()> {
//! use store_zip::{AsyncEntry, AsyncZipStoreStream};
//!
//! let mut stream = AsyncZipStoreStream::new(vec![
//!     AsyncEntry::from_bytes("hello.txt", b"Hello, async!".to_vec()),
//! ]);
//!
//! while let Some(chunk) = stream.next_chunk().await? {
//!     // send chunk downstream
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Limitations
//!
//! Entry names are written verbatim as raw bytes; readers that assume
//! ASCII or CP437 may misread names outside printable ASCII. Counts and
//! offsets are classic 16-/32-bit ZIP fields and wrap silently beyond
//! their width (no ZIP64). Archives are write-only and not timestamped.

pub mod emitter;
pub mod entry;
pub mod error;
pub mod materialize;

mod header;

#[cfg(feature = "async")]
pub mod async_emitter;

pub use emitter::ZipStoreStream;
pub use entry::{Entry, EntryContent};
pub use error::{Result, StoreZipError};
pub use materialize::{materialize, ResolvedEntry};

#[cfg(feature = "async")]
pub use async_emitter::{AsyncEntry, AsyncEntryContent, AsyncZipStoreStream};
