//! Tests for the async emitter
//!
//! Run with: cargo test --features async

#[cfg(feature = "async")]
mod async_tests {
    use futures_util::StreamExt;
    use std::io::Cursor;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use store_zip::{AsyncEntry, AsyncZipStoreStream, Entry, StoreZipError, ZipStoreStream};
    use tempfile::NamedTempFile;
    use tokio::io::{AsyncRead, ReadBuf};

    fn sync_archive(entries: Vec<Entry>) -> Vec<u8> {
        let mut out = Vec::new();
        ZipStoreStream::new(entries).write_into(&mut out).unwrap();
        out
    }

    #[tokio::test]
    async fn async_output_matches_sync() {
        let expected = sync_archive(vec![
            Entry::from_bytes("a.txt", b"hi".to_vec()),
            Entry::from_bytes("b.txt", b"more content".to_vec()),
        ]);

        let stream = AsyncZipStoreStream::new(vec![
            AsyncEntry::from_bytes("a.txt", b"hi".to_vec()),
            AsyncEntry::from_bytes("b.txt", b"more content".to_vec()),
        ]);
        let mut out = Vec::new();
        stream.write_into(&mut out).await.unwrap();

        assert_eq!(out, expected);
    }

    #[tokio::test]
    async fn async_reader_entry_matches_bytes_entry() {
        let content = b"async reader content".to_vec();
        let expected = sync_archive(vec![Entry::from_bytes("r.txt", content.clone())]);

        let stream = AsyncZipStoreStream::new(vec![AsyncEntry::from_reader(
            "r.txt",
            Cursor::new(content),
        )]);
        let mut out = Vec::new();
        stream.write_into(&mut out).await.unwrap();

        assert_eq!(out, expected);
    }

    #[tokio::test]
    async fn streams_from_file_source() {
        let source_file = NamedTempFile::new().unwrap();
        let source_data = b"This is source data that will be streamed";
        std::fs::write(source_file.path(), source_data).unwrap();

        let file = tokio::fs::File::open(source_file.path()).await.unwrap();
        let stream = AsyncZipStoreStream::new(vec![AsyncEntry::from_reader("streamed.txt", file)]);
        let mut out = Vec::new();
        stream.write_into(&mut out).await.unwrap();

        assert_eq!(out, sync_archive(vec![Entry::from_bytes("streamed.txt", source_data.to_vec())]));
    }

    #[tokio::test]
    async fn terminal_state_is_idempotent() {
        let mut stream =
            AsyncZipStoreStream::new(vec![AsyncEntry::from_bytes("a.txt", b"hi".to_vec())]);

        assert!(stream.next_chunk().await.unwrap().is_some()); // entry
        assert!(stream.next_chunk().await.unwrap().is_some()); // trailer
        assert!(stream.next_chunk().await.unwrap().is_none());
        assert!(stream.next_chunk().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn stream_adapter_yields_whole_archive() {
        let expected = sync_archive(vec![
            Entry::from_bytes("1.txt", b"one".to_vec()),
            Entry::from_bytes("2.txt", b"two".to_vec()),
        ]);

        let emitter = AsyncZipStoreStream::new(vec![
            AsyncEntry::from_bytes("1.txt", b"one".to_vec()),
            AsyncEntry::from_bytes("2.txt", b"two".to_vec()),
        ]);

        let mut chunks = Box::pin(emitter.into_stream());
        let mut out = Vec::new();
        let mut chunk_count = 0;
        while let Some(chunk) = chunks.next().await {
            out.extend_from_slice(&chunk.unwrap());
            chunk_count += 1;
        }

        assert_eq!(chunk_count, 3); // two entries + trailer
        assert_eq!(out, expected);
    }

    /// Async reader that fails on the first poll
    struct FailingReader;

    impl AsyncRead for FailingReader {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &mut ReadBuf<'_>,
        ) -> Poll<std::io::Result<()>> {
            Poll::Ready(Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "source broke",
            )))
        }
    }

    #[tokio::test]
    async fn failing_source_aborts_archive() {
        let mut stream = AsyncZipStoreStream::new(vec![
            AsyncEntry::from_bytes("ok.txt", b"fine".to_vec()),
            AsyncEntry::from_reader("bad.bin", FailingReader),
        ]);

        assert!(stream.next_chunk().await.unwrap().is_some());

        let err = stream.next_chunk().await.expect_err("materialization failure");
        match err {
            StoreZipError::Materialize(name, _) => assert_eq!(name, "bad.bin"),
            other => panic!("unexpected error: {}", other),
        }

        assert!(stream.next_chunk().await.unwrap().is_none());
    }
}
